#![cfg(feature = "complex")]

use num_complex::Complex;
use sigmat::signal::{conv, filter, toeplitz_symmetric};
use sigmat::{Matrix, Matrixz64};

type C = Complex<f64>;

fn c(re: f64, im: f64) -> C {
    Complex::new(re, im)
}

const TOL: f64 = 1e-12;

fn assert_complex_near(a: C, b: C, tol: f64, msg: &str) {
    assert!(
        (a.re - b.re).abs() < tol && (a.im - b.im).abs() < tol,
        "{}: {:?} vs {:?}",
        msg,
        a,
        b
    );
}

// ── Container ────────────────────────────────────────────────────────

#[test]
fn complex_elementwise() {
    let a = Matrix::from_slice(1, 2, &[c(1.0, 1.0), c(2.0, -1.0)]).unwrap();
    let b = Matrix::from_slice(1, 2, &[c(0.0, 1.0), c(1.0, 0.0)]).unwrap();
    let p = &a * &b;
    assert_eq!(p[0], c(-1.0, 1.0));
    assert_eq!(p[1], c(2.0, -1.0));
    let s = c(0.0, 1.0) * &a;
    assert_eq!(s[0], c(-1.0, 1.0));
}

#[test]
fn complex_text_round_trip() {
    let m: Matrixz64 = "1+2i 3-1i; 0+0i -2+0.5i".parse().unwrap();
    assert_eq!(m.shape(), (2, 2));
    assert_eq!(m[(0, 1)], c(3.0, -1.0));
    assert_eq!(m[(1, 1)], c(-2.0, 0.5));
    let back: Matrixz64 = m.to_string().parse().unwrap();
    assert_eq!(back, m);
}

#[test]
fn complex_unparsable_field_is_zero() {
    let m: Matrixz64 = "1+1i bogus".parse().unwrap();
    assert_eq!(m[1], C::default());
}

#[test]
fn promote_and_cast() {
    let r = Matrix::from_slice(2, 1, &[1_i32, -3]).unwrap();
    let z = r.to_complex::<f64>();
    assert_eq!(z.shape(), (2, 1));
    assert_eq!(z[1], c(-3.0, 0.0));
    let zf = Matrix::from_slice(1, 1, &[c(2.7, -1.2)]).unwrap().cast_complex::<i64>();
    assert_eq!(zf[0], Complex::new(2, -1));
}

// ── Signal ───────────────────────────────────────────────────────────

#[test]
fn complex_signal_real_coefficients() {
    // complex samples through a real two-tap filter
    let b = Matrix::from_slice(1, 2, &[1.0_f64, 1.0]).unwrap();
    let a = Matrix::from_slice(1, 1, &[1.0_f64]).unwrap();
    let x = Matrix::from_slice(1, 3, &[c(1.0, 0.0), c(0.0, 1.0), c(-1.0, 0.0)]).unwrap();
    let y = filter(&b, &a, &x, 1).unwrap();
    let want = [c(1.0, 0.0), c(1.0, 1.0), c(-1.0, 1.0), c(-1.0, 0.0)];
    for (i, (&g, &w)) in y.iter().zip(&want).enumerate() {
        assert_complex_near(g, w, TOL, &format!("sample {}", i));
    }
}

#[test]
fn complex_conv_rotates() {
    // multiplying polynomials by j rotates every coefficient
    let p = Matrix::from_slice(1, 3, &[c(1.0, 0.0), c(2.0, 0.0), c(3.0, 0.0)]).unwrap();
    let q = Matrix::from_slice(1, 2, &[c(0.0, 1.0), c(0.0, 0.0)]).unwrap();
    let y = conv(&p, &q).unwrap();
    let want = [c(0.0, 1.0), c(0.0, 2.0), c(0.0, 3.0), c(0.0, 0.0)];
    for (i, (&g, &w)) in y.iter().zip(&want).enumerate() {
        assert_complex_near(g, w, TOL, &format!("sample {}", i));
    }
}

#[test]
fn complex_toeplitz() {
    let v = Matrix::from_slice(1, 2, &[c(1.0, 0.0), c(0.0, -1.0)]).unwrap();
    let t = toeplitz_symmetric(&v).unwrap();
    assert_eq!(t[(0, 1)], c(0.0, -1.0));
    assert_eq!(t[(1, 0)], c(0.0, -1.0));
    assert_eq!(t[(1, 1)], c(1.0, 0.0));
}
