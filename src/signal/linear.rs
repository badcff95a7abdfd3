use alloc::vec::Vec;
use core::ops::Mul;

use crate::matrix::{Matrix, MatrixError};
use crate::traits::Scalar;

/// Run the direct-form difference equation over one contiguous signal,
/// appending `x.len() + tail` samples to `out`.
///
/// ```text
/// y[n] = b[0]·x[n] + … + b[nb-1]·x[n-nb+1] − a[1]·y[n-1] − … − a[na-1]·y[n-na+1]
/// ```
///
/// `x[i]` is zero past the end of the signal, so the `tail` samples hold
/// the decay of the filter once the input stops. `a[0]` is never used.
fn run<T, C>(b: &[C], a: &[C], x: &[T], tail: usize, out: &mut Vec<T>)
where
    T: Scalar + Mul<C, Output = T>,
    C: Copy,
{
    let start = out.len();
    for n in 0..x.len() + tail {
        let mut acc = T::zero();
        for (k, &bk) in b.iter().enumerate().take(n + 1) {
            if let Some(&xv) = x.get(n - k) {
                acc = acc + xv * bk;
            }
        }
        for (k, &ak) in a.iter().enumerate().take(n + 1).skip(1) {
            acc = acc - out[start + n - k] * ak;
        }
        out.push(acc);
    }
}

/// Filter `x` with the rational transfer function `b(z) / a(z)`.
///
/// Coefficients are read from `b` and `a` in linear order, whatever their
/// shape. `a[0]` is taken to be 1 and never applied, so pass normalized
/// coefficients.
///
/// The output shape follows `x`:
/// * column vector (or a single sample): `(len + tail) x 1`
/// * row vector: `1 x (len + tail)`
/// * general matrix: each column is filtered on its own, giving
///   `(nrows + tail) x ncols`
///
/// `tail` extra samples are produced after the input ends, with the input
/// taken as zero there.
///
/// ```
/// use sigmat::{signal::filter, Matrix};
///
/// let one = Matrix::from_slice(1, 1, &[1.0_f64]).unwrap();
/// let x = Matrix::from_slice(1, 3, &[3.0_f64, -1.0, 2.0]).unwrap();
/// assert_eq!(filter(&one, &one, &x, 0).unwrap(), x);
///
/// // two-tap moving sum with its tail
/// let b = Matrix::from_slice(1, 2, &[1.0_f64, 1.0]).unwrap();
/// let y = filter(&b, &one, &x, 1).unwrap();
/// assert_eq!(y.as_slice(), &[3.0, 2.0, 1.0, 2.0]);
/// ```
pub fn filter<T, C>(
    b: &Matrix<C>,
    a: &Matrix<C>,
    x: &Matrix<T>,
    tail: usize,
) -> Result<Matrix<T>, MatrixError>
where
    T: Scalar + Mul<C, Output = T>,
    C: Copy,
{
    if x.is_empty() {
        return Err(MatrixError::Unsupported("filtering an empty signal"));
    }
    if b.is_empty() {
        return Err(MatrixError::Unsupported("filtering with no numerator coefficients"));
    }
    let (b, a) = (b.as_slice(), a.as_slice());

    if x.nrows() > 1 && x.ncols() > 1 {
        log::trace!("filter: {} columns of {} samples", x.ncols(), x.nrows());
        let len = x.nrows() + tail;
        let mut data = Vec::with_capacity(len * x.ncols());
        for col in x.as_slice().chunks_exact(x.nrows()) {
            run(b, a, col, tail, &mut data);
        }
        Matrix::from_vec(len, x.ncols(), data)
    } else {
        let len = x.len() + tail;
        let mut data = Vec::with_capacity(len);
        run(b, a, x.as_slice(), tail, &mut data);
        if x.ncols() == 1 {
            log::trace!("filter: column signal of {} samples", x.len());
            Matrix::from_vec(len, 1, data)
        } else {
            log::trace!("filter: row signal of {} samples", x.len());
            Matrix::from_vec(1, len, data)
        }
    }
}

/// Convolve `p` with `q`.
///
/// * If either operand is a single element, the other is scaled by it.
/// * Otherwise the vector operand (`q` is tried first) becomes an FIR
///   kernel and the other operand is filtered with it, so the result has
///   the orientation of the filtered operand and `len(p) + len(q) - 1`
///   samples along it. When the filtered operand is a general matrix each
///   of its columns is convolved with the kernel.
/// * Two general matrices are [`MatrixError::Unsupported`].
///
/// ```
/// use sigmat::{signal::conv, Matrix};
/// let p = Matrix::from_slice(1, 3, &[1, 2, 3]).unwrap();
/// let q = Matrix::from_slice(1, 2, &[0, 1]).unwrap();
/// assert_eq!(conv(&p, &q).unwrap().as_slice(), &[0, 1, 2, 3]);
/// ```
pub fn conv<T: Scalar>(p: &Matrix<T>, q: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    if p.is_empty() || q.is_empty() {
        return Err(MatrixError::Unsupported("convolution with an empty operand"));
    }
    if p.is_scalar() {
        return Ok(q.scale(p[0]));
    }
    if q.is_scalar() {
        return Ok(p.scale(q[0]));
    }
    let unit = Matrix::new(1, 1, T::one())?;
    if q.is_vector() {
        filter(q, &unit, p, q.len() - 1)
    } else if p.is_vector() {
        filter(p, &unit, q, p.len() - 1)
    } else {
        Err(MatrixError::Unsupported("convolution of two matrices"))
    }
}
