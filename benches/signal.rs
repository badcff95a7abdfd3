use criterion::{criterion_group, criterion_main, Criterion};
use sigmat::signal::{conv, convmtx, filter, toeplitz_symmetric};
use sigmat::Matrix;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn ramp(n: usize) -> Matrix<f64> {
    Matrix::from_fn(n, 1, |i, _| ((i * 7919) % 101) as f64 / 101.0 - 0.5).unwrap()
}

fn kernel(n: usize) -> Matrix<f64> {
    Matrix::from_fn(1, n, |_, j| 1.0 / (j + 1) as f64).unwrap()
}

// ---------------------------------------------------------------------------
// filter
// ---------------------------------------------------------------------------

fn filter_fir(c: &mut Criterion) {
    let mut g = c.benchmark_group("filter_fir");
    let a = Matrix::new(1, 1, 1.0).unwrap();
    for &(n, taps) in &[(1024, 8), (1024, 64), (16384, 32)] {
        let x = ramp(n);
        let b = kernel(taps);
        g.bench_function(format!("{}x{}", n, taps), |bch| {
            bch.iter(|| filter(&b, &a, std::hint::black_box(&x), 0).unwrap())
        });
    }
    g.finish();
}

fn filter_iir(c: &mut Criterion) {
    let mut g = c.benchmark_group("filter_iir");
    // second-order section
    let b = Matrix::from_slice(1, 3, &[0.2929, 0.5858, 0.2929]).unwrap();
    let a = Matrix::from_slice(1, 3, &[1.0, 0.0, 0.1716]).unwrap();
    for &n in &[1024, 16384] {
        let x = ramp(n);
        g.bench_function(format!("biquad_{}", n), |bch| {
            bch.iter(|| filter(&b, &a, std::hint::black_box(&x), 0).unwrap())
        });
    }
    let cols = Matrix::from_fn(1024, 16, |i, j| ((i + j) % 13) as f64).unwrap();
    g.bench_function("biquad_1024x16_columns", |bch| {
        bch.iter(|| filter(&b, &a, std::hint::black_box(&cols), 0).unwrap())
    });
    g.finish();
}

// ---------------------------------------------------------------------------
// conv / structured matrices
// ---------------------------------------------------------------------------

fn convolution(c: &mut Criterion) {
    let mut g = c.benchmark_group("conv");
    let x = ramp(4096);
    for &taps in &[16, 128] {
        let h = kernel(taps);
        g.bench_function(format!("4096x{}", taps), |bch| {
            bch.iter(|| conv(std::hint::black_box(&x), &h).unwrap())
        });
    }
    g.finish();
}

fn structured(c: &mut Criterion) {
    let mut g = c.benchmark_group("structured");
    let v = ramp(256);
    g.bench_function("convmtx_256x32", |bch| {
        bch.iter(|| convmtx(std::hint::black_box(&v), 32).unwrap())
    });
    g.bench_function("toeplitz_256", |bch| {
        bch.iter(|| toeplitz_symmetric(std::hint::black_box(&v)).unwrap())
    });
    g.finish();
}

// ---------------------------------------------------------------------------
// text
// ---------------------------------------------------------------------------

fn text(c: &mut Criterion) {
    let mut g = c.benchmark_group("text");
    let m = Matrix::from_fn(64, 64, |i, j| (i * 64 + j) as i32).unwrap();
    let s = m.to_string();
    g.bench_function("print_64x64", |bch| bch.iter(|| std::hint::black_box(&m).to_string()));
    g.bench_function("parse_64x64", |bch| {
        bch.iter(|| std::hint::black_box(s.as_str()).parse::<Matrix<i32>>().unwrap())
    });
    g.finish();
}

criterion_group!(benches, filter_fir, filter_iir, convolution, structured, text);
criterion_main!(benches);
