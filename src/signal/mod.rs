//! Signal processing on [`Matrix`] values: resampling, linear filtering,
//! convolution, and structured-matrix construction.
//!
//! Everything here goes through the public `Matrix` API. Signals are
//! vectors (one row or one column); the resampling functions and `filter`
//! also accept general matrices and work down each column independently.
//!
//! # Examples
//!
//! ```
//! use sigmat::Matrix;
//! use sigmat::signal::{conv, filter, toeplitz_symmetric};
//!
//! let x = Matrix::from_slice(1, 3, &[1.0_f64, 2.0, 3.0]).unwrap();
//! let h = Matrix::from_slice(1, 2, &[0.0_f64, 1.0]).unwrap();
//! assert_eq!(conv(&x, &h).unwrap().as_slice(), &[0.0, 1.0, 2.0, 3.0]);
//!
//! // one-pole smoother: y[n] = x[n] + 0.5 y[n-1]
//! let b = Matrix::from_slice(1, 1, &[1.0_f64]).unwrap();
//! let a = Matrix::from_slice(1, 2, &[1.0_f64, -0.5]).unwrap();
//! let step = Matrix::new(4, 1, 1.0_f64).unwrap();
//! let y = filter(&b, &a, &step, 0).unwrap();
//! assert_eq!(y.as_slice(), &[1.0, 1.5, 1.75, 1.875]);
//!
//! let t = toeplitz_symmetric(&x).unwrap();
//! assert_eq!(t[(2, 0)], 3.0);
//! ```

mod linear;
mod structured;


pub use linear::{conv, filter};
pub use structured::{convmtx, toeplitz, toeplitz_symmetric};

use crate::matrix::{Matrix, MatrixError};
use crate::traits::Scalar;

/// Insert `u - 1` zero rows after every row of `x`.
///
/// The result has `u * x.nrows()` rows and the same number of columns;
/// input row `i` lands on output row `i * u`.
///
/// ```
/// use sigmat::{signal::upsample, Matrix};
/// let x = Matrix::from_slice(3, 1, &[1, 2, 3]).unwrap();
/// assert_eq!(upsample(&x, 2).unwrap().as_slice(), &[1, 0, 2, 0, 3, 0]);
/// ```
pub fn upsample<T: Scalar>(x: &Matrix<T>, u: usize) -> Result<Matrix<T>, MatrixError> {
    if u == 0 {
        return Err(MatrixError::Unsupported("upsampling by a factor of zero"));
    }
    let mut y = Matrix::zeros(u * x.nrows(), x.ncols())?;
    for j in 0..x.ncols() {
        for i in 0..x.nrows() {
            y[(i * u, j)] = x[(i, j)];
        }
    }
    Ok(y)
}

/// Keep every `d`-th row of `x`, starting at row 0.
///
/// The result has `x.nrows() / d` rows (truncating); asking for fewer
/// than one row is an [`MatrixError::InvalidShape`].
///
/// ```
/// use sigmat::{signal::downsample, Matrix};
/// let x = Matrix::from_slice(4, 1, &[1, 2, 3, 4]).unwrap();
/// assert_eq!(downsample(&x, 2).unwrap().as_slice(), &[1, 3]);
/// ```
pub fn downsample<T: Scalar>(x: &Matrix<T>, d: usize) -> Result<Matrix<T>, MatrixError> {
    if d == 0 {
        return Err(MatrixError::Unsupported("downsampling by a factor of zero"));
    }
    let nrows = x.nrows() / d;
    Matrix::from_fn(nrows, x.ncols(), |i, j| x[(i * d, j)])
}
