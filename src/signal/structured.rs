use crate::matrix::{Matrix, MatrixError};
use crate::traits::Scalar;

fn require_vector<T>(v: &Matrix<T>, what: &'static str) -> Result<(), MatrixError> {
    if v.is_empty() || !(v.is_vector() || v.is_scalar()) {
        return Err(MatrixError::Unsupported(what));
    }
    Ok(())
}

/// Convolution matrix of `v` for kernels of length `k`.
///
/// For a column vector (or a single element) the result is
/// `(len + k - 1) x k` with `v` running down column `j` from row `j`, so
/// that `convmtx(v, k) * h == conv(v, h)` for a length-`k` column `h`. A
/// row vector gives the transposed layout, `k x (len + k - 1)`, with `v`
/// along row `j` from column `j`.
///
/// ```
/// use sigmat::{signal::convmtx, Matrix};
/// let v = Matrix::from_slice(3, 1, &[1, 2, 3]).unwrap();
/// let m = convmtx(&v, 2).unwrap();
/// assert_eq!(m, Matrix::from_rows(4, 2, &[1, 0, 2, 1, 3, 2, 0, 3]).unwrap());
/// ```
pub fn convmtx<T: Scalar>(v: &Matrix<T>, k: usize) -> Result<Matrix<T>, MatrixError> {
    require_vector(v, "convolution matrix of a non-vector")?;
    let n = v.len();
    let band = n + k.max(1) - 1;
    if v.ncols() == 1 {
        let mut m = Matrix::zeros(band, k)?;
        for j in 0..k {
            for (i, &x) in v.iter().enumerate() {
                m[(i + j, j)] = x;
            }
        }
        Ok(m)
    } else {
        let mut m = Matrix::zeros(k, band)?;
        for j in 0..k {
            for (i, &x) in v.iter().enumerate() {
                m[(j, i + j)] = x;
            }
        }
        Ok(m)
    }
}

/// Toeplitz matrix generated by `col`, `len(col) x len(row)` in shape.
///
/// Entry `(i, j)` is `col[|j - i|]`; `row` only sets the number of
/// columns. Every diagonal offset must exist in `col`, so a `row` longer
/// than `col` is an [`MatrixError::IndexOutOfRange`].
///
/// ```
/// use sigmat::{signal::toeplitz, Matrix};
/// let c = Matrix::from_slice(3, 1, &[1, 2, 3]).unwrap();
/// let r = Matrix::from_slice(1, 2, &[1, 9]).unwrap();
/// let t = toeplitz(&c, &r).unwrap();
/// assert_eq!(t, Matrix::from_rows(3, 2, &[1, 2, 2, 1, 3, 2]).unwrap());
/// ```
pub fn toeplitz<T: Scalar>(col: &Matrix<T>, row: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    require_vector(col, "toeplitz column is not a vector")?;
    require_vector(row, "toeplitz row is not a vector")?;
    if row.len() > col.len() {
        return Err(MatrixError::IndexOutOfRange {
            index: row.len() - 1,
            bound: col.len(),
        });
    }
    if col[0] != row[0] {
        log::debug!(
            "toeplitz: column and row disagree at the diagonal ({:?} vs {:?})",
            col[0],
            row[0]
        );
    }
    Matrix::from_fn(col.len(), row.len(), |i, j| col[i.abs_diff(j)])
}

/// Symmetric Toeplitz matrix generated by `col`: entry `(i, j)` is
/// `col[|i - j|]`.
///
/// ```
/// use sigmat::{signal::toeplitz_symmetric, Matrix};
/// let c = Matrix::from_slice(1, 3, &[1, 2, 3]).unwrap();
/// let t = toeplitz_symmetric(&c).unwrap();
/// assert_eq!(t, Matrix::from_rows(3, 3, &[1, 2, 3, 2, 1, 2, 3, 2, 1]).unwrap());
/// ```
pub fn toeplitz_symmetric<T: Scalar>(col: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    toeplitz(col, col)
}
