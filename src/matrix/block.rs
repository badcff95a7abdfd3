use alloc::vec::Vec;

use crate::traits::Scalar;

use super::{Matrix, MatrixError};

// ── Row / Column access ─────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Copy row `i` into a new `1 x ncols` matrix.
    ///
    /// ```
    /// use sigmat::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(m.row(1).unwrap().as_slice(), &[4, 5, 6]);
    /// assert!(m.row(2).is_err());
    /// ```
    pub fn row(&self, i: usize) -> Result<Self, MatrixError> {
        if i >= self.nrows {
            return Err(MatrixError::IndexOutOfRange {
                index: i,
                bound: self.nrows,
            });
        }
        let data: Vec<T> = (0..self.ncols).map(|j| self.data[self.lindex(i, j)]).collect();
        Matrix::from_vec(1, self.ncols, data)
    }

    /// Copy column `j` into a new `nrows x 1` matrix.
    pub fn col(&self, j: usize) -> Result<Self, MatrixError> {
        if j >= self.ncols {
            return Err(MatrixError::IndexOutOfRange {
                index: j,
                bound: self.ncols,
            });
        }
        let start = j * self.nrows;
        Matrix::from_slice(self.nrows, 1, &self.data[start..start + self.nrows])
    }

    /// Overwrite row `i` with the first `ncols` elements of `src`.
    ///
    /// `src` may have any shape; its elements are read in column-major
    /// order and any beyond `ncols` are ignored.
    pub fn set_row(&mut self, i: usize, src: &Matrix<T>) -> Result<(), MatrixError> {
        if i >= self.nrows {
            return Err(MatrixError::IndexOutOfRange {
                index: i,
                bound: self.nrows,
            });
        }
        if src.len() < self.ncols {
            return Err(MatrixError::LengthMismatch {
                expected: self.ncols,
                got: src.len(),
            });
        }
        for j in 0..self.ncols {
            let k = self.lindex(i, j);
            self.data[k] = src.data[j];
        }
        Ok(())
    }

    /// Overwrite column `j` with the first `nrows` elements of `src`.
    pub fn set_col(&mut self, j: usize, src: &Matrix<T>) -> Result<(), MatrixError> {
        if j >= self.ncols {
            return Err(MatrixError::IndexOutOfRange {
                index: j,
                bound: self.ncols,
            });
        }
        if src.len() < self.nrows {
            return Err(MatrixError::LengthMismatch {
                expected: self.nrows,
                got: src.len(),
            });
        }
        let start = j * self.nrows;
        self.data[start..start + self.nrows].copy_from_slice(&src.data[..self.nrows]);
        Ok(())
    }
}

// ── Row / Column manipulation ───────────────────────────────────────

impl<T> Matrix<T> {
    /// Swap two rows in place.
    ///
    /// ```
    /// use sigmat::Matrix;
    /// let mut m = Matrix::from_rows(2, 2, &[1, 2, 3, 4]).unwrap();
    /// m.swap_rows(0, 1).unwrap();
    /// assert_eq!(m[(0, 0)], 3);
    /// assert_eq!(m[(1, 0)], 1);
    /// ```
    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<(), MatrixError> {
        for &r in &[a, b] {
            if r >= self.nrows {
                return Err(MatrixError::IndexOutOfRange {
                    index: r,
                    bound: self.nrows,
                });
            }
        }
        if a != b {
            for j in 0..self.ncols {
                let ia = self.lindex(a, j);
                let ib = self.lindex(b, j);
                self.data.swap(ia, ib);
            }
        }
        Ok(())
    }

    /// Swap two columns in place.
    pub fn swap_cols(&mut self, a: usize, b: usize) -> Result<(), MatrixError> {
        for &c in &[a, b] {
            if c >= self.ncols {
                return Err(MatrixError::IndexOutOfRange {
                    index: c,
                    bound: self.ncols,
                });
            }
        }
        if a != b {
            for i in 0..self.nrows {
                let ia = self.lindex(i, a);
                let ib = self.lindex(i, b);
                self.data.swap(ia, ib);
            }
        }
        Ok(())
    }
}

// ── Shrink ──────────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Remove row `row` and column `col`, giving an `(nrows-1) x (ncols-1)`
    /// matrix (the minor used by cofactor expansion).
    ///
    /// When either dimension is 1, or an index is out of range, this is a
    /// no-op and a copy of `self` is returned.
    ///
    /// ```
    /// use sigmat::Matrix;
    /// let m = Matrix::from_rows(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
    /// let s = m.shrink(1, 1);
    /// assert_eq!(s, Matrix::from_rows(2, 2, &[1, 3, 7, 9]).unwrap());
    /// assert_eq!(m.shrink(3, 0), m);
    /// ```
    pub fn shrink(&self, row: usize, col: usize) -> Self {
        if self.nrows < 2 || self.ncols < 2 || row >= self.nrows || col >= self.ncols {
            log::debug!(
                "shrink({}, {}) on {}x{} matrix is a no-op",
                row, col, self.nrows, self.ncols
            );
            return self.clone();
        }
        let mut data = Vec::with_capacity((self.nrows - 1) * (self.ncols - 1));
        for j in (0..self.ncols).filter(|&j| j != col) {
            for i in (0..self.nrows).filter(|&i| i != row) {
                data.push(self.data[self.lindex(i, j)]);
            }
        }
        Matrix {
            data: data.into(),
            nrows: self.nrows - 1,
            ncols: self.ncols - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Matrix<i32> {
        // [1 2 3; 4 5 6]
        Matrix::from_rows(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap()
    }

    #[test]
    fn row_col_shapes() {
        let m = grid();
        let r = m.row(0).unwrap();
        assert_eq!(r.shape(), (1, 3));
        assert_eq!(r.as_slice(), &[1, 2, 3]);
        let c = m.col(2).unwrap();
        assert_eq!(c.shape(), (2, 1));
        assert_eq!(c.as_slice(), &[3, 6]);
    }

    #[test]
    fn row_col_out_of_range() {
        let m = grid();
        assert_eq!(
            m.row(2).unwrap_err(),
            MatrixError::IndexOutOfRange { index: 2, bound: 2 }
        );
        assert_eq!(
            m.col(3).unwrap_err(),
            MatrixError::IndexOutOfRange { index: 3, bound: 3 }
        );
    }

    #[test]
    fn set_row_and_col() {
        let mut m = grid();
        m.set_row(1, &Matrix::from_slice(1, 3, &[7, 8, 9]).unwrap())
            .unwrap();
        assert_eq!(m.row(1).unwrap().as_slice(), &[7, 8, 9]);

        m.set_col(0, &Matrix::from_slice(2, 1, &[-1, -2]).unwrap())
            .unwrap();
        assert_eq!(m[(0, 0)], -1);
        assert_eq!(m[(1, 0)], -2);
    }

    #[test]
    fn set_row_one_past_end_rejected() {
        let mut m = grid();
        let src = Matrix::new(1, 3, 0).unwrap();
        assert_eq!(
            m.set_row(2, &src).unwrap_err(),
            MatrixError::IndexOutOfRange { index: 2, bound: 2 }
        );
        let src = Matrix::new(2, 1, 0).unwrap();
        assert!(m.set_col(3, &src).is_err());
        assert_eq!(m, grid());
    }

    #[test]
    fn set_row_short_source_rejected() {
        let mut m = grid();
        let short = Matrix::new(1, 2, 0).unwrap();
        assert_eq!(
            m.set_row(0, &short).unwrap_err(),
            MatrixError::LengthMismatch { expected: 3, got: 2 }
        );
    }

    #[test]
    fn set_row_long_source_truncated() {
        let mut m = grid();
        let long = Matrix::from_slice(1, 5, &[0, 0, 0, 1, 1]).unwrap();
        m.set_row(0, &long).unwrap();
        assert_eq!(m.row(0).unwrap().as_slice(), &[0, 0, 0]);
    }

    #[test]
    fn swap_rows_cols() {
        let mut m = grid();
        m.swap_rows(0, 1).unwrap();
        assert_eq!(m, Matrix::from_rows(2, 3, &[4, 5, 6, 1, 2, 3]).unwrap());
        m.swap_cols(0, 2).unwrap();
        assert_eq!(m, Matrix::from_rows(2, 3, &[6, 5, 4, 3, 2, 1]).unwrap());
    }

    #[test]
    fn swap_out_of_range() {
        let mut m = grid();
        assert!(m.swap_rows(0, 2).is_err());
        assert!(m.swap_cols(3, 0).is_err());
        assert_eq!(m, grid());
    }

    #[test]
    fn shrink_square() {
        for n in 2..5 {
            let m = Matrix::from_fn(n, n, |i, j| (i * n + j) as i32).unwrap();
            for r in 0..n {
                for c in 0..n {
                    let s = m.shrink(r, c);
                    assert_eq!(s.shape(), (n - 1, n - 1));
                }
            }
        }
    }

    #[test]
    fn shrink_values() {
        let m = grid();
        let s = m.shrink(0, 1);
        assert_eq!(s, Matrix::from_rows(1, 2, &[4, 6]).unwrap());
    }

    #[test]
    fn shrink_no_op() {
        let m = Matrix::new(1, 1, 5).unwrap();
        assert_eq!(m.shrink(0, 0), m);
        let v = Matrix::from_slice(1, 3, &[1, 2, 3]).unwrap();
        assert_eq!(v.shrink(0, 1), v);
        let g = grid();
        assert_eq!(g.shrink(2, 0), g);
        assert_eq!(g.shrink(0, 3), g);
    }
}
