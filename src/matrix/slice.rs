use crate::traits::Scalar;

use super::{Matrix, MatrixError};

impl<T> Matrix<T> {
    /// View the entire matrix as a flat slice in column-major order.
    ///
    /// ```
    /// use sigmat::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1, 2, 3, 4]).unwrap();
    /// assert_eq!(m.as_slice(), &[1, 3, 2, 4]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// View the entire matrix as a mutable flat slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_mut_slice()
    }

    /// Iterate over all elements in column-major order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over all elements in column-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Matrix<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// ── Vector slicing ──────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Shape of an `n`-element vector with the same orientation as `self`.
    ///
    /// A 1x1 matrix counts as a row vector of length one.
    fn vector_shape(&self, n: usize) -> Result<(usize, usize), MatrixError> {
        if self.nrows == 1 {
            Ok((1, n))
        } else if self.ncols == 1 {
            Ok((n, 1))
        } else {
            Err(MatrixError::Unsupported(
                "vector slicing of a matrix with more than one row and column",
            ))
        }
    }

    /// The first `n` elements of a vector.
    ///
    /// ```
    /// use sigmat::Matrix;
    /// let v = Matrix::from_slice(1, 5, &[1, 2, 3, 4, 5]).unwrap();
    /// assert_eq!(v.left(2).unwrap().as_slice(), &[1, 2]);
    /// assert_eq!(v.right(2).unwrap().as_slice(), &[4, 5]);
    /// assert_eq!(v.mid(1, 3).unwrap().as_slice(), &[2, 3, 4]);
    /// ```
    pub fn left(&self, n: usize) -> Result<Self, MatrixError> {
        let (r, c) = self.vector_shape(n)?;
        if n > self.len() {
            return Err(MatrixError::IndexOutOfRange {
                index: n - 1,
                bound: self.len(),
            });
        }
        Matrix::from_slice(r, c, &self.data[..n])
    }

    /// The last `n` elements of a vector.
    pub fn right(&self, n: usize) -> Result<Self, MatrixError> {
        let (r, c) = self.vector_shape(n)?;
        let len = self.len();
        if n > len {
            return Err(MatrixError::IndexOutOfRange {
                index: n - 1,
                bound: len,
            });
        }
        Matrix::from_slice(r, c, &self.data[len - n..])
    }

    /// Elements `begin..=end` of a vector (`end - begin + 1` of them).
    pub fn mid(&self, begin: usize, end: usize) -> Result<Self, MatrixError> {
        let len = self.len();
        if end >= len {
            self.vector_shape(0)?;
            return Err(MatrixError::IndexOutOfRange { index: end, bound: len });
        }
        if begin > end {
            self.vector_shape(0)?;
            return Err(MatrixError::IndexOutOfRange {
                index: begin,
                bound: end + 1,
            });
        }
        let (r, c) = self.vector_shape(end - begin + 1)?;
        Matrix::from_slice(r, c, &self.data[begin..=end])
    }
}
