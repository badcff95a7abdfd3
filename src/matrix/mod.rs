//! Heap-allocated, column-major `Matrix<T>` with runtime dimensions.

pub mod aliases;
mod block;
mod convert;
mod ops;
mod slice;
mod text;

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::buffer::Buffer;
use crate::traits::Scalar;

/// Why a textual matrix could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing but whitespace and brackets.
    Empty,
    /// The total number of fields is not a multiple of the number of rows.
    UnevenColumns {
        /// Total number of elements read.
        fields: usize,
        /// Number of rows found.
        rows: usize,
    },
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty matrix text"),
            ParseError::UnevenColumns { fields, rows } => write!(
                f,
                "{} fields cannot be split evenly over {} rows",
                fields, rows
            ),
        }
    }
}

/// Errors from matrix construction, access and the signal algorithms.
///
/// ```
/// use sigmat::{Matrix, MatrixError};
///
/// let m = Matrix::new(2, 2, 0_i32).unwrap();
/// assert_eq!(
///     m.get(2, 0).unwrap_err(),
///     MatrixError::IndexOutOfRange { index: 2, bound: 2 }
/// );
/// assert_eq!(
///     Matrix::new(0, 3, 0_i32).unwrap_err(),
///     MatrixError::InvalidShape { rows: 0, cols: 3 }
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// A shape with a zero dimension was requested.
    InvalidShape { rows: usize, cols: usize },
    /// A row, column or linear index is not below its bound.
    IndexOutOfRange { index: usize, bound: usize },
    /// Operands of an elementwise operation have different shapes.
    ShapeMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },
    /// A flat source has the wrong number of elements.
    LengthMismatch { expected: usize, got: usize },
    /// The operand shape or argument is not handled by the operation.
    Unsupported(&'static str),
    /// Matrix text could not be read.
    Parse(ParseError),
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::InvalidShape { rows, cols } => {
                write!(f, "invalid shape {}x{}: dimensions must be positive", rows, cols)
            }
            MatrixError::IndexOutOfRange { index, bound } => {
                write!(f, "index {} out of range (bound {})", index, bound)
            }
            MatrixError::ShapeMismatch { expected, got } => write!(
                f,
                "dimension mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, got.0, got.1
            ),
            MatrixError::LengthMismatch { expected, got } => {
                write!(f, "length mismatch: expected {} elements, got {}", expected, got)
            }
            MatrixError::Unsupported(what) => write!(f, "unsupported: {}", what),
            MatrixError::Parse(e) => write!(f, "parse error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}

impl From<ParseError> for MatrixError {
    fn from(e: ParseError) -> Self {
        MatrixError::Parse(e)
    }
}

/// Dense two-dimensional matrix with value semantics.
///
/// Elements are stored column-major in an exclusively-owned [`Buffer`]:
/// element `(r, c)` lives at linear offset `r + c * nrows`. Cloning copies
/// the storage; nothing is ever shared between two matrices.
/// Equality compares the shape first, then every element exactly.
///
/// A default-constructed matrix is empty (0x0, no storage). Every other
/// matrix has at least one row and one column.
///
/// # Examples
///
/// ```
/// use sigmat::Matrix;
///
/// let mut m = Matrix::new(2, 3, 0.0_f64).unwrap();
/// m[(1, 2)] = 5.0;
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m[5], 5.0); // 1 + 2 * 2
/// assert!(m.get(2, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    nrows: usize,
    ncols: usize,
    data: Buffer<T>,
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self {
            data: Buffer::new(),
            nrows: 0,
            ncols: 0,
        }
    }
}

#[inline]
fn check_shape(nrows: usize, ncols: usize) -> Result<(), MatrixError> {
    if nrows == 0 || ncols == 0 {
        return Err(MatrixError::InvalidShape {
            rows: nrows,
            cols: ncols,
        });
    }
    Ok(())
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create an `nrows x ncols` matrix with every element set to `value`.
    ///
    /// ```
    /// use sigmat::Matrix;
    /// let m = Matrix::new(2, 3, 7_i32).unwrap();
    /// assert_eq!(m.get(1, 2), Ok(7));
    /// ```
    pub fn new(nrows: usize, ncols: usize, value: T) -> Result<Self, MatrixError> {
        check_shape(nrows, ncols)?;
        Ok(Self {
            data: Buffer::filled(nrows * ncols, value),
            nrows,
            ncols,
        })
    }

    /// Create an `nrows x ncols` matrix of zeros.
    pub fn zeros(nrows: usize, ncols: usize) -> Result<Self, MatrixError> {
        Self::new(nrows, ncols, T::zero())
    }

    /// Create a zero matrix from a `(rows, cols)` pair.
    pub fn from_shape(shape: (usize, usize)) -> Result<Self, MatrixError> {
        Self::new(shape.0, shape.1, T::zero())
    }

    /// Create a matrix from a `(rows, cols)` pair, filled with `value`.
    pub fn from_shape_fill(shape: (usize, usize), value: T) -> Result<Self, MatrixError> {
        Self::new(shape.0, shape.1, value)
    }

    /// Create a matrix from a flat slice in column-major order.
    ///
    /// ```
    /// use sigmat::Matrix;
    /// // col0 = [1, 3], col1 = [2, 4]
    /// let m = Matrix::from_slice(2, 2, &[1, 3, 2, 4]).unwrap();
    /// assert_eq!(m[(1, 0)], 3);
    /// assert_eq!(m[(0, 1)], 2);
    /// ```
    pub fn from_slice(nrows: usize, ncols: usize, slice: &[T]) -> Result<Self, MatrixError> {
        Self::from_vec(nrows, ncols, slice.to_vec())
    }

    /// Create a matrix from an owned `Vec<T>` in column-major order.
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        check_shape(nrows, ncols)?;
        if data.len() != nrows * ncols {
            return Err(MatrixError::LengthMismatch {
                expected: nrows * ncols,
                got: data.len(),
            });
        }
        Ok(Self {
            data: Buffer::from(data),
            nrows,
            ncols,
        })
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// ```
    /// use sigmat::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(m[(0, 2)], 3);
    /// assert_eq!(m[(1, 0)], 4);
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Result<Self, MatrixError> {
        check_shape(nrows, ncols)?;
        if row_major.len() != nrows * ncols {
            return Err(MatrixError::LengthMismatch {
                expected: nrows * ncols,
                got: row_major.len(),
            });
        }
        Self::from_fn(nrows, ncols, |i, j| row_major[i * ncols + j])
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    pub fn from_fn(
        nrows: usize,
        ncols: usize,
        f: impl Fn(usize, usize) -> T,
    ) -> Result<Self, MatrixError> {
        check_shape(nrows, ncols)?;
        let mut data = Vec::with_capacity(nrows * ncols);
        for j in 0..ncols {
            for i in 0..nrows {
                data.push(f(i, j));
            }
        }
        Ok(Self {
            data: Buffer::from(data),
            nrows,
            ncols,
        })
    }

    /// Set every element to `value`.
    pub fn set_all(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Change the shape to `nrows x ncols`.
    ///
    /// Storage is only reallocated when the element count changes; in that
    /// case every element becomes zero. When the count is unchanged the old
    /// elements are kept and reinterpreted in column-major order under the
    /// new shape.
    pub fn resize(&mut self, nrows: usize, ncols: usize) -> Result<(), MatrixError> {
        check_shape(nrows, ncols)?;
        self.data.allocate(nrows * ncols, T::zero());
        self.nrows = nrows;
        self.ncols = ncols;
        Ok(())
    }
}

// ── Shape ───────────────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True for a default-constructed (or moved-out) matrix.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Exactly one of the dimensions is 1 and the other is larger.
    #[inline]
    pub fn is_vector(&self) -> bool {
        (self.nrows == 1 && self.ncols > 1) || (self.nrows > 1 && self.ncols == 1)
    }

    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.nrows == 1 && self.ncols == 1
    }

    /// Move the contents out, leaving `self` empty (0x0).
    ///
    /// ```
    /// use sigmat::Matrix;
    /// let mut a = Matrix::new(2, 2, 1_u32).unwrap();
    /// let b = a.take();
    /// assert!(a.is_empty());
    /// assert_eq!(b.shape(), (2, 2));
    /// ```
    pub fn take(&mut self) -> Self {
        let out = Self {
            data: self.data.take(),
            nrows: self.nrows,
            ncols: self.ncols,
        };
        self.nrows = 0;
        self.ncols = 0;
        out
    }

    #[inline]
    fn lindex(&self, row: usize, col: usize) -> usize {
        row + col * self.nrows
    }

    #[inline]
    fn check_index(&self, row: usize, col: usize) -> Result<usize, MatrixError> {
        if row >= self.nrows {
            return Err(MatrixError::IndexOutOfRange {
                index: row,
                bound: self.nrows,
            });
        }
        if col >= self.ncols {
            return Err(MatrixError::IndexOutOfRange {
                index: col,
                bound: self.ncols,
            });
        }
        Ok(self.lindex(row, col))
    }

    #[inline]
    fn check_linear(&self, index: usize) -> Result<usize, MatrixError> {
        if index >= self.data.len() {
            return Err(MatrixError::IndexOutOfRange {
                index,
                bound: self.data.len(),
            });
        }
        Ok(index)
    }

    /// Mutable reference to `(row, col)`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MatrixError> {
        let i = self.check_index(row, col)?;
        Ok(&mut self.data[i])
    }

    /// Mutable reference to the element at column-major offset `index`.
    pub fn get_linear_mut(&mut self, index: usize) -> Result<&mut T, MatrixError> {
        let i = self.check_linear(index)?;
        Ok(&mut self.data[i])
    }
}

impl<T: Copy> Matrix<T> {
    /// Value at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        let i = self.check_index(row, col)?;
        Ok(self.data[i])
    }

    /// Value at column-major offset `index`.
    #[inline]
    pub fn get_linear(&self, index: usize) -> Result<T, MatrixError> {
        let i = self.check_linear(index)?;
        Ok(self.data[i])
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of range for {}x{} matrix",
            row, col, self.nrows, self.ncols,
        );
        &self.data[self.lindex(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of range for {}x{} matrix",
            row, col, self.nrows, self.ncols,
        );
        let i = self.lindex(row, col);
        &mut self.data[i]
    }
}

impl<T> Index<usize> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        assert!(
            index < self.nrows * self.ncols,
            "linear index {} out of range for {}x{} matrix",
            index, self.nrows, self.ncols,
        );
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(
            index < self.nrows * self.ncols,
            "linear index {} out of range for {}x{} matrix",
            index, self.nrows, self.ncols,
        );
        &mut self.data[index]
    }
}
