//! Textual matrix format.
//!
//! Output wraps the matrix in brackets, separates columns with a single
//! space and rows with a newline followed by a space:
//!
//! ```text
//! [1 2 3
//!  4 5 6]
//! ```
//!
//! Input is read in two passes. The first splits the text into rows on `;`
//! or newline and each row into fields on whitespace (brackets count as
//! whitespace, blank rows are dropped) and turns every field into elements
//! with [`TextElement::push_field`]. The second lays the elements out: the
//! total element count must divide evenly by the number of rows, giving the
//! column count. Row `i` takes its first `cols` elements; a short row is
//! padded with zeros and a long row is cut.
//!
//! Rows with no fields are skipped, not counted. `"1 2;;3 4"` and
//! `"1 2;3 4;"` both read as a 2x2 matrix instead of failing the divisibility
//! check against an empty row.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::traits::TextElement;

use super::{Matrix, MatrixError, ParseError};

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.data[self.lindex(i, j)])?;
            }
            if i + 1 < self.nrows {
                write!(f, "\n ")?;
            }
        }
        write!(f, "]")
    }
}

fn is_field_separator(c: char) -> bool {
    c.is_whitespace() || c == '[' || c == ']'
}

/// First pass: one `Vec` of elements per non-blank row.
fn tokenize<T: TextElement>(text: &str) -> Vec<Vec<T>> {
    text.split(|c| c == ';' || c == '\n')
        .map(|row| {
            let mut values = Vec::new();
            for field in row.split(is_field_separator).filter(|f| !f.is_empty()) {
                T::push_field(field, &mut values);
            }
            values
        })
        .filter(|values| !values.is_empty())
        .collect()
}

impl<T: TextElement> Matrix<T> {
    /// Read a matrix from text.
    ///
    /// ```
    /// use sigmat::Matrix;
    ///
    /// let m = Matrix::<i32>::parse_text("1 2 3; 4 5 6").unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m[(1, 0)], 4);
    ///
    /// // printing and reading back are inverses for integers
    /// let again = Matrix::<i32>::parse_text(&m.to_string()).unwrap();
    /// assert_eq!(again, m);
    ///
    /// // 8-bit types read one element per character
    /// let bits = Matrix::<u8>::parse_text("1011;0110").unwrap();
    /// assert_eq!(bits.shape(), (2, 4));
    /// assert_eq!(bits.row(0).unwrap().as_slice(), &[1, 0, 1, 1]);
    /// ```
    pub fn parse_text(text: &str) -> Result<Self, MatrixError> {
        let rows = tokenize::<T>(text);
        let nrows = rows.len();
        if nrows == 0 {
            log::debug!("rejecting matrix text with no fields");
            return Err(ParseError::Empty.into());
        }
        let fields: usize = rows.iter().map(Vec::len).sum();
        if fields % nrows != 0 {
            log::debug!("rejecting matrix text: {} fields over {} rows", fields, nrows);
            return Err(ParseError::UnevenColumns { fields, rows: nrows }.into());
        }
        let ncols = fields / nrows;
        Matrix::from_fn(nrows, ncols, |i, j| {
            rows[i].get(j).copied().unwrap_or_else(T::zero)
        })
    }

    /// Replace the contents of `self` with the matrix read from `text`.
    ///
    /// On error `self` is left unmodified.
    pub fn assign_str(&mut self, text: &str) -> Result<(), MatrixError> {
        let parsed = Self::parse_text(text)?;
        self.resize(parsed.nrows, parsed.ncols)?;
        self.data.copy_from_slice(parsed.as_slice());
        Ok(())
    }
}

impl<T: TextElement> FromStr for Matrix<T> {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_text(s)
    }
}
