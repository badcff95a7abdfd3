//! Type aliases for common element types.

use super::Matrix;

/// Matrix with `f32` elements.
pub type Matrixf32 = Matrix<f32>;
/// Matrix with `f64` elements.
pub type Matrixf64 = Matrix<f64>;
/// Matrix with `i32` elements.
pub type Matrixi32 = Matrix<i32>;
/// Matrix with `i64` elements.
pub type Matrixi64 = Matrix<i64>;
/// Matrix with `u32` elements.
pub type Matrixu32 = Matrix<u32>;
/// Matrix with `u64` elements.
pub type Matrixu64 = Matrix<u64>;

// 8-bit element types read digit-packed text (`"1011"` is four elements).

/// Matrix with `u8` elements, typically bits or symbols.
pub type Matrixu8 = Matrix<u8>;
/// Matrix with `i8` elements.
pub type Matrixi8 = Matrix<i8>;

/// Matrix with `Complex<f32>` elements.
#[cfg(feature = "complex")]
pub type Matrixz32 = Matrix<num_complex::Complex<f32>>;
/// Matrix with `Complex<f64>` elements.
#[cfg(feature = "complex")]
pub type Matrixz64 = Matrix<num_complex::Complex<f64>>;
