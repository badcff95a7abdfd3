//! # sigmat
//!
//! Dense, column-major matrices with value semantics and the signal
//! processing routines built on them: resampling, IIR/FIR filtering,
//! convolution, and convolution/Toeplitz matrix construction. `no_std`
//! compatible (requires `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use sigmat::{signal, Matrix};
//!
//! // matrices read and print in a compact text format
//! let x: Matrix<f64> = "1 2 3 4".parse().unwrap();
//! let h: Matrix<f64> = "0.5 0.5".parse().unwrap();
//!
//! let y = signal::conv(&x, &h).unwrap();
//! assert_eq!(y.to_string(), "[0.5 1.5 2.5 3.5 2]");
//! ```
//!
//! ## Modules
//!
//! - [`matrix`]: `Matrix<T>` with runtime dimensions, stored column-major:
//!   element `(r, c)` lives at linear offset `r + c * nrows`. Constructors,
//!   checked and panicking element access, row/column extraction and
//!   assignment, vector slicing (`left` / `right` / `mid`), elementwise
//!   arithmetic, element type conversion, and text parsing/printing.
//!
//! - [`signal`]: `upsample`, `downsample`, `filter`, `conv`, `convmtx`,
//!   `toeplitz`. Signals are vectors; resampling and `filter` also work
//!   column-by-column on general matrices.
//!
//! - [`buffer`]: `Buffer<T>`, the owned contiguous storage under every
//!   matrix.
//!
//! - [`traits`]: [`Scalar`] (all matrix elements) and [`TextElement`]
//!   (element types that can be read from text).
//!
//! ## Errors
//!
//! Fallible operations return [`MatrixError`]. The arithmetic operators
//! (`+ - * /`, `+=`, `-=`) and `m[(r, c)]` indexing panic on mismatched
//! shapes or out-of-range indices, like slices do; each has a checked
//! counterpart (`try_add`, `get`, ...).
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade: `debug!`
//! when an input is rejected or an operation degrades to a no-op, `trace!`
//! for algorithm branch selection and buffer reallocation. Install any
//! logger to see them.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | `std::error::Error` for the error types |
//! | `complex` | no       | `Complex<f32>` / `Complex<f64>` elements via `num-complex` |
//! | `all`     | no       | All features: `std` + `complex` |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod buffer;
pub mod matrix;
pub mod signal;
pub mod traits;

pub use buffer::Buffer;
pub use matrix::aliases::{
    Matrixf32, Matrixf64, Matrixi32, Matrixi64, Matrixi8, Matrixu32, Matrixu64, Matrixu8,
};
#[cfg(feature = "complex")]
pub use matrix::aliases::{Matrixz32, Matrixz64};
pub use matrix::{Matrix, MatrixError, ParseError};
pub use signal::{conv, convmtx, downsample, filter, toeplitz, toeplitz_symmetric, upsample};
pub use traits::{Scalar, TextElement};

#[cfg(feature = "complex")]
pub use num_complex::Complex;
