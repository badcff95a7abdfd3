use alloc::vec::Vec;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::traits::Scalar;

use super::{Matrix, MatrixError};

// ── Checked element-wise operations ─────────────────────────────────

impl<T: Scalar> Matrix<T> {
    fn check_same_shape(&self, rhs: &Self) -> Result<(), MatrixError> {
        if self.shape() != rhs.shape() {
            log::debug!(
                "element-wise operands differ: {}x{} vs {}x{}",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols
            );
            return Err(MatrixError::ShapeMismatch {
                expected: self.shape(),
                got: rhs.shape(),
            });
        }
        Ok(())
    }

    fn zip_with(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Result<Self, MatrixError> {
        self.check_same_shape(rhs)?;
        let data: Vec<T> = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix {
            data: data.into(),
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }

    /// Element-wise sum, or `ShapeMismatch` if the shapes differ.
    ///
    /// ```
    /// use sigmat::{Matrix, MatrixError};
    /// let a = Matrix::from_slice(2, 1, &[1, 2]).unwrap();
    /// let b = Matrix::from_slice(2, 1, &[10, 20]).unwrap();
    /// assert_eq!(a.try_add(&b).unwrap().as_slice(), &[11, 22]);
    ///
    /// let c = Matrix::from_slice(1, 2, &[10, 20]).unwrap();
    /// assert!(matches!(a.try_add(&c), Err(MatrixError::ShapeMismatch { .. })));
    /// ```
    pub fn try_add(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.zip_with(rhs, |a, b| a + b)
    }

    /// Element-wise difference.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.zip_with(rhs, |a, b| a - b)
    }

    /// Element-wise (Hadamard) product.
    pub fn try_mul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.zip_with(rhs, |a, b| a * b)
    }

    /// Element-wise quotient.
    pub fn try_div(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.zip_with(rhs, |a, b| a / b)
    }

    /// In-place element-wise sum. `self` is untouched on error.
    pub fn try_add_assign(&mut self, rhs: &Self) -> Result<(), MatrixError> {
        self.check_same_shape(rhs)?;
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a + b;
        }
        Ok(())
    }

    /// In-place element-wise difference. `self` is untouched on error.
    pub fn try_sub_assign(&mut self, rhs: &Self) -> Result<(), MatrixError> {
        self.check_same_shape(rhs)?;
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a - b;
        }
        Ok(())
    }

    /// Multiply every element by `k`.
    pub fn scale(&self, k: T) -> Self {
        self.map(|x| x * k)
    }
}

// ── Operators: matrix ⊙ matrix ──────────────────────────────────────
//
// These panic on shape mismatch; use the `try_*` methods to handle it.

macro_rules! impl_elementwise_op {
    ($Op:ident, $op:ident, $try_op:ident, $sym:literal) => {
        impl<T: Scalar> $Op<&Matrix<T>> for &Matrix<T> {
            type Output = Matrix<T>;

            fn $op(self, rhs: &Matrix<T>) -> Matrix<T> {
                match self.$try_op(rhs) {
                    Ok(m) => m,
                    Err(_) => panic!(
                        "dimension mismatch: {}x{} {} {}x{}",
                        self.nrows, self.ncols, $sym, rhs.nrows, rhs.ncols,
                    ),
                }
            }
        }

        impl<T: Scalar> $Op for Matrix<T> {
            type Output = Matrix<T>;

            fn $op(self, rhs: Matrix<T>) -> Matrix<T> {
                <&Matrix<T> as $Op<&Matrix<T>>>::$op(&self, &rhs)
            }
        }

        impl<T: Scalar> $Op<&Matrix<T>> for Matrix<T> {
            type Output = Matrix<T>;

            fn $op(self, rhs: &Matrix<T>) -> Matrix<T> {
                <&Matrix<T> as $Op<&Matrix<T>>>::$op(&self, rhs)
            }
        }

        impl<T: Scalar> $Op<Matrix<T>> for &Matrix<T> {
            type Output = Matrix<T>;

            fn $op(self, rhs: Matrix<T>) -> Matrix<T> {
                <&Matrix<T> as $Op<&Matrix<T>>>::$op(self, &rhs)
            }
        }
    };
}

impl_elementwise_op!(Add, add, try_add, "+");
impl_elementwise_op!(Sub, sub, try_sub, "-");
impl_elementwise_op!(Mul, mul, try_mul, "*");
impl_elementwise_op!(Div, div, try_div, "/");

impl<T: Scalar> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        if self.try_add_assign(rhs).is_err() {
            panic!(
                "dimension mismatch: {}x{} += {}x{}",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols,
            );
        }
    }
}

impl<T: Scalar> AddAssign for Matrix<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.add_assign(&rhs);
    }
}

impl<T: Scalar> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        if self.try_sub_assign(rhs).is_err() {
            panic!(
                "dimension mismatch: {}x{} -= {}x{}",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols,
            );
        }
    }
}

impl<T: Scalar> SubAssign for Matrix<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.sub_assign(&rhs);
    }
}

// ── Operators: matrix ⊙ scalar ──────────────────────────────────────

macro_rules! impl_scalar_rhs_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<T: Scalar> $Op<T> for &Matrix<T> {
            type Output = Matrix<T>;

            fn $op(self, rhs: T) -> Matrix<T> {
                self.map(|x| x.$op(rhs))
            }
        }

        impl<T: Scalar> $Op<T> for Matrix<T> {
            type Output = Matrix<T>;

            fn $op(mut self, rhs: T) -> Matrix<T> {
                for x in self.data.iter_mut() {
                    *x = (*x).$op(rhs);
                }
                self
            }
        }

        impl<T: Scalar> $OpAssign<T> for Matrix<T> {
            fn $op_assign(&mut self, rhs: T) {
                for x in self.data.iter_mut() {
                    *x = (*x).$op(rhs);
                }
            }
        }
    };
}

impl_scalar_rhs_op!(Add, add, AddAssign, add_assign);
impl_scalar_rhs_op!(Sub, sub, SubAssign, sub_assign);
impl_scalar_rhs_op!(Mul, mul, MulAssign, mul_assign);
impl_scalar_rhs_op!(Div, div, DivAssign, div_assign);

// ── Operators: scalar ⊙ matrix (concrete impls) ─────────────────────

macro_rules! impl_scalar_lhs_ops {
    ($($t:ty),*) => {
        $(
            impl Add<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn add(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs.map(|x| self + x)
                }
            }

            impl Add<Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn add(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    self + &rhs
                }
            }

            impl Sub<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn sub(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs.map(|x| self - x)
                }
            }

            impl Sub<Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn sub(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    self - &rhs
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs.map(|x| self * x)
                }
            }

            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    self * &rhs
                }
            }
        )*
    };
}

impl_scalar_lhs_ops!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

#[cfg(feature = "complex")]
impl_scalar_lhs_ops!(num_complex::Complex<f32>, num_complex::Complex<f64>);

#[cfg(test)]
mod tests {
    use super::*;

    fn a() -> Matrix<f64> {
        Matrix::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap()
    }

    fn b() -> Matrix<f64> {
        Matrix::from_slice(2, 2, &[5.0, 6.0, 7.0, 8.0]).unwrap()
    }

    #[test]
    fn add_sub() {
        let c = &a() + &b();
        assert_eq!(c.as_slice(), &[6.0, 8.0, 10.0, 12.0]);
        let d = &b() - &a();
        assert_eq!(d.as_slice(), &[4.0, 4.0, 4.0, 4.0]);
    }

    #[test]
    fn elementwise_mul_div() {
        let c = a() * b();
        assert_eq!(c.as_slice(), &[5.0, 12.0, 21.0, 32.0]);
        let d = &c / &b();
        assert_eq!(d, a());
    }

    #[test]
    fn ref_variants() {
        let sum1 = &a() + &b();
        let sum2 = a() + &b();
        let sum3 = &a() + b();
        let sum4 = a() + b();
        assert_eq!(sum1, sum2);
        assert_eq!(sum1, sum3);
        assert_eq!(sum1, sum4);
    }

    #[test]
    fn try_ops_mismatch() {
        let r = Matrix::from_slice(1, 4, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        for res in [a().try_add(&r), a().try_sub(&r), a().try_mul(&r), a().try_div(&r)] {
            assert_eq!(
                res.unwrap_err(),
                MatrixError::ShapeMismatch {
                    expected: (2, 2),
                    got: (1, 4)
                }
            );
        }
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn operator_mismatch_panics() {
        let r = Matrix::from_slice(4, 1, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        let _ = a() + r;
    }

    #[test]
    fn assign_ops() {
        let mut m = a();
        m += &b();
        assert_eq!(m.as_slice(), &[6.0, 8.0, 10.0, 12.0]);
        m -= b();
        assert_eq!(m, a());
    }

    #[test]
    fn try_assign_mismatch_leaves_unchanged() {
        let mut m = a();
        let r = Matrix::new(1, 1, 1.0).unwrap();
        assert!(m.try_add_assign(&r).is_err());
        assert!(m.try_sub_assign(&r).is_err());
        assert_eq!(m, a());
    }

    #[test]
    fn scalar_rhs() {
        assert_eq!((&a() + 1.0).as_slice(), &[2.0, 3.0, 4.0, 5.0]);
        assert_eq!((a() - 1.0).as_slice(), &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!((&a() * 2.0).as_slice(), &[2.0, 4.0, 6.0, 8.0]);
        assert_eq!((a() / 2.0).as_slice(), &[0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn scalar_lhs() {
        assert_eq!(1.0_f64 + &a(), &a() + 1.0);
        assert_eq!((10.0_f64 - a()).as_slice(), &[9.0, 8.0, 7.0, 6.0]);
        assert_eq!(3.0_f64 * &a(), a().scale(3.0));
        let m = Matrix::from_slice(1, 2, &[2_i32, 3]).unwrap();
        assert_eq!((2_i32 * m).as_slice(), &[4, 6]);
    }

    #[test]
    fn scalar_assign() {
        let mut m = a();
        m *= 2.0;
        m /= 4.0;
        m += 1.0;
        m -= 0.5;
        assert_eq!(m.as_slice(), &[1.0, 1.5, 2.0, 2.5]);
    }

    #[test]
    fn equality_checks_shape() {
        let row = Matrix::from_slice(1, 4, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_ne!(a(), row);
        assert_eq!(a(), a());
    }
}
