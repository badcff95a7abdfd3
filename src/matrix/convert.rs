use alloc::vec::Vec;

use num_traits::AsPrimitive;

#[cfg(feature = "complex")]
use num_complex::Complex;

use super::Matrix;

impl<T> Matrix<T> {
    /// Apply a function to every element, producing a new matrix of the
    /// same shape.
    ///
    /// ```
    /// use sigmat::Matrix;
    /// let m = Matrix::from_slice(2, 1, &[1.5_f64, -2.5]).unwrap();
    /// let r = m.map(|x| x * 2.0);
    /// assert_eq!(r.as_slice(), &[3.0, -5.0]);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U>
    where
        T: Copy,
    {
        let data: Vec<U> = self.data.iter().map(|&x| f(x)).collect();
        Matrix {
            data: data.into(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Convert every element to `U` with `as` semantics.
    ///
    /// No range checking is done: float to integer truncates toward zero
    /// and saturates, integer narrowing wraps.
    ///
    /// ```
    /// use sigmat::Matrix;
    /// let m = Matrix::from_slice(1, 3, &[1.9_f64, -1.9, 300.0]).unwrap();
    /// assert_eq!(m.cast::<i32>().as_slice(), &[1, -1, 300]);
    /// assert_eq!(m.cast::<u8>().as_slice(), &[1, 0, 255]);
    ///
    /// let w = Matrix::from_slice(1, 2, &[257_i32, -1]).unwrap();
    /// assert_eq!(w.cast::<u8>().as_slice(), &[1, 255]);
    /// ```
    pub fn cast<U>(&self) -> Matrix<U>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.map(|x| x.as_())
    }
}

#[cfg(feature = "complex")]
impl<T: Copy> Matrix<T> {
    /// Promote real elements to `Complex<U>` with zero imaginary part.
    pub fn to_complex<U>(&self) -> Matrix<Complex<U>>
    where
        T: AsPrimitive<U>,
        U: Copy + num_traits::Zero + 'static,
    {
        self.map(|x| Complex::new(x.as_(), U::zero()))
    }
}

#[cfg(feature = "complex")]
impl<T: Copy + 'static> Matrix<Complex<T>> {
    /// Convert both parts of every complex element with `as` semantics.
    pub fn cast_complex<U>(&self) -> Matrix<Complex<U>>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.map(|z| Complex::new(z.re.as_(), z.im.as_()))
    }
}
