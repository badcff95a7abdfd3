use alloc::vec::Vec;
use core::fmt::Debug;
use num_traits::{Num, One, Zero};

#[cfg(feature = "complex")]
use core::str::FromStr;
#[cfg(feature = "complex")]
use num_complex::Complex;

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, all integer types and (with the `complex`
/// feature) `Complex<T>`.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Element types that can be read from the textual matrix format.
///
/// A field is one whitespace-free token of a row. Most types turn a field
/// into exactly one element, falling back to zero when the token does not
/// parse. The 8-bit integer types are digit-packed instead: every byte of
/// the field becomes its own element with `b'0'` subtracted, so `"101"`
/// reads as `[1, 0, 1]`.
pub trait TextElement: Scalar {
    /// Append the element(s) encoded by `field` to `out`.
    fn push_field(field: &str, out: &mut Vec<Self>);
}

macro_rules! impl_text_element_parsed {
    ($($t:ty),*) => {
        $(
            impl TextElement for $t {
                #[inline]
                fn push_field(field: &str, out: &mut Vec<Self>) {
                    out.push(field.parse::<$t>().unwrap_or(0 as $t));
                }
            }
        )*
    };
}

impl_text_element_parsed!(
    i16, i32, i64, i128, isize, u16, u32, u64, u128, usize, f32, f64
);

const DIGIT_OFFSET: u8 = 0x30;

impl TextElement for u8 {
    #[inline]
    fn push_field(field: &str, out: &mut Vec<Self>) {
        out.extend(field.bytes().map(|b| b.wrapping_sub(DIGIT_OFFSET)));
    }
}

impl TextElement for i8 {
    #[inline]
    fn push_field(field: &str, out: &mut Vec<Self>) {
        out.extend(
            field
                .bytes()
                .map(|b| (b as i8).wrapping_sub(DIGIT_OFFSET as i8)),
        );
    }
}

#[cfg(feature = "complex")]
impl<T> TextElement for Complex<T>
where
    T: Scalar + FromStr,
{
    #[inline]
    fn push_field(field: &str, out: &mut Vec<Self>) {
        out.push(Complex::<T>::from_str(field).unwrap_or_else(|_| Complex::zero()));
    }
}
