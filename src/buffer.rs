//! Owned contiguous element storage.
//!
//! [`Buffer`] is the allocation capability behind [`Matrix`](crate::Matrix):
//! a single exclusively-owned run of `len()` elements. Cloning deep-copies,
//! moving transfers ownership, and [`Buffer::allocate`] only touches the
//! allocator when the requested element count differs from the current one.
//!
//! Allocation failure is not recoverable: the global allocator aborts the
//! process, the same as any other `Vec` growth.

use alloc::vec;
use alloc::vec::Vec;

/// Exclusively-owned contiguous storage of `T`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Buffer<T>(Vec<T>);

impl<T> Buffer<T> {
    /// An empty buffer with no backing allocation.
    #[inline]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of elements currently owned.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no elements are owned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Release the storage, leaving an empty buffer.
    pub fn deallocate(&mut self) {
        self.0 = Vec::new();
    }

    /// Move the storage out, leaving `self` empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        Self(core::mem::take(&mut self.0))
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T: Copy> Buffer<T> {
    /// A buffer of `len` copies of `value`.
    #[inline]
    pub fn filled(len: usize, value: T) -> Self {
        Self(vec![value; len])
    }

    /// Make the buffer hold exactly `len` elements.
    ///
    /// When `len` already matches, the existing contents are kept and
    /// `false` is returned. Otherwise the old storage is dropped, a fresh
    /// run of `len` copies of `fill` replaces it, and `true` is returned.
    pub fn allocate(&mut self, len: usize, fill: T) -> bool {
        if self.0.len() == len {
            return false;
        }
        log::trace!("buffer reallocation: {} -> {} elements", self.0.len(), len);
        self.0 = vec![fill; len];
        true
    }

    /// Overwrite every element with `value`.
    #[inline]
    pub fn fill(&mut self, value: T) {
        self.0.fill(value);
    }
}

impl<T> From<Vec<T>> for Buffer<T> {
    #[inline]
    fn from(v: Vec<T>) -> Self {
        Self(v)
    }
}

impl<T> core::ops::Deref for Buffer<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> core::ops::DerefMut for Buffer<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let b: Buffer<f64> = Buffer::new();
        assert!(b.is_empty());
        assert_eq!(b.len(), 0);
    }

    #[test]
    fn allocate_same_len_keeps_contents() {
        let mut b = Buffer::from(vec![1, 2, 3]);
        assert!(!b.allocate(3, 0));
        assert_eq!(b.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn allocate_new_len_refills() {
        let mut b = Buffer::from(vec![1, 2, 3]);
        assert!(b.allocate(5, 7));
        assert_eq!(b.as_slice(), &[7, 7, 7, 7, 7]);
    }

    #[test]
    fn deallocate() {
        let mut b = Buffer::filled(4, 1.0_f32);
        b.deallocate();
        assert!(b.is_empty());
    }

    #[test]
    fn clone_is_deep() {
        let a = Buffer::from(vec![1, 2]);
        let mut b = a.clone();
        b[0] = 10;
        assert_eq!(a[0], 1);
        assert_eq!(b[0], 10);
    }

    #[test]
    fn take_leaves_source_empty() {
        let mut a = Buffer::from(vec![4, 5, 6]);
        let b = a.take();
        assert!(a.is_empty());
        assert_eq!(b.as_slice(), &[4, 5, 6]);
    }
}
