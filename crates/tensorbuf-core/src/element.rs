//! Element types a buffer can be viewed as.

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for i32 {}
}

/// A scalar type stored in a buffer.
///
/// Implemented for exactly `f32` and `i32`. Both are plain data for which
/// the all-zero bit pattern is a valid value, so a zero-initialised buffer
/// can be viewed as either.
pub trait Element: sealed::Sealed + Copy + Default + PartialEq + Send + Sync + 'static {
    /// Type name carried in log events and [`BufferError::LengthOverflow`].
    ///
    /// [`BufferError::LengthOverflow`]: crate::BufferError::LengthOverflow
    const NAME: &'static str;
}

impl Element for f32 {
    const NAME: &'static str = "f32";
}

impl Element for i32 {
    const NAME: &'static str = "i32";
}

/// Number of whole `T` elements that fit in `size_bytes`.
pub fn elements_in<T: Element>(size_bytes: usize) -> usize {
    size_bytes / std::mem::size_of::<T>()
}
