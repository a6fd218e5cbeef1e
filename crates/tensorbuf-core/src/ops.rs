//! Bounds-checked element kernels over slices.
//!
//! Same semantics as the [`raw`](crate::raw) kernels, but `count` is
//! checked against every slice and reported as
//! [`BufferError::OutOfBounds`] instead of overrunning memory. Elements at
//! index `count` and beyond are never touched.

use crate::element::Element;
use crate::error::BufferError;

fn check(count: usize, len: usize) -> Result<(), BufferError> {
    if count > len {
        return Err(BufferError::OutOfBounds { count, len });
    }
    Ok(())
}

/// Write `value` into each of the first `count` elements of `dst`.
pub fn fill<T: Element>(dst: &mut [T], count: usize, value: T) -> Result<(), BufferError> {
    check(count, dst.len())?;
    dst[..count].fill(value);
    Ok(())
}

/// Copy the first `count` elements of `src` into `dst`.
///
/// `dst` receives the values as of this call; later writes to `src` do
/// not affect it.
pub fn copy<T: Element>(dst: &mut [T], src: &[T], count: usize) -> Result<(), BufferError> {
    check(count, dst.len().min(src.len()))?;
    dst[..count].copy_from_slice(&src[..count]);
    Ok(())
}

/// Compute `out[i] = a[i] + b[i]` for `i` in `0..count`.
///
/// `a` and `b` may be the same slice. For `out` aliasing an input, use
/// [`add_assign`].
pub fn add(a: &[f32], b: &[f32], out: &mut [f32], count: usize) -> Result<(), BufferError> {
    check(count, a.len().min(b.len()).min(out.len()))?;
    for ((o, &x), &y) in out[..count].iter_mut().zip(&a[..count]).zip(&b[..count]) {
        *o = x + y;
    }
    Ok(())
}

/// Compute `acc[i] = acc[i] + rhs[i]` for `i` in `0..count`.
///
/// The in-place form of [`add`] with `out` aliasing `a`.
pub fn add_assign(acc: &mut [f32], rhs: &[f32], count: usize) -> Result<(), BufferError> {
    check(count, acc.len().min(rhs.len()))?;
    for (o, &y) in acc[..count].iter_mut().zip(&rhs[..count]) {
        *o += y;
    }
    Ok(())
}
