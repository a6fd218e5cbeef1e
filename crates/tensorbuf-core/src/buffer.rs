//! Owning, RAII buffer over the raw allocation format.
//!
//! A [`Buffer`] holds one handle from [`raw::allocate_zeroed`] and releases
//! it on drop, enforcing "one release per allocate" through ownership.
//! [`Buffer::into_raw`] and [`Buffer::from_raw`] move the handle across
//! the C boundary in either direction, since both sides share one format.

use std::fmt;
use std::ptr::NonNull;

use crate::element::{elements_in, Element};
use crate::error::BufferError;
use crate::ops;
use crate::raw;

/// A contiguous, zero-initialised, exclusively owned memory region.
pub struct Buffer {
    payload: NonNull<u8>,
    size_bytes: usize,
}

// SAFETY: Buffer owns its allocation exclusively; moving it between
// threads moves that ownership. Shared access is read-only.
#[allow(unsafe_code)]
unsafe impl Send for Buffer {}
// SAFETY: &Buffer only permits reads of the payload.
#[allow(unsafe_code)]
unsafe impl Sync for Buffer {}

impl Buffer {
    /// Allocate a zero-filled buffer of `size_bytes`.
    pub fn new(size_bytes: usize) -> Result<Self, BufferError> {
        let payload = raw::allocate_zeroed(size_bytes)?;
        Ok(Self {
            payload,
            size_bytes,
        })
    }

    /// Allocate a buffer holding exactly `len` elements of `T`, zero-filled.
    pub fn with_len<T: Element>(len: usize) -> Result<Self, BufferError> {
        let Some(size_bytes) = len.checked_mul(std::mem::size_of::<T>()) else {
            tracing::warn!(len, element = T::NAME, "buffer length overflows usize bytes");
            return Err(BufferError::LengthOverflow {
                len,
                element: T::NAME,
            });
        };
        tracing::trace!(len, element = T::NAME, "typed buffer");
        Self::new(size_bytes)
    }

    /// Allocate a buffer and copy `values` into it.
    pub fn from_slice<T: Element>(values: &[T]) -> Result<Self, BufferError> {
        let mut buf = Self::with_len::<T>(values.len())?;
        ops::copy(buf.as_mut_slice::<T>(), values, values.len())?;
        Ok(buf)
    }

    /// Take ownership of a handle produced by [`raw::allocate`],
    /// [`raw::allocate_zeroed`], or [`Buffer::into_raw`].
    ///
    /// # Safety
    ///
    /// `payload` must be a live handle from one of those functions, not
    /// owned by anything else, and its whole payload must be initialised
    /// (typed views read every byte).
    #[allow(unsafe_code)]
    pub unsafe fn from_raw(payload: NonNull<u8>) -> Self {
        // SAFETY: forwarded from the caller.
        let size_bytes = unsafe { raw::payload_size(payload) };
        Self {
            payload,
            size_bytes,
        }
    }

    /// Give up ownership and return the raw handle.
    ///
    /// The handle must eventually be passed to [`raw::release`] or back to
    /// [`Buffer::from_raw`].
    pub fn into_raw(self) -> NonNull<u8> {
        let payload = self.payload;
        std::mem::forget(self);
        payload
    }

    /// Payload size in bytes.
    pub fn size_bytes(&self) -> usize {
        self.size_bytes
    }

    /// Whether the payload is zero bytes long.
    pub fn is_empty(&self) -> bool {
        self.size_bytes == 0
    }

    /// Number of whole `T` elements the payload holds.
    pub fn len<T: Element>(&self) -> usize {
        elements_in::<T>(self.size_bytes)
    }

    /// Raw payload pointer. Stays valid while `self` is alive.
    pub fn as_ptr(&self) -> *const u8 {
        self.payload.as_ptr()
    }

    /// Mutable raw payload pointer. Stays valid while `self` is alive.
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.payload.as_ptr()
    }

    /// View the payload as a slice of `T`. Trailing bytes that do not form
    /// a whole element are excluded.
    #[allow(unsafe_code)]
    pub fn as_slice<T: Element>(&self) -> &[T] {
        // SAFETY: the payload is ALIGNMENT-aligned, zero-initialised at
        // allocation, and every bit pattern is a valid T. &self keeps the
        // allocation alive and excludes writers.
        unsafe { raw::as_slice(self.payload, self.len::<T>()) }
    }

    /// Mutable view of the payload as a slice of `T`.
    #[allow(unsafe_code)]
    pub fn as_mut_slice<T: Element>(&mut self) -> &mut [T] {
        let len = self.len::<T>();
        // SAFETY: as in as_slice; &mut self guarantees exclusivity.
        unsafe { raw::as_mut_slice(self.payload, len) }
    }

    /// Write `value` into every whole `T` element of the buffer.
    pub fn fill<T: Element>(&mut self, value: T) {
        self.as_mut_slice::<T>().fill(value);
    }
}

impl Drop for Buffer {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        // SAFETY: self owns a live handle, released exactly once here.
        unsafe { raw::release(self.payload) };
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("payload", &self.payload)
            .field("size_bytes", &self.size_bytes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[test]
    fn new_is_zeroed() {
        let buf = Buffer::new(32).unwrap();
        assert_eq!(buf.size_bytes(), 32);
        assert_eq!(buf.len::<f32>(), 8);
        assert!(buf.as_slice::<f32>().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn fill_int_scenario() {
        let mut buf = Buffer::new(16).unwrap();
        buf.fill(7i32);
        assert_eq!(buf.as_slice::<i32>(), &[7, 7, 7, 7]);
    }

    #[test]
    fn partial_trailing_bytes_are_not_viewed() {
        let buf = Buffer::new(10).unwrap();
        assert_eq!(buf.as_slice::<i32>().len(), 2);
    }

    #[test]
    fn zero_sized_buffer() {
        let buf = Buffer::new(0).unwrap();
        assert!(buf.is_empty());
        assert!(buf.as_slice::<f32>().is_empty());
        assert!(!buf.as_ptr().is_null());
    }

    #[test]
    fn from_slice_copies_values() {
        let mut src = vec![1.0f32, 2.5, -3.0];
        let buf = Buffer::from_slice(&src).unwrap();
        src[0] = 100.0;
        assert_eq!(buf.as_slice::<f32>(), &[1.0, 2.5, -3.0]);
    }

    #[test]
    fn with_len_overflow_reports_element_count() {
        let err = Buffer::with_len::<f32>(usize::MAX).unwrap_err();
        assert_eq!(
            err,
            BufferError::LengthOverflow {
                len: usize::MAX,
                element: "f32"
            }
        );
        let err = Buffer::with_len::<i32>(usize::MAX / 2).unwrap_err();
        assert_eq!(
            err,
            BufferError::LengthOverflow {
                len: usize::MAX / 2,
                element: "i32"
            }
        );
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn typed_allocations_log_element_name() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            Buffer::with_len::<i32>(4).unwrap();
            Buffer::with_len::<f32>(usize::MAX).unwrap_err();
        });

        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        let line = |msg: &str| logs.lines().find(|l| l.contains(msg)).unwrap_or("");
        assert!(line("typed buffer").contains("i32"), "{logs}");
        assert!(line("overflows usize").contains("f32"), "{logs}");
    }

    #[test]
    #[allow(unsafe_code)]
    fn into_raw_from_raw_preserves_contents() {
        let buf = Buffer::from_slice(&[4i32, 5, 6]).unwrap();
        let handle = buf.into_raw();
        let back = unsafe { Buffer::from_raw(handle) };
        assert_eq!(back.size_bytes(), 12);
        assert_eq!(back.as_slice::<i32>(), &[4, 5, 6]);
    }

    #[test]
    #[allow(unsafe_code)]
    fn into_raw_then_release() {
        let buf = Buffer::new(8).unwrap();
        let handle = buf.into_raw();
        unsafe { raw::release(handle) };
    }

    #[test]
    fn buffer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Buffer>();
    }
}
