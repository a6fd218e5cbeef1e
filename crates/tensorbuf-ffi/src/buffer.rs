//! Buffer lifecycle FFI: allocate and release.
//!
//! Handles are raw payload pointers the host reads and writes directly.
//! Exactly one `tensor_free` per non-null `tensor_alloc` result; double
//! free and use after free are not detected.

use std::ffi::{c_long, c_void};
use std::ptr::{self, NonNull};

use tensorbuf_core::raw;

/// Allocate `size_bytes` of uninitialised memory, aligned to 64 bytes.
///
/// Returns null if `size_bytes` is negative or the allocator cannot satisfy
/// the request. `size_bytes == 0` returns a non-null handle that must still
/// be passed to `tensor_free`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensor_alloc(size_bytes: c_long) -> *mut c_void {
    ffi_guard!(ptr::null_mut(), {
        match raw::allocate_signed(i64::from(size_bytes)) {
            Ok(payload) => payload.as_ptr().cast(),
            Err(_) => ptr::null_mut(),
        }
    })
}

/// Release memory returned by `tensor_alloc`. Null is a no-op.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensor_free(ptr: *mut c_void) {
    ffi_guard!((), {
        if let Some(payload) = NonNull::new(ptr.cast::<u8>()) {
            // SAFETY: ptr came from tensor_alloc and is released once, per
            // caller contract.
            unsafe { raw::release(payload) };
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tensorbuf_core::BufferConfig;

    #[test]
    fn alloc_returns_aligned_non_null() {
        let p = tensor_alloc(100);
        assert!(!p.is_null());
        assert_eq!(p as usize % BufferConfig::ALIGNMENT, 0);
        tensor_free(p);
    }

    #[test]
    fn alloc_zero_then_free() {
        let p = tensor_alloc(0);
        assert!(!p.is_null());
        tensor_free(p);
    }

    #[test]
    fn negative_size_returns_null() {
        assert!(tensor_alloc(-1).is_null());
        assert!(tensor_alloc(c_long::MIN).is_null());
    }

    #[test]
    fn free_null_is_noop() {
        tensor_free(ptr::null_mut());
    }

    #[test]
    #[allow(unsafe_code)]
    fn allocated_span_is_writable() {
        let p = tensor_alloc(4096).cast::<u8>();
        assert!(!p.is_null());
        let bytes = unsafe { std::slice::from_raw_parts_mut(p, 4096) };
        bytes.fill(0xAB);
        assert!(bytes.iter().all(|&b| b == 0xAB));
        tensor_free(p.cast());
    }

    #[test]
    #[allow(unsafe_code)]
    fn handles_interoperate_with_rust_buffer() {
        let p = tensor_alloc(8);
        let payload = NonNull::new(p.cast::<u8>()).unwrap();
        unsafe { raw::fill(payload.cast::<i32>().as_ptr(), 2, 3) };
        let buf = unsafe { tensorbuf_core::Buffer::from_raw(payload) };
        assert_eq!(buf.as_slice::<i32>(), &[3, 3]);
        // Dropping the Buffer releases the handle.
    }
}
