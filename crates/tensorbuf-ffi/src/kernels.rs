//! Element kernel FFI: fill, copy, add.
//!
//! A non-positive `n` or a null pointer makes the call a no-op. Everything
//! else (span validity, overlap between `tensor_copy` ranges) is the
//! caller's contract.

use std::ffi::c_int;

use tensorbuf_core::raw;

/// Element count for a C `int`, or `None` when there is nothing to do.
fn element_count(n: c_int) -> Option<usize> {
    usize::try_from(n).ok().filter(|&count| count > 0)
}

/// Write `value` into each of the first `n` floats at `ptr`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensor_fill_float(ptr: *mut f32, n: c_int, value: f32) {
    ffi_guard!((), {
        let Some(count) = element_count(n) else {
            return;
        };
        if ptr.is_null() {
            return;
        }
        // SAFETY: ptr is valid for n floats per caller contract.
        unsafe { raw::fill(ptr, count, value) };
    })
}

/// Write `value` into each of the first `n` ints at `ptr`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensor_fill_int(ptr: *mut c_int, n: c_int, value: c_int) {
    ffi_guard!((), {
        let Some(count) = element_count(n) else {
            return;
        };
        if ptr.is_null() {
            return;
        }
        // SAFETY: ptr is valid for n ints per caller contract.
        unsafe { raw::fill(ptr, count, value) };
    })
}

/// Copy `n` floats from `src` to `dst`. The ranges must not overlap.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensor_copy(dst: *mut f32, src: *const f32, n: c_int) {
    ffi_guard!((), {
        let Some(count) = element_count(n) else {
            return;
        };
        if dst.is_null() || src.is_null() {
            return;
        }
        // SAFETY: dst and src are valid, disjoint spans of n floats per
        // caller contract.
        unsafe { raw::copy(dst, src, count) };
    })
}

/// Compute `out[i] = a[i] + b[i]` for `i` in `[0, n)`.
///
/// `out` may be the same pointer as `a` or `b`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn vector_add(a: *const f32, b: *const f32, out: *mut f32, n: c_int) {
    ffi_guard!((), {
        let Some(count) = element_count(n) else {
            return;
        };
        if a.is_null() || b.is_null() || out.is_null() {
            return;
        }
        // SAFETY: a, b and out are valid spans of n floats per caller
        // contract; raw::add tolerates out aliasing either input.
        unsafe { raw::add(a, b, out, count) };
    })
}
