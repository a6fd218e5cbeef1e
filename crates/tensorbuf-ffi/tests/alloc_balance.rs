//! Host-style lifecycle through the C entry points leaves no live
//! allocations behind.
//!
//! Single test per file: the counters are process-wide.

use std::ffi::{c_int, c_long};

use tensorbuf_ffi::buffer::{tensor_alloc, tensor_free};
use tensorbuf_ffi::kernels::{tensor_copy, tensor_fill_float, tensor_fill_int, vector_add};
use tensorbuf_ffi::stats::{tensor_alloc_stats, TensorAllocStats};
use tensorbuf_ffi::status::TensorStatus;
use tensorbuf_test_utils::{ramp_f32, LeakCheck};

fn read_stats() -> TensorAllocStats {
    let mut out = TensorAllocStats::default();
    assert_eq!(tensor_alloc_stats(&mut out), TensorStatus::Ok as i32);
    out
}

#[test]
fn host_lifecycle_is_balanced() {
    let leak = LeakCheck::start();
    let n: usize = 64;
    let bytes = (n * std::mem::size_of::<f32>()) as c_long;

    let a = tensor_alloc(bytes).cast::<f32>();
    let b = tensor_alloc(bytes).cast::<f32>();
    let out = tensor_alloc(bytes).cast::<f32>();
    let ints = tensor_alloc(16).cast::<c_int>();
    let empty = tensor_alloc(0);
    assert!(!a.is_null() && !b.is_null() && !out.is_null() && !ints.is_null());
    assert!(!empty.is_null());
    assert_eq!(leak.live_delta(), 5);

    let during = read_stats();
    assert_eq!(
        during.live_bytes,
        leak.baseline().live_bytes + 3 * bytes as u64 + 16
    );

    let src = ramp_f32(n);
    tensor_copy(a, src.as_ptr(), n as c_int);
    tensor_fill_float(b, n as c_int, 1.0);
    vector_add(a, b, out, n as c_int);
    tensor_fill_int(ints, 4, 7);

    tensor_free(a.cast());
    tensor_free(b.cast());
    tensor_free(out.cast());
    tensor_free(ints.cast());
    tensor_free(empty);
    tensor_free(std::ptr::null_mut());

    // A rejected request holds nothing.
    assert!(tensor_alloc(-1).is_null());

    leak.assert_balanced();
    let after = read_stats();
    assert_eq!(
        after.failed_allocations,
        leak.baseline().failed_allocations + 1
    );
    assert_eq!(
        after.total_allocations,
        leak.baseline().total_allocations + 5
    );
}
