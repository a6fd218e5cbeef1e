//! C-compatible allocation counters.

use tensorbuf_core::AllocStats;

use crate::status::TensorStatus;

/// Snapshot of the process-wide allocation counters.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TensorAllocStats {
    /// Allocations not yet released.
    pub live_allocations: u64,
    /// Payload bytes held by live allocations.
    pub live_bytes: u64,
    /// Highest `live_bytes` observed.
    pub peak_bytes: u64,
    /// Successful allocations since process start.
    pub total_allocations: u64,
    /// Allocation requests that returned null.
    pub failed_allocations: u64,
}

// Compile-time layout assertions for ABI stability.
// 5×u64 = 40 bytes, align 8.
const _: () = assert!(std::mem::size_of::<TensorAllocStats>() == 40);
const _: () = assert!(std::mem::align_of::<TensorAllocStats>() == 8);

impl From<AllocStats> for TensorAllocStats {
    fn from(s: AllocStats) -> Self {
        Self {
            live_allocations: s.live_allocations,
            live_bytes: s.live_bytes,
            peak_bytes: s.peak_bytes,
            total_allocations: s.total_allocations,
            failed_allocations: s.failed_allocations,
        }
    }
}

/// Write the current allocation counters into `out`.
///
/// Returns `TENSOR_STATUS_INVALID_ARGUMENT` if `out` is null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensor_alloc_stats(out: *mut TensorAllocStats) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return TensorStatus::InvalidArgument as i32;
        }
        let snapshot = TensorAllocStats::from(tensorbuf_core::stats());
        // SAFETY: out is valid per caller contract.
        unsafe { *out = snapshot };
        TensorStatus::Ok as i32
    })
}
