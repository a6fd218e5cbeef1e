//! Process-wide allocation accounting.
//!
//! Every allocation and release made through [`raw`](crate::raw) updates a
//! small set of relaxed atomic counters. They cost one atomic add per call
//! and let a host verify that every `allocate` was paired with a `release`.
//!
//! Counters are global to the process: tests that assert on exact deltas
//! must not share a process with other allocating tests.

use std::sync::atomic::{AtomicU64, Ordering};

static LIVE_ALLOCATIONS: AtomicU64 = AtomicU64::new(0);
static LIVE_BYTES: AtomicU64 = AtomicU64::new(0);
static PEAK_BYTES: AtomicU64 = AtomicU64::new(0);
static TOTAL_ALLOCATIONS: AtomicU64 = AtomicU64::new(0);
static FAILED_ALLOCATIONS: AtomicU64 = AtomicU64::new(0);

/// Snapshot of the allocation counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AllocStats {
    /// Allocations not yet released.
    pub live_allocations: u64,
    /// Payload bytes held by live allocations.
    pub live_bytes: u64,
    /// Highest `live_bytes` observed.
    pub peak_bytes: u64,
    /// Successful allocations since process start.
    pub total_allocations: u64,
    /// Allocation requests that returned the null handle.
    pub failed_allocations: u64,
}

impl AllocStats {
    /// Live allocations and bytes match `baseline`.
    ///
    /// The counters that only grow are ignored.
    pub fn is_balanced_with(&self, baseline: &AllocStats) -> bool {
        self.live_allocations == baseline.live_allocations
            && self.live_bytes == baseline.live_bytes
    }
}

/// Read the current counters.
///
/// Each field is read independently, so a snapshot taken while other
/// threads allocate is not a single atomic view.
pub fn stats() -> AllocStats {
    AllocStats {
        live_allocations: LIVE_ALLOCATIONS.load(Ordering::Relaxed),
        live_bytes: LIVE_BYTES.load(Ordering::Relaxed),
        peak_bytes: PEAK_BYTES.load(Ordering::Relaxed),
        total_allocations: TOTAL_ALLOCATIONS.load(Ordering::Relaxed),
        failed_allocations: FAILED_ALLOCATIONS.load(Ordering::Relaxed),
    }
}

pub(crate) fn record_alloc(size_bytes: usize) {
    let size = size_bytes as u64;
    LIVE_ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
    TOTAL_ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
    let live = LIVE_BYTES.fetch_add(size, Ordering::Relaxed) + size;
    PEAK_BYTES.fetch_max(live, Ordering::Relaxed);
}

pub(crate) fn record_release(size_bytes: usize) {
    LIVE_ALLOCATIONS.fetch_sub(1, Ordering::Relaxed);
    LIVE_BYTES.fetch_sub(size_bytes as u64, Ordering::Relaxed);
}

pub(crate) fn record_failure() {
    FAILED_ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
}
