//! Test utilities and fixtures for tensorbuf development.
//!
//! Provides deterministic input patterns (see [`fixtures`]) and a
//! [`LeakCheck`] guard over the process-wide allocation counters.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{alternating_f32, ramp_f32, ramp_i32};

use tensorbuf_core::{stats, AllocStats};

/// Captures the allocation counters at construction and asserts that live
/// allocations and bytes are back to that baseline later.
///
/// The counters are process-wide, so a `LeakCheck` is only exact in a test
/// binary that runs no other allocating test concurrently (a dedicated
/// `tests/*.rs` file with a single test).
pub struct LeakCheck {
    baseline: AllocStats,
}

impl LeakCheck {
    pub fn start() -> Self {
        Self { baseline: stats() }
    }

    pub fn baseline(&self) -> AllocStats {
        self.baseline
    }

    /// Live allocations added since [`start`](Self::start).
    pub fn live_delta(&self) -> i64 {
        stats().live_allocations as i64 - self.baseline.live_allocations as i64
    }

    /// Panics if any allocation made since [`start`](Self::start) is still live.
    #[track_caller]
    pub fn assert_balanced(&self) {
        let now = stats();
        assert!(
            now.is_balanced_with(&self.baseline),
            "allocation leak: live allocations {} -> {}, live bytes {} -> {}",
            self.baseline.live_allocations,
            now.live_allocations,
            self.baseline.live_bytes,
            now.live_bytes,
        );
    }
}

impl Default for LeakCheck {
    fn default() -> Self {
        Self::start()
    }
}
