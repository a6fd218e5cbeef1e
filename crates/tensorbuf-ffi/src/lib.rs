//! C FFI bindings for tensorbuf.
//!
//! Exposes the buffer lifecycle (`tensor_alloc`, `tensor_free`), the
//! element kernels (`tensor_fill_float`, `tensor_fill_int`, `tensor_copy`,
//! `vector_add`), allocation accounting and logging setup. The generated
//! header lands in `include/tensorbuf.h`.
//!
//! Pointer arguments are trusted: beyond treating null pointers and
//! non-positive counts as no-ops, nothing is validated. This crate is one
//! of two that may contain `unsafe` code (along with `tensorbuf-core`).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

/// Run an FFI body, converting a Rust panic into `$fallback`.
///
/// A panic must never unwind into the host. `return` inside the body
/// returns from the guarded closure, i.e. from the FFI call.
macro_rules! ffi_guard {
    ($fallback:expr, $body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(value) => value,
            Err(_) => {
                tracing::error!("panic caught at FFI boundary");
                $fallback
            }
        }
    };
    ($body:block) => {
        ffi_guard!($crate::status::TensorStatus::Panicked as i32, $body)
    };
}

pub mod buffer;
pub mod kernels;
pub mod logging;
pub mod stats;
pub mod status;
