//! Raw tensor buffer allocation and element-wise kernels.
//!
//! Provides the primitives behind the `tensorbuf` C API: allocation and
//! release of contiguous, cache-line-aligned buffers, plus fill, copy and
//! add kernels over `f32`/`i32` elements.
//!
//! # Layers
//!
//! ```text
//! raw     unchecked pointer kernels + header-prefixed allocation (unsafe)
//! ├── ops     the same kernels over slices, bounds-checked
//! ├── Buffer  RAII owner of one allocation, typed views
//! └── stats   process-wide allocation counters
//! ```
//!
//! The C boundary calls [`raw`] directly; Rust callers should prefer
//! [`Buffer`] and [`ops`]. This crate is one of two that may contain
//! `unsafe` code (along with `tensorbuf-ffi`), and within it only
//! [`raw`] and the [`Buffer`] view methods do.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod element;
pub mod error;
pub mod ops;
pub mod raw;
pub mod stats;

pub use buffer::Buffer;
pub use config::BufferConfig;
pub use element::Element;
pub use error::BufferError;
pub use stats::{stats, AllocStats};
