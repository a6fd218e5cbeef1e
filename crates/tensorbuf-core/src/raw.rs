//! Low-level primitives for buffer memory operations.
//!
//! This is the only module in the crate allowed to contain `unsafe` code.
//! Every function here trusts its caller for pointer validity: nothing is
//! bounds-checked, and a released handle is not detected. The safe
//! counterparts live in [`ops`](crate::ops) and [`buffer`](crate::buffer).
//!
//! # Block format
//!
//! ```text
//! block ─► [ header: usize size_bytes | padding ][ payload: size_bytes ]
//!                                                 ▲
//!                                                 └─ handle returned to callers
//! ```
//!
//! The header is [`BufferConfig::HEADER_BYTES`] long so the payload keeps
//! the block's [`BufferConfig::ALIGNMENT`].

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::ptr::NonNull;

use crate::config::BufferConfig;
use crate::element::Element;
use crate::error::BufferError;
use crate::stats;

fn block_layout(size_bytes: usize) -> Option<Layout> {
    let block = BufferConfig::block_bytes(size_bytes)?;
    Layout::from_size_align(block, BufferConfig::ALIGNMENT).ok()
}

/// Allocate `size_bytes` of uninitialised payload.
///
/// A zero-byte request still returns a unique, non-null handle that must
/// be passed to [`release`].
pub fn allocate(size_bytes: usize) -> Result<NonNull<u8>, BufferError> {
    allocate_block(size_bytes, false)
}

/// Allocate from a signed byte count as received from a C `long`.
///
/// Negative sizes are rejected with [`BufferError::InvalidSize`] and
/// counted as failed allocations.
pub fn allocate_signed(size_bytes: i64) -> Result<NonNull<u8>, BufferError> {
    let Ok(size) = usize::try_from(size_bytes) else {
        stats::record_failure();
        tracing::warn!(size_bytes, "negative buffer size");
        return Err(BufferError::InvalidSize {
            requested: size_bytes,
        });
    };
    allocate(size)
}

/// Allocate `size_bytes` of zero-filled payload.
pub fn allocate_zeroed(size_bytes: usize) -> Result<NonNull<u8>, BufferError> {
    allocate_block(size_bytes, true)
}

fn allocate_block(size_bytes: usize, zeroed: bool) -> Result<NonNull<u8>, BufferError> {
    let Some(layout) = block_layout(size_bytes) else {
        stats::record_failure();
        tracing::warn!(size_bytes, "buffer size exceeds addressable range");
        return Err(BufferError::InvalidSize {
            requested: i64::try_from(size_bytes).unwrap_or(i64::MAX),
        });
    };

    // SAFETY: layout size is at least HEADER_BYTES, never zero.
    let block = unsafe {
        if zeroed {
            alloc::alloc_zeroed(layout)
        } else {
            alloc::alloc(layout)
        }
    };
    let Some(block) = NonNull::new(block) else {
        stats::record_failure();
        tracing::warn!(size_bytes, "global allocator refused buffer");
        return Err(BufferError::OutOfMemory {
            requested: size_bytes,
        });
    };

    // SAFETY: block is valid for layout.size() bytes and aligned to
    // ALIGNMENT, which exceeds align_of::<usize>(). HEADER_BYTES is within
    // the block, so the payload pointer stays in bounds (one past the end
    // when size_bytes == 0).
    let payload = unsafe {
        block.cast::<usize>().write(size_bytes);
        block.add(BufferConfig::HEADER_BYTES)
    };
    stats::record_alloc(size_bytes);
    tracing::trace!(size_bytes, zeroed, "allocated buffer");
    Ok(payload)
}

/// Payload size recorded for a live handle.
///
/// # Safety
///
/// `payload` must come from [`allocate`] or [`allocate_zeroed`] and must
/// not have been released.
pub unsafe fn payload_size(payload: NonNull<u8>) -> usize {
    // SAFETY: per contract, HEADER_BYTES before payload is the block start
    // holding the size written by allocate_block.
    unsafe {
        payload
            .sub(BufferConfig::HEADER_BYTES)
            .cast::<usize>()
            .read()
    }
}

/// Return a handle's block to the global allocator.
///
/// # Safety
///
/// `payload` must come from [`allocate`] or [`allocate_zeroed`] and must
/// not have been released. It is dangling afterwards.
pub unsafe fn release(payload: NonNull<u8>) {
    // SAFETY: per contract the header is live and was written at allocation.
    let size_bytes = unsafe { payload_size(payload) };
    // SAFETY: same block start as computed at allocation.
    let block = unsafe { payload.sub(BufferConfig::HEADER_BYTES) };
    // SAFETY: size_bytes produced a valid layout at allocation time, so the
    // same size and alignment are valid again.
    let layout = unsafe {
        Layout::from_size_align_unchecked(
            size_bytes + BufferConfig::HEADER_BYTES,
            BufferConfig::ALIGNMENT,
        )
    };
    // SAFETY: block was allocated by the global allocator with this layout.
    unsafe { alloc::dealloc(block.as_ptr(), layout) };
    stats::record_release(size_bytes);
    tracing::trace!(size_bytes, "released buffer");
}

/// Write `value` into each of the first `count` elements at `ptr`.
///
/// # Safety
///
/// `ptr` must be valid for `count` writes of `T` and aligned for `T`.
pub unsafe fn fill<T: Element>(ptr: *mut T, count: usize, value: T) {
    for i in 0..count {
        // SAFETY: i < count, within the span guaranteed by the caller.
        unsafe { ptr.add(i).write(value) };
    }
}

/// Copy `count` elements from `src` to `dst`.
///
/// # Safety
///
/// `src` must be valid for `count` reads, `dst` for `count` writes, both
/// aligned for `T`, and the two ranges must not overlap.
pub unsafe fn copy<T: Element>(dst: *mut T, src: *const T, count: usize) {
    debug_assert!(
        count == 0
            || (dst as usize).abs_diff(src as usize) >= count * std::mem::size_of::<T>(),
        "copy ranges overlap"
    );
    // SAFETY: forwarded from the caller.
    unsafe { std::ptr::copy_nonoverlapping(src, dst, count) };
}

/// Compute `out[i] = a[i] + b[i]` for `i` in `0..count`.
///
/// Both inputs for index `i` are read before `out[i]` is written, so `out`
/// may be the same pointer as `a` or `b`.
///
/// # Safety
///
/// `a` and `b` must be valid for `count` reads and `out` for `count`
/// writes, all aligned for `f32`. Partial overlap between `out` and an
/// input (offset by a non-zero number of elements) is not supported.
pub unsafe fn add(a: *const f32, b: *const f32, out: *mut f32, count: usize) {
    for i in 0..count {
        // SAFETY: i < count, within the spans guaranteed by the caller.
        unsafe {
            let sum = a.add(i).read() + b.add(i).read();
            out.add(i).write(sum);
        }
    }
}

/// View `len` initialised elements at `payload` as a shared slice.
///
/// # Safety
///
/// `payload` must be aligned for `T` and valid for `len` initialised
/// reads for the lifetime `'a`, with no concurrent writer.
pub(crate) unsafe fn as_slice<'a, T: Element>(payload: NonNull<u8>, len: usize) -> &'a [T] {
    // SAFETY: forwarded from the caller.
    unsafe { std::slice::from_raw_parts(payload.cast::<T>().as_ptr(), len) }
}

/// View `len` initialised elements at `payload` as a mutable slice.
///
/// # Safety
///
/// As [`as_slice`], and no other reference to the span may exist for `'a`.
pub(crate) unsafe fn as_mut_slice<'a, T: Element>(
    payload: NonNull<u8>,
    len: usize,
) -> &'a mut [T] {
    // SAFETY: forwarded from the caller.
    unsafe { std::slice::from_raw_parts_mut(payload.cast::<T>().as_ptr(), len) }
}
