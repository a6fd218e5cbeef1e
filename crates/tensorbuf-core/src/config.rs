//! Allocation layout parameters.

/// Fixed layout parameters shared by every buffer allocation.
///
/// Each allocation is one block from the global allocator: a private
/// header of [`HEADER_BYTES`](Self::HEADER_BYTES) followed by the payload.
/// The handle handed to callers points at the payload.
#[derive(Clone, Copy, Debug)]
pub struct BufferConfig;

impl BufferConfig {
    /// Alignment of every payload, in bytes (one cache line).
    ///
    /// Large enough for `f32`/`i32` and for 512-bit vector loads.
    pub const ALIGNMENT: usize = 64;

    /// Size of the header in front of each payload.
    ///
    /// Equal to the alignment so the payload keeps the block's alignment.
    /// Only the first `usize` is used (the payload size in bytes).
    pub const HEADER_BYTES: usize = Self::ALIGNMENT;

    /// Largest payload a single allocation may request.
    pub const MAX_PAYLOAD_BYTES: usize = isize::MAX as usize - Self::HEADER_BYTES;

    /// Total block size for a payload of `size_bytes`, or `None` if it
    /// exceeds [`MAX_PAYLOAD_BYTES`](Self::MAX_PAYLOAD_BYTES).
    pub fn block_bytes(size_bytes: usize) -> Option<usize> {
        if size_bytes > Self::MAX_PAYLOAD_BYTES {
            return None;
        }
        Some(size_bytes + Self::HEADER_BYTES)
    }
}
