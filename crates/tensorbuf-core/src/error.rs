//! Buffer error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during buffer allocation or kernel execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// Requested size is negative or larger than the allocator can address.
    InvalidSize {
        /// The size as passed by the caller, in bytes.
        requested: i64,
    },
    /// An element count whose byte size does not fit in `usize`.
    LengthOverflow {
        /// Number of elements requested.
        len: usize,
        /// Element type name, e.g. `"f32"`.
        element: &'static str,
    },
    /// The global allocator could not satisfy the request.
    OutOfMemory {
        /// Number of payload bytes requested.
        requested: usize,
    },
    /// An element count exceeds the length of a slice it addresses.
    OutOfBounds {
        /// Element count requested by the caller.
        count: usize,
        /// Length of the shortest slice involved.
        len: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { requested } => {
                write!(f, "invalid buffer size: {requested} bytes")
            }
            Self::LengthOverflow { len, element } => {
                write!(f, "buffer of {len} {element} elements overflows usize bytes")
            }
            Self::OutOfMemory { requested } => {
                write!(f, "out of memory: failed to allocate {requested} bytes")
            }
            Self::OutOfBounds { count, len } => {
                write!(f, "element count {count} exceeds slice length {len}")
            }
        }
    }
}

impl Error for BufferError {}
