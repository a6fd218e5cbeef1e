//! Benchmark workloads for tensorbuf.
//!
//! - [`WORKLOAD_SIZES`]: element counts from L1-resident to DRAM-bound
//! - [`KernelWorkload`]: three equally sized `f32` buffers with inputs set

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tensorbuf_core::{ops, Buffer, BufferError};
use tensorbuf_test_utils::{alternating_f32, ramp_f32};

/// Element counts benchmarked for every kernel.
pub const WORKLOAD_SIZES: [usize; 3] = [1_024, 65_536, 1_048_576];

/// Inputs `a`, `b` and an output buffer `out`, each `len` floats.
pub struct KernelWorkload {
    pub len: usize,
    pub a: Buffer,
    pub b: Buffer,
    pub out: Buffer,
}

impl KernelWorkload {
    /// Allocate and initialise a workload of `len` elements.
    ///
    /// `a` holds a ramp, `b` alternating-sign values, `out` zeroes.
    pub fn new(len: usize) -> Result<Self, BufferError> {
        let a = Buffer::from_slice(&ramp_f32(len))?;
        let b = Buffer::from_slice(&alternating_f32(len))?;
        let out = Buffer::with_len::<f32>(len)?;
        Ok(Self { len, a, b, out })
    }

    /// Run the safe `add` kernel into `out`.
    pub fn add(&mut self) -> Result<(), BufferError> {
        ops::add(
            self.a.as_slice(),
            self.b.as_slice(),
            self.out.as_mut_slice(),
            self.len,
        )
    }

    /// Size of one buffer in bytes.
    pub fn bytes_per_buffer(&self) -> usize {
        self.len * std::mem::size_of::<f32>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workload_add_produces_sum() {
        let mut w = KernelWorkload::new(4).unwrap();
        w.add().unwrap();
        assert_eq!(w.out.as_slice::<f32>(), &[0.5, -0.75, 5.0, -1.25]);
        assert_eq!(w.bytes_per_buffer(), 16);
    }
}
