//! Deterministic input patterns for kernel tests and benchmarks.
//!
//! - [`ramp_f32`] / [`ramp_i32`]: `0, 1, 2, ...`, easy to eyeball in failures.
//! - [`alternating_f32`]: mixed-sign, non-integral values that exercise
//!   rounding in `add`.

/// `[0.0, 1.0, ..., (n - 1) as f32]`.
pub fn ramp_f32(n: usize) -> Vec<f32> {
    (0..n).map(|i| i as f32).collect()
}

/// `[0, 1, ..., n - 1]`, wrapping past `i32::MAX`.
pub fn ramp_i32(n: usize) -> Vec<i32> {
    (0..n).map(|i| i as i32).collect()
}

/// Alternating-sign values with a fractional part: `0.5, -1.75, 3.0, ...`.
pub fn alternating_f32(n: usize) -> Vec<f32> {
    (0..n)
        .map(|i| {
            let magnitude = 0.5 + i as f32 * 1.25;
            if i % 2 == 0 {
                magnitude
            } else {
                -magnitude
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramps_count_up() {
        assert_eq!(ramp_f32(3), vec![0.0, 1.0, 2.0]);
        assert_eq!(ramp_i32(4), vec![0, 1, 2, 3]);
        assert!(ramp_f32(0).is_empty());
    }

    #[test]
    fn alternating_signs() {
        assert_eq!(alternating_f32(3), vec![0.5, -1.75, 3.0]);
    }
}
