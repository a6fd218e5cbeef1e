//! C-compatible status codes.
//!
//! Returned by the status-reporting entry points (`tensor_alloc_stats`,
//! `tensor_log_init`). The buffer and kernel functions keep their plain
//! C signatures and report nothing beyond a null `tensor_alloc` result.

/// C-compatible status code.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TensorStatus {
    /// Success.
    Ok = 0,
    /// An argument is null, out of range, or otherwise invalid.
    InvalidArgument = -1,
    /// A global logging subscriber was already installed.
    AlreadyInitialized = -2,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_values_are_stable() {
        assert_eq!(TensorStatus::Ok as i32, 0);
        assert_eq!(TensorStatus::InvalidArgument as i32, -1);
        assert_eq!(TensorStatus::AlreadyInitialized as i32, -2);
        assert_eq!(TensorStatus::Panicked as i32, -128);
    }

    #[test]
    fn guard_maps_panic_to_status() {
        let code: i32 = ffi_guard!({
            if std::hint::black_box(true) {
                panic!("boom");
            }
            TensorStatus::Ok as i32
        });
        assert_eq!(code, TensorStatus::Panicked as i32);
    }

    #[test]
    fn guard_passes_early_return_through() {
        let code: i32 = ffi_guard!({
            if std::hint::black_box(true) {
                return TensorStatus::InvalidArgument as i32;
            }
            TensorStatus::Ok as i32
        });
        assert_eq!(code, TensorStatus::InvalidArgument as i32);
    }
}
