//! Logging setup for hosts that want tensorbuf's `tracing` output.
//!
//! The library emits events but never installs a subscriber by itself.
//! `tensor_log_init` installs a global fmt subscriber writing to stderr.

use std::ffi::c_int;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::status::TensorStatus;

/// Environment variable consulted when `tensor_log_init` gets a negative level.
pub const LOG_ENV: &str = "TENSORBUF_LOG";

/// Level used when [`LOG_ENV`] is unset or unparsable.
const DEFAULT_LEVEL: Level = Level::WARN;

/// Map a C level code (0 = error .. 4 = trace) to a `tracing` level.
fn level_from_code(code: c_int) -> Option<Level> {
    match code {
        0 => Some(Level::ERROR),
        1 => Some(Level::WARN),
        2 => Some(Level::INFO),
        3 => Some(Level::DEBUG),
        4 => Some(Level::TRACE),
        _ => None,
    }
}

fn level_from_env(value: Option<&str>) -> Level {
    value
        .and_then(|v| v.trim().parse::<Level>().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

/// Install a global stderr subscriber at `level`.
///
/// `level` 0..=4 selects error, warn, info, debug, trace. A negative
/// `level` reads `TENSORBUF_LOG` (e.g. `debug`), defaulting to warn.
/// Returns `TENSOR_STATUS_INVALID_ARGUMENT` for a level above 4 and
/// `TENSOR_STATUS_ALREADY_INITIALIZED` if a global subscriber exists.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tensor_log_init(level: c_int) -> i32 {
    ffi_guard!({
        let level = if level < 0 {
            level_from_env(std::env::var(LOG_ENV).ok().as_deref())
        } else {
            match level_from_code(level) {
                Some(l) => l,
                None => return TensorStatus::InvalidArgument as i32,
            }
        };

        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(false)
            .finish();

        match tracing::subscriber::set_global_default(subscriber) {
            Ok(()) => {
                tracing::debug!(%level, "tensorbuf logging initialised");
                TensorStatus::Ok as i32
            }
            Err(_) => TensorStatus::AlreadyInitialized as i32,
        }
    })
}
