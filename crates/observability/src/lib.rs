//! Tracing and logging (shared setup).

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::{LOG_FORMAT_ENV, LogFormat, LogFormatError};

/// Initialize process-wide tracing, reading the output format from
/// `STOCKVIEW_LOG_FORMAT`.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    match LogFormat::from_env() {
        Ok(format) => tracing::init(format),
        Err(err) => {
            tracing::init(LogFormat::default());
            ::tracing::warn!(env = LOG_FORMAT_ENV, "{err}; using json");
        }
    }
}
