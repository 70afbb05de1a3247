//! Tracing/logging initialization.
//!
//! Diagnostic detail (fetch degradations, skip decisions, resolution counts)
//! goes to this log, never to the end user.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the host process embedding the crates.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // JSON logs + timestamps, configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
