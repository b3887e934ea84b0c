//! Logging initialisation.
//!
//! Uses `tracing` with a `tracing-subscriber` formatter. The level filter is
//! read from `RUST_LOG` and defaults to `info`.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialises the global subscriber for the server binary.
///
/// # Examples
/// ```no_run
/// use compensation_engine::logging;
/// logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// Initialises a debug-level subscriber that writes through the test harness.
///
/// Safe to call from several tests; only the first call installs it.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
