//! Logging system initialization

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// The filter is taken from `RUST_LOG`, defaulting to `info`. Should be
/// called once during startup; a second call panics because the global
/// subscriber is already set.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .init();
}
