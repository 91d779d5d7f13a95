//! Tracing subscriber setup for hosts embedding the runtime

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize the global tracing subscriber once.
///
/// Honors `RUST_LOG`; defaults to info. Idempotent, so embedding hosts and
/// integration tests can call it unconditionally.
pub fn init() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
        tracing::debug!("telemetry initialized");
    });
}
