//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

/// Initialize tracing/logging for the process.
///
/// `RUST_LOG` wins over `server.log_filter`. Production emits JSON lines,
/// every other environment the human-readable format.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if config.is_production() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_target(false)
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init();
    }
}
