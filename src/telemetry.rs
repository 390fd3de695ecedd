//! Structured logging setup.

use crate::config::LoggingConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over [`LoggingConfig::filter`]. An invalid
/// configured directive falls back to `info`. Installing twice is a no-op.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_err()
    {
        debug!("tracing subscriber already installed");
    }
}
