//! crates/logging/src/tracing_bridge.rs
//! Installs the global tracing subscriber.

use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use super::config::{FILTER_ENV, LogConfig};

/// Builds the event filter: directives from [`FILTER_ENV`] when set and
/// valid, otherwise the level implied by `config`.
pub fn env_filter(config: &LogConfig) -> EnvFilter {
    std::env::var(FILTER_ENV)
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(config.directive()))
}

/// Install a stderr `fmt` subscriber filtered by `config`.
///
/// Returns `false` when a global subscriber was already installed, in which
/// case the existing one stays in place. Calling this more than once is safe.
///
/// # Example
///
/// ```rust,ignore
/// use logging::{LogConfig, init_tracing};
///
/// init_tracing(LogConfig::from_verbose_level(2));
/// tracing::debug!(target: "flate::decode", "visible at -vv");
/// ```
pub fn init_tracing(config: LogConfig) -> bool {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(config.ansi())
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter(&config))
        .with(layer)
        .try_init()
        .is_ok()
}
