//! Logging setup.
//!
//! SpendWise emits `tracing` events; the host application decides whether
//! to collect them. [init] installs a formatted stdout subscriber filtered by
//! `RUST_LOG`, falling back to [Settings::log_level].

use tracing_subscriber::EnvFilter;

use crate::config::Settings;

/// Install the global subscriber.
///
/// Returns `false` if a subscriber was already installed, so calling this
/// more than once is harmless.
pub fn init(settings: &Settings) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
