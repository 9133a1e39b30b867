//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::Env;

/// Setup logging for the portal.
///
/// Defaults to `info`; `RUST_LOG` overrides. Logs go to stderr so they do
/// not interleave with the console screens on stdout.
pub fn setup_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();
}
