//! Tracing subscriber setup.
//!
//! Logs go to stderr; stdout is reserved for the result line.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber described by `config`.
///
/// A second call is a no-op.
pub fn init(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = if config.log_format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
