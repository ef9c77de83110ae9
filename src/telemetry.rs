//! Tracing subscriber setup

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install the global subscriber. `RUST_LOG` takes precedence over the
/// configured level.
pub fn init(logging: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    match logging.format.as_str() {
        "json" => builder.json().try_init(),
        _ => builder.pretty().try_init(),
    }
    .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}
