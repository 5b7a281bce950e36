//! Logging setup.
//!
//! Installs a `tracing-subscriber` fmt subscriber writing to stderr. `RUST_LOG`
//! takes precedence over the level passed on the command line.

use crate::error::{Result, TreeListError};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_LEVEL: &str = "info";

/// Build the filter: `RUST_LOG` if set, else `level`.
pub fn env_filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| TreeListError::Logging(format!("invalid log level `{}`: {}", level, e))),
    }
}

pub fn init(level: &str) -> Result<()> {
    let filter = env_filter(level)?;
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init()
        .map_err(|e| TreeListError::Logging(e.to_string()))
}
