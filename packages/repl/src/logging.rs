//! Diagnostic logging for the REPL binary.
//!
//! Library crates log through the `log` facade; the subscriber installed here
//! picks those records up and writes them to stderr so they never mix with
//! command output.

use std::io::IsTerminal;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::{ConfigError, LOG_ENV};

/// Install the global subscriber.
///
/// `PATHSTORE_LOG` takes any `EnvFilter` directive (`debug`,
/// `pathstore=trace`); when it is unset or unparsable, `default_level`
/// applies. Calling this twice is harmless: the second install is ignored.
pub fn init(default_level: &str) -> Result<(), ConfigError> {
    let filter = build_filter(default_level)?;

    let installed = Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .try_init();

    if installed.is_err() {
        log::debug!("log subscriber already installed");
    }
    Ok(())
}

fn build_filter(default_level: &str) -> Result<EnvFilter, ConfigError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }
    EnvFilter::try_new(default_level).map_err(|_| ConfigError::LogLevel(default_level.to_string()))
}
