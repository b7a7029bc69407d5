//! Logging configuration and subscriber setup.

use std::env::VarError;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::ConfigError;

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "DTYPE_LOG";

fn default_filter() -> String {
    String::from("warn")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// `tracing_subscriber` filter directives (e.g. `"dtype_core=debug"`).
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl LogConfig {
    /// Reject empty or unparseable filter directives.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.filter.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log.filter".into(),
                reason: "filter must not be empty".into(),
            });
        }
        EnvFilter::try_new(&self.filter).map_err(|error| ConfigError::InvalidValue {
            field: "log.filter".into(),
            reason: error.to_string(),
        })?;
        Ok(())
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

/// Pick the filter the subscriber will use.
///
/// A non-blank `DTYPE_LOG` wins over `config.filter`. Malformed `DTYPE_LOG`
/// directives are a [`ConfigError::InvalidValue`], not a silent fallback.
/// `config` is validated either way.
pub fn resolve_filter(config: &LogConfig) -> Result<EnvFilter, ConfigError> {
    config.validate()?;

    let directives = match std::env::var(LOG_ENV) {
        Ok(value) if !value.trim().is_empty() => value,
        Ok(_) | Err(VarError::NotPresent) => return Ok(EnvFilter::new(&config.filter)),
        Err(error @ VarError::NotUnicode(_)) => {
            return Err(ConfigError::InvalidValue {
                field: LOG_ENV.into(),
                reason: error.to_string(),
            });
        }
    };

    EnvFilter::try_new(&directives).map_err(|error| ConfigError::InvalidValue {
        field: LOG_ENV.into(),
        reason: error.to_string(),
    })
}

/// Install the global `tracing` subscriber with [`resolve_filter`].
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(config: &LogConfig) -> Result<(), ConfigError> {
    let filter = resolve_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| ConfigError::Logging(error.to_string()))
}
