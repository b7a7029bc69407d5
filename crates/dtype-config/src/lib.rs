//! # dtype-config
//!
//! Layered configuration loading for dtype using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DTYPE_*` prefix, `__` as separator)
//! 2. Project-level `.dtype/config.toml`
//! 3. User-level `~/.config/dtype/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DTYPE_CHECK__ALLOW_NULL` -> `check.allow_null` and
//! `DTYPE_LOG__FILTER` -> `log.filter`. The bare `DTYPE_LOG` variable is
//! reserved for the tracing filter override and is not read as config.
//!
//! # Usage
//!
//! ```no_run
//! use dtype_config::DtypeConfig;
//! use serde_json::json;
//!
//! let config = DtypeConfig::load_with_dotenv().expect("config");
//! dtype_config::init_tracing(&config.log).expect("logging");
//!
//! let checker = config.checker();
//! assert!(checker.expect(&json!({}), dtype_core::DataKind::Object).is_ok());
//! ```

mod check;
mod error;
mod log;

pub use check::CheckConfig;
pub use error::ConfigError;
pub use log::{LOG_ENV, LogConfig, init_tracing, resolve_filter};

use dtype_core::Checker;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DtypeConfig {
    #[serde(default)]
    pub check: CheckConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl DtypeConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.log.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Uses the workspace `.env` when one is found, else `dotenvy`'s own
    /// lookup from the current directory. Only a missing file is ignored.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        if let Some(env_path) = Self::workspace_dotenv_path() {
            return Self::load_with_dotenv_from(env_path);
        }
        if let Err(error) = dotenvy::dotenv() {
            if !error.not_found() {
                return Err(error.into());
            }
        }
        Self::load()
    }

    /// Load configuration after reading a specific `.env` file.
    ///
    /// A missing file is ignored; a malformed one is a [`ConfigError::Dotenv`].
    /// `dotenvy` stops at the first bad line, so lines before it may already
    /// be set when the error comes back. Variables already set in the process
    /// environment are not overwritten.
    pub fn load_with_dotenv_from(env_path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let env_path = env_path.as_ref();
        if env_path.exists() {
            dotenvy::from_path(env_path)?;
        }
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                tracing::debug!(path = %global_path.display(), "merging user config");
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".dtype/config.toml");
        if local_path.exists() {
            tracing::debug!(path = %local_path.display(), "merging project config");
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("DTYPE_").ignore(&["log"]).split("__"))
    }

    /// A kind checker configured from the `check` section.
    #[must_use]
    pub const fn checker(&self) -> Checker {
        Checker::new(self.check.to_options())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dtype").join("config.toml"))
    }

    /// Find `.env` at the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) looking for a `.env`
    /// file.
    fn workspace_dotenv_path() -> Option<PathBuf> {
        let mut dir = PathBuf::from(std::env::var_os("CARGO_MANIFEST_DIR")?);
        // crate -> crates/ -> workspace root
        for _ in 0..3 {
            let env_path = dir.join(".env");
            if env_path.exists() {
                return Some(env_path);
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }
}
