//! Application configuration.
//!
//! Configuration is read from a TOML file. Every section is optional and
//! falls back to [`Default`]; `INTERNHUB_DATABASE_URL` overrides the
//! database URL from the file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable overriding [`DatabaseConfig::url`].
pub const DATABASE_URL_ENV: &str = "INTERNHUB_DATABASE_URL";

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Data store connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Data store connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection URL.
    pub url: String,
    /// Maximum pooled connections shared by all repositories.
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection.
    pub connection_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Returns the pool checkout timeout.
    #[must_use]
    pub const fn connection_timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout_secs)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("postgres://localhost/internhub"),
            max_connections: 8,
            connection_timeout_secs: 5,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: String::from("info"),
        }
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`AppConfig`].
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Path that was parsed.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}

impl AppConfig {
    /// Loads configuration from a TOML file and applies environment
    /// overrides. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file exists but cannot be read or
    /// parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Ok(config.with_env_overrides(|key| std::env::var(key).ok()))
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the TOML deserialization error for malformed input.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Applies overrides looked up through `lookup` (normally the process
    /// environment).
    #[must_use]
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(DATABASE_URL_ENV).filter(|url| !url.trim().is_empty()) {
            self.database.url = url;
        }
        self
    }
}
