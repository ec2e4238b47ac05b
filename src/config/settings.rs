//! Configuration settings structures.
//!
//! All structures can be loaded from TOML files and environment variables;
//! every field carries a serde default so partial files stay valid.

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::LoggerConfig;

fn default_app_name() -> String {
    "trattoria".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> u64 {
    30
}

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationSettings {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            name: default_app_name(),
        }
    }
}

/// Database connection pool configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// Postgres connection URL; `DATABASE_URL` takes precedence when set
    #[serde(default)]
    pub url: String,

    /// Maximum number of pooled connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Minimum number of idle connections kept in the pool
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Seconds to wait when checking a connection out of the pool
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl DatabaseSettings {
    /// Resolves the connection URL, preferring the `DATABASE_URL` variable.
    pub fn resolved_url(&self) -> Result<String, ConfigError> {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            if !url.is_empty() {
                return Ok(url);
            }
        }
        if self.url.is_empty() {
            return Err(ConfigError::validation(
                "database.url",
                "No database URL configured (set database.url or DATABASE_URL)",
            ));
        }
        Ok(self.url.clone())
    }
}

/// Root settings structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub application: ApplicationSettings,

    #[serde(default)]
    pub database: DatabaseSettings,

    #[serde(default)]
    pub logger: LoggerConfig,
}

impl Settings {
    /// Validates cross-field constraints that serde defaults cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.application.name.trim().is_empty() {
            return Err(ConfigError::validation(
                "application.name",
                "Application name cannot be empty",
            ));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::validation(
                "database.max_connections",
                "Pool size must be at least 1",
            ));
        }
        if self.database.min_connections > self.database.max_connections {
            return Err(ConfigError::validation(
                "database.min_connections",
                "Minimum pool size cannot exceed the maximum",
            ));
        }
        self.logger.validate().map_err(|message| {
            ConfigError::validation("logger".to_string(), message)
        })
    }
}
