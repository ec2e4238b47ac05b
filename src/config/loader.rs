//! Configuration loader.
//!
//! Loads settings from multiple sources with proper precedence:
//! 1. `default.toml` - base configuration (required)
//! 2. `{environment}.toml` - environment-specific overrides (optional)
//! 3. `local.toml` - local development overrides (optional)
//! 4. `TRATTORIA__*` environment variables (highest priority)

use std::path::PathBuf;

use config::{Config, Environment as EnvSource, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for the configuration directory
const CONFIG_DIR_ENV: &str = "TRATTORIA_CONFIG_DIR";

/// Environment variable for a single configuration file
const CONFIG_FILE_ENV: &str = "TRATTORIA_CONFIG_FILE";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "TRATTORIA";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Layered configuration loader.
#[derive(Debug)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    config_file: Option<PathBuf>,
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Create a loader from the process environment.
    ///
    /// `TRATTORIA_CONFIG_DIR` and `TRATTORIA_CONFIG_FILE` are mutually
    /// exclusive: a single file skips layered loading entirely.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));

        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);

        if config_file.is_some() && std::env::var(CONFIG_DIR_ENV).is_ok() {
            return Err(ConfigError::mutual_exclusivity(
                "TRATTORIA_CONFIG_DIR and TRATTORIA_CONFIG_FILE cannot both be set",
            ));
        }

        Ok(Self {
            config_dir,
            config_file,
            environment: AppEnvironment::from_env(),
        })
    }

    /// Create a loader over a specific directory and environment.
    pub fn with_dir(config_dir: impl Into<PathBuf>, environment: AppEnvironment) -> Self {
        Self {
            config_dir: config_dir.into(),
            config_file: None,
            environment,
        }
    }

    /// The environment this loader resolves layered files against.
    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    /// Load and validate settings from all configured sources.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let mut builder = Config::builder();

        if let Some(file) = &self.config_file {
            if !file.is_file() {
                return Err(ConfigError::FileNotFound(file.display().to_string()));
            }
            builder = builder.add_source(File::from(file.clone()).format(FileFormat::Toml));
        } else {
            let default_file = self.config_dir.join("default.toml");
            if !default_file.is_file() {
                return Err(ConfigError::FileNotFound(default_file.display().to_string()));
            }

            builder = builder
                .add_source(File::from(default_file).format(FileFormat::Toml))
                .add_source(
                    File::from(self.config_dir.join(format!("{}.toml", self.environment.as_str())))
                        .format(FileFormat::Toml)
                        .required(false),
                )
                .add_source(
                    File::from(self.config_dir.join("local.toml"))
                        .format(FileFormat::Toml)
                        .required(false),
                );
        }

        builder = builder.add_source(
            EnvSource::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_default_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader::with_dir(dir.path(), AppEnvironment::Development);
        assert!(matches!(loader.load(), Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn environment_file_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[database]\nurl = \"postgres://localhost/dev\"\nmax_connections = 10\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("test.toml"),
            "[database]\nurl = \"postgres://localhost/test\"\n",
        )
        .unwrap();

        let loader = ConfigLoader::with_dir(dir.path(), AppEnvironment::Test);
        let settings = loader.load().unwrap();

        assert_eq!(settings.database.url, "postgres://localhost/test");
        // Untouched keys fall through from the default layer.
        assert_eq!(settings.database.max_connections, 10);
    }

    #[test]
    fn local_file_wins_over_environment_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), "").unwrap();
        fs::write(
            dir.path().join("development.toml"),
            "[application]\nname = \"from-env-file\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("local.toml"),
            "[application]\nname = \"from-local\"\n",
        )
        .unwrap();

        let loader = ConfigLoader::with_dir(dir.path(), AppEnvironment::Development);
        let settings = loader.load().unwrap();

        assert_eq!(settings.application.name, "from-local");
    }
}
