//! Layered application configuration.
//!
//! Settings are loaded from TOML files in a config directory
//! (`default.toml`, `{environment}.toml`, `local.toml`) and overridden by
//! `TRATTORIA__*` environment variables.

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;

pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{ApplicationSettings, DatabaseSettings, Settings};
