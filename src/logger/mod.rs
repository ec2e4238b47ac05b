//! Logger module.
//!
//! Console logging built on `tracing-subscriber`, with the output format and
//! level driven by configuration. Structured events emitted by the service
//! layer (menu/order mutations, caught repository failures) all flow through
//! the subscriber installed here.

use std::io::IsTerminal;

use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Console output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line output
    #[default]
    Full,
    /// Condensed output without targets
    Compact,
    /// Newline-delimited JSON events
    Json,
}

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Log level or EnvFilter directive string
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,

    /// ANSI colors (only applied when stdout is a terminal)
    #[serde(default = "default_colored")]
    pub colored: bool,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_colored() -> bool {
    true
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
            colored: default_colored(),
        }
    }
}

impl LoggerConfig {
    /// Checks that the level string parses as an `EnvFilter` directive.
    pub fn validate(&self) -> Result<(), String> {
        EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|err| format!("Invalid log level '{}': {err}", self.level))
    }
}

/// Initialize the global tracing subscriber from the given configuration.
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logger(config: &LoggerConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));
    let use_ansi = config.colored && std::io::stdout().is_terminal();

    let registry = tracing_subscriber::registry().with(filter);
    match config.format {
        LogFormat::Full => registry
            .with(
                fmt::layer()
                    .with_ansi(use_ansi)
                    .with_target(true)
                    .with_level(true),
            )
            .try_init()?,
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_ansi(use_ansi))
            .try_init()?,
        LogFormat::Json => registry.with(fmt::layer().json()).try_init()?,
    }

    Ok(())
}
