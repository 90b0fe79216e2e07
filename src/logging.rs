//! Logging System
//!
//! Structured logging using the `tracing` crate. Log output defaults to
//! stderr so the binary's single stdout completion line stays clean.

use crate::error::GenerateError;
use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable consulted for a filter directive before the
/// configured level is applied.
pub const LOG_ENV_VAR: &str = "CWGEN_LOG";

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr (default: stderr)
    #[serde(default = "default_output")]
    pub output: String,

    /// Enable colored output (text format only)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            color: default_true(),
        }
    }
}

/// Initialize the logging system.
///
/// Priority order (highest to lowest): `CWGEN_LOG` environment filter,
/// the provided configuration, defaults.
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), GenerateError> {
    let defaults = LoggingConfig::default();
    let config = config.unwrap_or(&defaults);

    let filter = build_env_filter(config)?;

    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_ansi(config.color && config.format != "json");

    let result = match (config.format.as_str(), config.output.as_str()) {
        ("json", "stdout") => builder.json().with_writer(std::io::stdout).try_init(),
        ("json", _) => builder.json().with_writer(std::io::stderr).try_init(),
        (_, "stdout") => builder.with_writer(std::io::stdout).try_init(),
        (_, _) => builder.with_writer(std::io::stderr).try_init(),
    };

    result.map_err(|e| GenerateError::Config(format!("Failed to initialize logging: {}", e)))
}

/// Build the tracing filter from the environment or the configured level.
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, GenerateError> {
    if let Ok(directive) = std::env::var(LOG_ENV_VAR) {
        return EnvFilter::try_new(&directive).map_err(|e| {
            GenerateError::Config(format!("Invalid {} directive {:?}: {}", LOG_ENV_VAR, directive, e))
        });
    }

    // EnvFilter accepts a bare ident as a target directive, so the level
    // must be parsed as a level before it is turned into a filter.
    let level: LevelFilter = config.level.parse().map_err(|e| {
        GenerateError::Config(format!("Invalid log level {:?}: {}", config.level, e))
    })?;
    Ok(EnvFilter::default().add_directive(level.into()))
}
