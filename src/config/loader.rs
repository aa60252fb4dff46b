use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/user-roster/config.toml` on Unix,
    /// or the platform equivalent via `dirs::config_dir()`.
    /// Falls back to the current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("user-roster").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The failure probability lies in `0.0..=1.0`
    /// - The logging level parses as a filter directive; bare words must be
    ///   level names, not targets
    /// - The tick interval is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let probability = self.fetch.failure_probability;
        if !(0.0..=1.0).contains(&probability) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "failure_probability must be between 0 and 1, got {}",
                    probability
                ),
            });
        }

        validate_log_level(&self.logging.level)?;

        if self.ui.tick_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "tick_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

/// Accepts `info` or `user_roster=debug,warn`. A bare `verbose` would parse
/// as a target directive and silently filter everything out, so bare words
/// must name a level.
fn validate_log_level(level: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::ValidationError {
        message: format!("invalid logging level '{}': {}", level, reason),
    };

    EnvFilter::try_new(level).map_err(|err| invalid(err.to_string()))?;

    for directive in level.split(',').map(str::trim).filter(|d| !d.is_empty()) {
        if !directive.contains('=') && !directive.contains('[') {
            LevelFilter::from_str(directive)
                .map_err(|_| invalid(format!("'{}' is not a level", directive)))?;
        }
    }
    Ok(())
}
