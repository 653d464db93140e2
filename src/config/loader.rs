use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

const TICK_RATE_RANGE_MS: RangeInclusive<u64> = 10..=5000;

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
    /// Uses `~/.config/unistate/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("unistate").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise behaves like [`Config::load_from`].
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
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
    /// - `increase_step` is non-zero
    /// - `tick_rate_ms` is within 10..=5000
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.defaults.increase_step == 0 {
            return Err(ConfigError::ValidationError {
                message: "increase_step must not be zero".to_string(),
            });
        }

        if !TICK_RATE_RANGE_MS.contains(&self.defaults.tick_rate_ms) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "tick_rate_ms must be between {} and {}, got {}",
                    TICK_RATE_RANGE_MS.start(),
                    TICK_RATE_RANGE_MS.end(),
                    self.defaults.tick_rate_ms
                ),
            });
        }

        Ok(())
    }
}
