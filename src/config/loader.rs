use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

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
    /// Uses `~/.config/glassbar/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("glassbar").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from an explicit path.
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
    /// - At least one item is configured, and no item appears twice
    /// - The channel prefix is not empty
    /// - The request timeout is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bar.items.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one bar item must be configured".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for item in &self.bar.items {
            if !seen.insert(item.as_str()) {
                return Err(ConfigError::ValidationError {
                    message: format!("Bar item '{}' is listed more than once", item),
                });
            }
        }

        if self.bridge.channel_prefix.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Channel prefix must not be empty".to_string(),
            });
        }

        if self.bridge.request_timeout_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "request_timeout_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
