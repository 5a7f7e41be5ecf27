use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, RunMode, BASE_URL_ENV, DEFAULT_DEV_BASE_URL, MODE_ENV};

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
    /// Uses `~/.config/playlist-sync/config.toml` on Unix, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("playlist-sync").join("config.toml")
    }

    /// Loads the default config file, then applies environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_env(&Self::config_path(), |key| std::env::var(key).ok())
    }

    /// Like [`Config::load`] but with an explicit path and environment.
    pub fn load_with_env(
        path: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::load_from(path)?;
        config.apply_env_overrides(env)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
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

    /// Applies `PLAYLIST_API_BASE_URL` and `PLAYLIST_SYNC_MODE`.
    ///
    /// Empty values count as unset.
    pub fn apply_env_overrides(
        &mut self,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        let non_empty = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        if let Some(base_url) = non_empty(BASE_URL_ENV) {
            self.api.base_url = Some(base_url);
        }

        if let Some(mode) = non_empty(MODE_ENV) {
            self.api.mode = mode
                .parse::<RunMode>()
                .map_err(|message| ConfigError::ValidationError {
                    message: format!("{}: {}", MODE_ENV, message),
                })?;
        }

        Ok(())
    }

    /// Resolves the service base URL.
    ///
    /// An explicit non-empty `base_url` wins. Otherwise development mode
    /// uses the local server and production mode an empty (origin-relative)
    /// base.
    pub fn resolve_base_url(&self) -> String {
        match self.api.base_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => match self.api.mode {
                RunMode::Development => DEFAULT_DEV_BASE_URL.to_string(),
                RunMode::Production => String::new(),
            },
        }
    }

    /// Resolves a base URL usable without a surrounding origin.
    pub fn absolute_base_url(&self) -> Result<String, ConfigError> {
        let base_url = self.resolve_base_url();
        if base_url.is_empty() {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "No base URL in {} mode; set {} or api.base_url",
                    self.api.mode, BASE_URL_ENV
                ),
            });
        }
        Ok(base_url)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Timeouts and the acknowledgment lifetime are non-zero
    /// - The acknowledgment message is not blank
    /// - A configured base URL is absolute http(s)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.timeout_seconds == 0 || self.api.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "Timeouts must be greater than zero".to_string(),
            });
        }

        if self.acknowledgment.lifetime_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "Acknowledgment lifetime must be greater than zero".to_string(),
            });
        }

        if self.acknowledgment.message.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Acknowledgment message must not be empty".to_string(),
            });
        }

        if let Some(url) = self.api.base_url.as_deref().map(str::trim) {
            if !url.is_empty() && !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::ValidationError {
                    message: format!("Base URL '{}' must start with http:// or https://", url),
                });
            }
        }

        Ok(())
    }
}
