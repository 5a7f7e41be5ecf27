use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Base URL used in development mode when nothing else is configured.
pub const DEFAULT_DEV_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding `api.base_url`.
pub const BASE_URL_ENV: &str = "PLAYLIST_API_BASE_URL";

/// Environment variable overriding `api.mode`.
pub const MODE_ENV: &str = "PLAYLIST_SYNC_MODE";

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub acknowledgment: AcknowledgmentConfig,
}

/// How the base URL falls back when none is configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Fall back to the local development server.
    #[default]
    Development,
    /// Fall back to an empty, origin-relative base.
    Production,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::Development => write!(f, "development"),
            RunMode::Production => write!(f, "production"),
        }
    }
}

impl FromStr for RunMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(RunMode::Development),
            "production" | "prod" => Ok(RunMode::Production),
            other => Err(format!("unknown run mode '{}'", other)),
        }
    }
}

/// Playlist service connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Service base URL (e.g., "https://playlists.example.com").
    #[serde(default)]
    pub base_url: Option<String>,
    /// Run mode deciding the fallback base URL.
    #[serde(default)]
    pub mode: RunMode,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// The transient "Saved" signal shown after a like.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcknowledgmentConfig {
    #[serde(default = "default_ack_message")]
    pub message: String,
    /// How long the acknowledgment stays visible (default: 2000).
    #[serde(default = "default_ack_lifetime_ms")]
    pub lifetime_ms: u64,
}

impl AcknowledgmentConfig {
    pub fn lifetime(&self) -> Duration {
        Duration::from_millis(self.lifetime_ms)
    }
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_ack_message() -> String {
    "Saved".to_string()
}

fn default_ack_lifetime_ms() -> u64 {
    2000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            mode: RunMode::default(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for AcknowledgmentConfig {
    fn default() -> Self {
        Self {
            message: default_ack_message(),
            lifetime_ms: default_ack_lifetime_ms(),
        }
    }
}
