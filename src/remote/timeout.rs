use std::time::Duration;

use crate::config::ApiConfig;

/// Transport timeouts for the HTTP client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutConfig {
    pub connect: Duration,
    pub request: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self::from(&ApiConfig::default())
    }
}

impl From<&ApiConfig> for TimeoutConfig {
    fn from(api: &ApiConfig) -> Self {
        Self {
            connect: Duration::from_secs(api.connect_timeout_seconds.into()),
            request: Duration::from_secs(api.timeout_seconds.into()),
        }
    }
}
