//! Configuration: TOML file plus environment overrides.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    AcknowledgmentConfig, ApiConfig, Config, RunMode, BASE_URL_ENV, DEFAULT_DEV_BASE_URL,
    MODE_ENV,
};
