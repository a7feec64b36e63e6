// File: crates/popchart-core/src/config.rs
// Summary: Runtime configuration (API location, year bounds, cadence) with TOML loading.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::types::{DEFAULT_LIMIT, TICK_INTERVAL, YEAR_MAX, YEAR_MIN};

pub const DEFAULT_API_BASE: &str = "https://api.planetcloud.cloud/testapisgn";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Every field is optional in the TOML file; missing keys keep their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Scheme, host and optional prefix; `/api/barchart` is appended.
    pub api_base: String,
    pub limit: u32,
    pub year_min: i32,
    pub year_max: i32,
    /// Time-lapse tick period in milliseconds.
    pub tick_ms: u64,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            limit: DEFAULT_LIMIT,
            year_min: YEAR_MIN,
            year_max: YEAR_MAX,
            tick_ms: TICK_INTERVAL.as_millis() as u64,
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.year_min > self.year_max {
            return Err(ConfigError::Invalid(format!(
                "year_min ({}) is after year_max ({})",
                self.year_min, self.year_max
            )));
        }
        if self.limit == 0 {
            return Err(ConfigError::Invalid("limit must be at least 1".into()));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::Invalid("tick_ms must be at least 1".into()));
        }
        if self.api_base.trim().is_empty() {
            return Err(ConfigError::Invalid("api_base is empty".into()));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
