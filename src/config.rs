//! Application configuration
//!
//! Config stored at: ~/.config/carlot/config.json, overridden by
//! `CARLOT_DATA` and `CARLOT_LATENCY_MS`.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::provider::DataSource;

pub const DATA_ENV: &str = "CARLOT_DATA";
pub const LATENCY_ENV: &str = "CARLOT_LATENCY_MS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{name} must be a whole number of milliseconds, got '{value}'")]
    InvalidLatency { name: &'static str, value: String },
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// JSON dataset to browse instead of the bundled catalog
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Artificial delay before listings appear
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

fn default_latency_ms() -> u64 {
    500
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            latency_ms: default_latency_ms(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("carlot").join("config.json"))
    }

    /// Load the config file (if any), then apply environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::from_json(&std::fs::read_to_string(&path)?)?,
            _ => Config::default(),
        };
        config.apply_env(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Like [`Config::load`], but logs the problem and falls back to defaults.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            log::warn!("Ignoring invalid configuration: {e}");
            Config::default()
        })
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Override fields from variables returned by `lookup`. Empty values are skipped.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(DATA_ENV).filter(|v| !v.trim().is_empty()) {
            self.data_file = Some(PathBuf::from(path));
        }
        if let Some(value) = lookup(LATENCY_ENV).filter(|v| !v.trim().is_empty()) {
            self.latency_ms = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidLatency {
                    name: LATENCY_ENV,
                    value,
                })?;
        }
        Ok(())
    }

    pub fn source(&self) -> DataSource {
        match &self.data_file {
            Some(path) => DataSource::File(path.clone()),
            None => DataSource::Reference,
        }
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}
