//! Server configuration

use crate::filter::DEFAULT_CACHE_CAPACITY;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading configuration overrides
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value `{value}` for {key}")]
    InvalidValue { key: &'static str, value: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address
    pub address: String,
    /// Port
    pub port: u16,
    /// JSON dataset to serve (None = shipped sample dataset)
    pub dataset_path: Option<PathBuf>,
    /// Distinct filter criteria kept in the result cache
    pub filter_cache_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8080,
            dataset_path: None,
            filter_cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by `CASEFILE_*` environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each key
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(address) = lookup("CASEFILE_ADDRESS") {
            config.address = address;
        }
        if let Some(port) = lookup("CASEFILE_PORT") {
            config.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "CASEFILE_PORT",
                value: port.clone(),
            })?;
        }
        if let Some(path) = lookup("CASEFILE_DATASET").filter(|p| !p.is_empty()) {
            config.dataset_path = Some(PathBuf::from(path));
        }
        if let Some(capacity) = lookup("CASEFILE_FILTER_CACHE") {
            config.filter_cache_capacity = capacity
                .parse()
                .ok()
                .filter(|&c: &usize| c > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: "CASEFILE_FILTER_CACHE",
                    value: capacity.clone(),
                })?;
        }

        Ok(config)
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}
