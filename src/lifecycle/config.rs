//! Runtime configuration, read from `CHECKOUT_*` environment variables.
//!
//! | key | env | default |
//! |-----|-----|---------|
//! | `http_addr` | `CHECKOUT_HTTP_ADDR` | `0.0.0.0:8080` |
//! | `store_backend` | `CHECKOUT_STORE_BACKEND` | `memory` |
//! | `channel_buffer` | `CHECKOUT_CHANNEL_BUFFER` | `32` |
//! | `log_filter` | `CHECKOUT_LOG_FILTER` | `info` |

use config::{Config, Environment, Map};
use serde::Deserialize;
use thiserror::Error;

const ENV_PREFIX: &str = "CHECKOUT";

/// Which [`OrderStore`](crate::store::OrderStore) implementation backs the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Memory,
    Actor,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    pub http_addr: String,
    pub store_backend: StoreBackend,
    /// Mailbox capacity of every actor.
    pub channel_buffer: usize,
    /// Used when `RUST_LOG` is not set.
    pub log_filter: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http_addr: "0.0.0.0:8080".to_string(),
            store_backend: StoreBackend::Memory,
            channel_buffer: 32,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads the configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads the configuration from an explicit variable map instead of the
    /// process environment.
    pub fn load_from(vars: Map<String, String>) -> Result<Self, ConfigError> {
        Self::build(Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    fn build(env: Environment) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config: AppConfig = Config::builder()
            .set_default("http_addr", defaults.http_addr)?
            .set_default("store_backend", "memory")?
            .set_default("channel_buffer", defaults.channel_buffer as u64)?
            .set_default("log_filter", defaults.log_filter)?
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()?;

        if config.channel_buffer == 0 {
            return Err(ConfigError::Invalid(
                "channel_buffer must be greater than zero".to_string(),
            ));
        }
        Ok(config)
    }
}
