//! Process lifecycle: configuration, tracing setup and system wiring/shutdown.

pub mod checkout_system;
pub mod config;
pub mod tracing;

pub use checkout_system::CheckoutSystem;
pub use self::config::{AppConfig, ConfigError, StoreBackend};
pub use self::tracing::setup_tracing;
