//! Adapters around the two collaborator contracts the orchestrator consumes.
//!
//! The traits are the seam: the orchestrator only sees [`CatalogGateway`] and
//! [`PaymentGateway`], the channel-backed clients are one implementation each.

pub mod catalog_client;
pub mod error;
pub mod payment_client;

pub use catalog_client::*;
pub use error::GatewayError;
pub use payment_client::*;
