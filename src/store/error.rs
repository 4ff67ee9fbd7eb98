//! Error types for the order store.

use crate::framework::FrameworkError;
use crate::model::OrderId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// No order is stored under the id.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// The backend could not serve the request (e.g. its actor has stopped).
    #[error("Order store unavailable: {0}")]
    Unavailable(String),
}

impl From<FrameworkError> for StoreError {
    fn from(e: FrameworkError) -> Self {
        StoreError::Unavailable(e.to_string())
    }
}
