//! Error types for order operations.

use crate::clients::GatewayError;
use crate::store::StoreError;
use thiserror::Error;

/// Errors surfaced by [`OrderOrchestrator`](super::OrderOrchestrator).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// Missing required input, or a requested part that the catalog does not know.
    #[error("{0}")]
    InvalidRequest(String),

    #[error("order {0} not found")]
    NotFound(String),

    /// The order is in a state that does not allow the operation.
    #[error("{0}")]
    Conflict(String),

    /// A collaborator call failed. The caller may resubmit.
    #[error("{0}")]
    Unavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<GatewayError> for OrderError {
    fn from(e: GatewayError) -> Self {
        OrderError::Unavailable(e.to_string())
    }
}

impl From<StoreError> for OrderError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => OrderError::NotFound(id.to_string()),
            StoreError::Unavailable(reason) => OrderError::Internal(reason),
        }
    }
}
