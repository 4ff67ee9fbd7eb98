//! # Framework Errors
//!
//! Common error type for the actor transport. Domain layers translate these into
//! their own errors at the boundary (see `StoreError` and `GatewayError`).

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
}
