use crate::framework::FrameworkError;
use thiserror::Error;

/// Failure of a collaborator call itself, as opposed to a domain outcome.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GatewayError {
    #[error("{service} unavailable: {reason}")]
    Unavailable {
        service: &'static str,
        reason: String,
    },
}

impl GatewayError {
    pub fn unavailable(service: &'static str, reason: impl ToString) -> Self {
        GatewayError::Unavailable {
            service,
            reason: reason.to_string(),
        }
    }
}

impl From<FrameworkError> for GatewayError {
    fn from(e: FrameworkError) -> Self {
        GatewayError::unavailable("catalog", e)
    }
}
