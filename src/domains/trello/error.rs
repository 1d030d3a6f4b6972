//! Trello domain error types.

use thiserror::Error;

use super::client::ApiError;

/// Result type for Trello domain operations.
pub type TrelloResult<T> = Result<T, TrelloError>;

/// Errors that can occur while working with Trello resources.
///
/// The service performs no local recovery: every variant bubbles up to the
/// tool adapter layer unchanged.
#[derive(Debug, Error)]
pub enum TrelloError {
    /// The remote payload was missing a required field or had the wrong shape.
    #[error("Invalid Trello payload: {0}")]
    Validation(String),

    /// Trello reported the referenced resource as absent.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Any other transport or HTTP-level failure from the API client.
    #[error("Trello API error: {0}")]
    Api(ApiError),
}

impl From<ApiError> for TrelloError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NotFound { path } => Self::NotFound(path),
            other => Self::Api(other),
        }
    }
}

impl TrelloError {
    /// Create a new validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
