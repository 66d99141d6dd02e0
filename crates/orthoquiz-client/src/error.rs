//! Client error types.

use thiserror::Error;

/// Errors that can occur when fetching a quiz from the platform backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The lesson has no quiz (HTTP 404).
    #[error("no quiz found for lesson {0}")]
    QuizNotFound(String),

    /// The API returned an error response.
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The response body was not a quiz.
    #[error("invalid quiz payload: {0}")]
    InvalidPayload(String),

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    NetworkError(String),
}

impl ClientError {
    /// Returns `true` if asking again cannot succeed.
    pub fn is_permanent(&self) -> bool {
        matches!(
            self,
            ClientError::QuizNotFound(_) | ClientError::InvalidPayload(_)
        )
    }
}
