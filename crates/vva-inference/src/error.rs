//! Error types for inference calls.

use thiserror::Error;

/// Result type for inference operations.
pub type InferenceResult<T> = Result<T, InferenceError>;

/// Errors from the external vision service.
///
/// These are dependency problems, never input problems; callers map them
/// to an upstream-failure response class distinct from validation errors.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Inference credential is not configured")]
    MissingCredential,

    #[error("Inference request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Inference service returned {status}: {body}")]
    Api { status: u16, body: String },
}

impl InferenceError {
    /// Create an API error from a failed response.
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }
}
