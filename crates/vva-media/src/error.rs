//! Error types for media operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for media operations.
pub type MediaResult<T> = Result<T, MediaError>;

/// Errors that can occur during frame sampling.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Unable to read video source: {0}")]
    SourceUnreadable(PathBuf),

    #[error("Could not extract any frames from the video")]
    NoFramesExtracted,

    #[error("Failed to encode frame to JPEG")]
    EncodeFailed,

    #[error("Decoder error: {0}")]
    Decoder(#[from] opencv::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl MediaError {
    /// Create a source-unreadable error.
    pub fn source_unreadable(path: impl Into<PathBuf>) -> Self {
        Self::SourceUnreadable(path.into())
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Whether this error implicates the caller's input rather than the
    /// service or its dependencies.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            MediaError::SourceUnreadable(_) | MediaError::NoFramesExtracted
        )
    }
}
