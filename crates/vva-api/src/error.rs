//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use vva_inference::InferenceError;
use vva_media::MediaError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Media error: {0}")]
    Media(#[from] MediaError),

    #[error("Inference error: {0}")]
    Inference(#[from] InferenceError),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            // Media failures implicate the uploaded video except for
            // decoder infrastructure problems.
            ApiError::Media(e) if e.is_input_error() => StatusCode::BAD_REQUEST,
            ApiError::Media(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            // The vision service is a dependency, not caller input.
            ApiError::Inference(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Don't expose internal error details in production
        let detail = match &self {
            ApiError::Internal(_) | ApiError::Inference(_) => {
                if std::env::var("ENVIRONMENT").unwrap_or_default() == "production" {
                    match &self {
                        ApiError::Inference(_) => "The analysis service is unavailable".to_string(),
                        _ => "An internal error occurred".to_string(),
                    }
                } else {
                    self.to_string()
                }
            }
            ApiError::Media(e) if !e.is_input_error() => {
                if std::env::var("ENVIRONMENT").unwrap_or_default() == "production" {
                    "An internal error occurred".to_string()
                } else {
                    self.to_string()
                }
            }
            _ => self.to_string(),
        };

        let body = ErrorResponse { detail, code: None };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_map_to_400() {
        assert_eq!(
            ApiError::bad_request("frame_samples must be positive").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Media(MediaError::NoFramesExtracted).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Media(MediaError::source_unreadable("/tmp/bad.mp4")).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_dependency_errors_map_to_502() {
        let err = ApiError::Inference(InferenceError::api(500, "upstream down"));
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_decoder_infrastructure_errors_stay_internal() {
        let err = ApiError::Media(MediaError::internal("task panicked"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
