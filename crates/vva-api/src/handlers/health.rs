//! Health check handlers.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Health response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

/// Health check endpoint (liveness probe).
///
/// Reports unhealthy when the inference credential is gone — an instance
/// that cannot reach the vision service must not receive traffic.
pub async fn health(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    if state.config.analysis.openai_api_key.is_empty() {
        return Err(ApiError::internal("OPENAI_API_KEY is not configured"));
    }

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    }))
}
