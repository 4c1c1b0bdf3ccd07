//! Axum HTTP API server.
//!
//! This crate provides:
//! - The `/api/v1/analyze` multipart upload endpoint
//! - The analysis orchestration service
//! - Health probe, request middleware, and Prometheus metrics

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

pub use config::{AnalysisConfig, ApiConfig};
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use services::VideoAnalyzer;
pub use state::AppState;
