//! Application state.

use std::sync::Arc;

use vva_inference::VisionClient;

use crate::config::ApiConfig;

/// Shared application state.
///
/// Configuration is read-only after construction; the inference client
/// carries the only shared resource (its connection pool). Each analyze
/// call otherwise owns its own metadata, frames, and decoder handles.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub inference: Arc<VisionClient>,
}

impl AppState {
    /// Create new application state.
    ///
    /// Fails when the inference credential is missing — the service must
    /// not come up without it.
    pub fn new(config: ApiConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let inference = VisionClient::with_base_url(
            config.analysis.openai_api_key.clone(),
            config.analysis.openai_api_base.clone(),
        )?;

        Ok(Self {
            config,
            inference: Arc::new(inference),
        })
    }
}
