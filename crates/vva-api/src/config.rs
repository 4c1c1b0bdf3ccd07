//! API configuration.

use vva_models::{
    SamplingPolicy, DEFAULT_FRAME_SAMPLES, DEFAULT_MAX_FRAME_SAMPLES, DEFAULT_SECONDS_PER_FRAME,
};

/// Default vision model identifier.
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";
/// Default completion token ceiling.
pub const DEFAULT_MAX_TOKENS: u32 = 5000;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// CORS origins
    pub cors_origins: Vec<String>,
    /// Max request body size (uploads)
    pub max_body_size: usize,
    /// Environment (development/production)
    pub environment: String,
    /// Analysis settings
    pub analysis: AnalysisConfig,
}

/// Settings consumed by the analysis pipeline.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Inference service credential
    pub openai_api_key: String,
    /// Inference API base URL
    pub openai_api_base: String,
    /// Vision model used for analysis
    pub model: String,
    /// Frame sampling defaults and limits
    pub sampling: SamplingPolicy,
    /// Max tokens to request from the model
    pub max_tokens: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: vec!["*".to_string()],
            max_body_size: 200 * 1024 * 1024, // 200MB for video uploads
            environment: "development".to_string(),
            analysis: AnalysisConfig::default(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            openai_api_key: String::new(),
            openai_api_base: vva_inference::DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            sampling: SamplingPolicy::default(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8000),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(|_| vec!["*".to_string()]),
            max_body_size: std::env::var("MAX_BODY_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(200 * 1024 * 1024),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            analysis: AnalysisConfig::from_env(),
        }
    }

    /// Check if running in production mode.
    pub fn is_production(&self) -> bool {
        self.environment.to_lowercase() == "production"
    }
}

impl AnalysisConfig {
    /// Create analysis settings from environment variables.
    pub fn from_env() -> Self {
        Self {
            openai_api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            openai_api_base: std::env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| vva_inference::DEFAULT_BASE_URL.to_string()),
            model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            sampling: SamplingPolicy {
                default_frame_samples: std::env::var("FRAME_SAMPLES")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_FRAME_SAMPLES),
                default_seconds_per_frame: std::env::var("SECONDS_PER_FRAME")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_SECONDS_PER_FRAME),
                max_frame_samples: std::env::var("MAX_FRAME_SAMPLES")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_MAX_FRAME_SAMPLES),
            },
            max_tokens: std::env::var("MAX_TOKENS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_TOKENS),
        }
    }
}
