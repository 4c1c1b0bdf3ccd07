//! Shared data models for the video vision analyzer.
//!
//! This crate provides Serde-serializable types for:
//! - Video metadata reported by the decoder
//! - Sampled frames and their image payloads
//! - Sampling budgets and the policy that derives them
//! - The analysis response returned to API callers

pub mod analysis;
pub mod budget;
pub mod frame;
pub mod metadata;

// Re-export common types
pub use analysis::VideoAnalysisResponse;
pub use budget::{
    SampleBudget, SamplingPolicy, DEFAULT_FRAME_SAMPLES, DEFAULT_MAX_FRAME_SAMPLES,
    DEFAULT_SECONDS_PER_FRAME,
};
pub use frame::FrameSample;
pub use metadata::VideoMetadata;
