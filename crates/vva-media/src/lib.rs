//! OpenCV-backed frame sampling engine.
//!
//! This crate provides:
//! - Uniform frame index selection across a video
//! - Decoder-backed metadata probing (frame count, fps, duration)
//! - Frame extraction to base64 JPEG data URIs with per-frame failure recovery
//! - Sample budget planning from configuration, overrides, and video length

pub mod budget;
pub mod error;
pub mod extract;
pub mod probe;
pub mod sampler;

pub use budget::plan_sample_budget;
pub use error::{MediaError, MediaResult};
pub use extract::{sample_frames, sample_frames_async};
pub use probe::{read_metadata, read_metadata_async};
pub use sampler::select_frame_indices;
