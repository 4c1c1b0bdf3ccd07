//! Client for the external vision chat-completions service.
//!
//! The service is treated as an opaque function from (system directive,
//! multimodal user turn, model id, output ceiling) to a single text
//! completion. No retries are performed here; failures surface
//! immediately as dependency errors.

pub mod client;
pub mod error;

pub use client::{ChatMessage, ContentPart, ImageUrl, MessageContent, VisionClient, DEFAULT_BASE_URL};
pub use error::{InferenceError, InferenceResult};
