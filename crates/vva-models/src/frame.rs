//! Sampled frame model.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A sampled frame ready to be sent to the vision model.
///
/// `data_url` is a self-contained `data:image/jpeg;base64,...` payload so
/// the frame can be embedded directly in a chat message without a separate
/// file reference.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FrameSample {
    /// Zero-based frame index within the source video
    pub index: i64,

    /// Timestamp in seconds, absent when the source fps is unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_sec: Option<f64>,

    /// Complete data URI carrying the encoded frame
    pub data_url: String,
}
