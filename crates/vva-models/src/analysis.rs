//! Analysis response model.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Result of one video analysis request.
///
/// Returned to the caller and then discarded; the service keeps no
/// cross-request state.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct VideoAnalysisResponse {
    /// Natural-language summary produced by the vision model
    pub summary: String,

    /// Number of frames actually sent to the model
    pub frames_used: usize,

    /// Model identifier the summary was produced with
    pub model: String,

    /// Timestamps of the frames that had a known timestamp, in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_timestamps: Option<Vec<f64>>,

    /// The instruction text the model was actually given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,

    /// Total frames reported by the source, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_frames: Option<i64>,

    /// Source duration in seconds, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_duration_sec: Option<f64>,

    /// The sampling interval the budget was planned against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampling_interval_sec: Option<f64>,

    /// The planned sample target (a ceiling, not a guarantee)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_frame_samples: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_omitted_when_absent() {
        let response = VideoAnalysisResponse {
            summary: "a person walks through a park".to_string(),
            frames_used: 12,
            model: "gpt-4.1-mini".to_string(),
            frame_timestamps: None,
            prompt: None,
            total_frames: None,
            video_duration_sec: None,
            sampling_interval_sec: None,
            requested_frame_samples: None,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("frame_timestamps").is_none());
        assert!(json.get("total_frames").is_none());
        assert_eq!(json["frames_used"], 12);
    }
}
