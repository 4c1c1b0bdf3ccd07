//! Video metadata models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Basic video metadata used to derive sampling density.
///
/// Read once per analysis request from the decoder and discarded with it.
/// `frame_count` and `fps` are zero when the container does not report
/// them; `duration_sec` is only present when `fps` is known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VideoMetadata {
    /// Total decodable frames, 0 if unknown
    pub frame_count: i64,

    /// Frames per second, 0.0 if unknown
    pub fps: f64,

    /// Duration in seconds, derived as `frame_count / fps` when fps is known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_sec: Option<f64>,
}

impl VideoMetadata {
    /// Build metadata from raw decoder properties.
    ///
    /// Never divides by zero: an unknown fps yields no duration rather
    /// than a fabricated one.
    pub fn from_decoder_props(frame_count: i64, fps: f64) -> Self {
        let frame_count = frame_count.max(0);
        let fps = if fps.is_finite() && fps > 0.0 { fps } else { 0.0 };
        let duration_sec = if fps > 0.0 {
            Some(frame_count as f64 / fps)
        } else {
            None
        };
        Self {
            frame_count,
            fps,
            duration_sec,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_derived_from_fps() {
        let meta = VideoMetadata::from_decoder_props(300, 30.0);
        assert_eq!(meta.frame_count, 300);
        assert!((meta.duration_sec.unwrap() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_fps_has_no_duration() {
        let meta = VideoMetadata::from_decoder_props(300, 0.0);
        assert_eq!(meta.duration_sec, None);
    }

    #[test]
    fn test_negative_props_clamped() {
        let meta = VideoMetadata::from_decoder_props(-1, -25.0);
        assert_eq!(meta.frame_count, 0);
        assert_eq!(meta.fps, 0.0);
        assert_eq!(meta.duration_sec, None);
    }

    #[test]
    fn test_nan_fps_treated_as_unknown() {
        let meta = VideoMetadata::from_decoder_props(100, f64::NAN);
        assert_eq!(meta.fps, 0.0);
        assert_eq!(meta.duration_sec, None);
    }
}
