//! Sampling budget models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default minimum number of frames sampled from each video.
pub const DEFAULT_FRAME_SAMPLES: usize = 20;
/// Default target sampling interval in seconds.
pub const DEFAULT_SECONDS_PER_FRAME: f64 = 2.0;
/// Default upper bound on frames sent to the model.
pub const DEFAULT_MAX_FRAME_SAMPLES: usize = 120;

/// The planned number of frames to extract for one analysis request.
///
/// Derived once per request from configuration, caller overrides and the
/// video's metadata; immutable afterwards. `target_count` is a ceiling on
/// extraction, not a guarantee: index dedup and per-frame decode failures
/// can both shrink the extracted set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SampleBudget {
    /// Number of frames to request from the extractor (always >= 1)
    pub target_count: usize,

    /// The sampling interval the plan was computed against, in seconds
    pub effective_interval_sec: f64,
}

/// Configured sampling defaults and limits consumed by the budget planner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SamplingPolicy {
    /// Minimum number of frames to sample per video
    pub default_frame_samples: usize,

    /// Target interval between sampled frames in seconds
    pub default_seconds_per_frame: f64,

    /// Hard ceiling on frames per request, protecting payload size
    pub max_frame_samples: usize,
}

impl Default for SamplingPolicy {
    fn default() -> Self {
        Self {
            default_frame_samples: DEFAULT_FRAME_SAMPLES,
            default_seconds_per_frame: DEFAULT_SECONDS_PER_FRAME,
            max_frame_samples: DEFAULT_MAX_FRAME_SAMPLES,
        }
    }
}
