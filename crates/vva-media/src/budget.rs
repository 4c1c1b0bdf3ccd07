//! Sample budget planning.

use vva_models::{SampleBudget, SamplingPolicy, VideoMetadata};

/// Decide how many frames to sample based on video length.
///
/// - At least the configured (or overridden) baseline
/// - Roughly one frame per `seconds_per_frame` of duration
/// - Clamped by the real frame count and the configured ceiling
///
/// Longer videos get denser sampling while the ceiling bounds worst-case
/// payload size. The returned `target_count` is always >= 1. Overrides are
/// validated positive before they reach this function.
pub fn plan_sample_budget(
    metadata: &VideoMetadata,
    frame_samples_override: Option<usize>,
    interval_override: Option<f64>,
    policy: &SamplingPolicy,
) -> SampleBudget {
    let baseline = frame_samples_override
        .unwrap_or(policy.default_frame_samples)
        .max(1);
    let interval = interval_override.unwrap_or(policy.default_seconds_per_frame);

    let time_based = match metadata.duration_sec {
        Some(duration) if duration > 0.0 => (duration / interval) as usize + 1,
        _ => baseline,
    };

    let mut target = baseline.max(time_based);

    if metadata.frame_count > 0 {
        target = target.min(metadata.frame_count as usize);
    }
    target = target.min(policy.max_frame_samples);

    SampleBudget {
        target_count: target.max(1),
        effective_interval_sec: interval,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> SamplingPolicy {
        SamplingPolicy {
            default_frame_samples: 20,
            default_seconds_per_frame: 2.0,
            max_frame_samples: 120,
        }
    }

    fn metadata(frame_count: i64, fps: f64) -> VideoMetadata {
        VideoMetadata::from_decoder_props(frame_count, fps)
    }

    #[test]
    fn test_unknown_duration_uses_baseline() {
        let budget = plan_sample_budget(&metadata(0, 0.0), None, None, &policy());
        assert_eq!(budget.target_count, 20);
        assert!((budget.effective_interval_sec - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_long_video_hits_ceiling() {
        // 300s at one frame per 2s wants 151 frames; ceiling wins.
        let meta = VideoMetadata {
            frame_count: 10_000,
            fps: 33.333,
            duration_sec: Some(300.0),
        };
        let budget = plan_sample_budget(&meta, None, None, &policy());
        assert_eq!(budget.target_count, 120);
    }

    #[test]
    fn test_never_exceeds_frame_count() {
        let budget = plan_sample_budget(&metadata(5, 30.0), Some(500), None, &policy());
        assert_eq!(budget.target_count, 5);
    }

    #[test]
    fn test_short_video_keeps_baseline() {
        // 10s at 30fps: time-based density (6) loses to the baseline (20),
        // and 300 real frames leave the baseline unclamped.
        let budget = plan_sample_budget(&metadata(300, 30.0), None, None, &policy());
        assert_eq!(budget.target_count, 20);
    }

    #[test]
    fn test_interval_override_drives_density() {
        let meta = metadata(9_000, 30.0); // 300s
        let budget = plan_sample_budget(&meta, None, Some(10.0), &policy());
        // floor(300/10) + 1 = 31 > baseline 20
        assert_eq!(budget.target_count, 31);
        assert!((budget.effective_interval_sec - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_baseline_has_floor_of_one() {
        let loose = SamplingPolicy {
            default_frame_samples: 0,
            ..policy()
        };
        let budget = plan_sample_budget(&metadata(0, 0.0), None, None, &loose);
        assert_eq!(budget.target_count, 1);
    }

    #[test]
    fn test_zero_duration_treated_as_unknown() {
        let meta = VideoMetadata {
            frame_count: 0,
            fps: 30.0,
            duration_sec: Some(0.0),
        };
        let budget = plan_sample_budget(&meta, None, None, &policy());
        assert_eq!(budget.target_count, 20);
    }
}
