//! Uniform frame index selection.

/// Select a uniformly-distributed set of frame indices across a video.
///
/// Returns a strictly increasing, deduplicated sequence of indices in
/// `[0, total_frames)`. When `samples >= total_frames` every index is
/// returned. Otherwise indices are `floor(i * total_frames / samples)` for
/// `i in 0..samples`; flooring can collide near the end of short videos,
/// so the result may be shorter than `samples`. Callers must treat the
/// requested count as an upper bound, not a guarantee — the budget planner
/// already clamps against the real frame count, so the gap is not refilled.
pub fn select_frame_indices(total_frames: i64, samples: usize) -> Vec<i64> {
    if total_frames <= 0 || samples == 0 {
        return Vec::new();
    }
    if samples as i64 >= total_frames {
        return (0..total_frames).collect();
    }

    let step = total_frames as f64 / samples as f64;
    let mut indices: Vec<i64> = (0..samples).map(|i| (i as f64 * step) as i64).collect();
    indices.sort_unstable();
    indices.dedup();
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oversampling_returns_every_index() {
        assert_eq!(
            select_frame_indices(10, 20),
            (0..10).collect::<Vec<i64>>()
        );
    }

    #[test]
    fn test_uniform_spacing() {
        assert_eq!(select_frame_indices(100, 5), vec![0, 20, 40, 60, 80]);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(select_frame_indices(0, 5), Vec::<i64>::new());
        assert_eq!(select_frame_indices(5, 0), Vec::<i64>::new());
        assert_eq!(select_frame_indices(-3, 5), Vec::<i64>::new());
    }

    #[test]
    fn test_output_is_strictly_increasing_and_in_range() {
        for total in [1i64, 2, 7, 30, 100, 999] {
            for samples in [1usize, 2, 5, 29, 100] {
                let indices = select_frame_indices(total, samples);
                assert!(indices.len() <= samples);
                assert!(indices.len() <= total as usize);
                for pair in indices.windows(2) {
                    assert!(pair[0] < pair[1]);
                }
                for &idx in &indices {
                    assert!(idx >= 0 && idx < total);
                }
            }
        }
    }

    #[test]
    fn test_dedup_may_shrink_result() {
        // 11 frames / 10 samples: step 1.1 floors into 10 distinct values,
        // but near-parity totals can collapse; length is a ceiling.
        let indices = select_frame_indices(11, 10);
        assert!(indices.len() <= 10);
        assert_eq!(indices[0], 0);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            select_frame_indices(347, 17),
            select_frame_indices(347, 17)
        );
    }
}
