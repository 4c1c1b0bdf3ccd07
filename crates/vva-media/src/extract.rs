//! Frame extraction to data URIs.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine};
use opencv::core::{Mat, Vector};
use opencv::imgcodecs::imencode;
use opencv::prelude::{MatTraitConst, VideoCaptureTrait, VideoCaptureTraitConst};
use opencv::videoio::{
    VideoCapture, CAP_ANY, CAP_PROP_FPS, CAP_PROP_FRAME_COUNT, CAP_PROP_POS_FRAMES,
};
use tracing::{debug, warn};

use crate::error::{MediaError, MediaResult};
use crate::sampler::select_frame_indices;
use vva_models::FrameSample;

/// Sample frames uniformly across a video and return them as data URIs.
///
/// Indices come from the selector unless an explicit list is supplied.
/// Frames are visited in ascending index order with a single decoder
/// handle. A seek, decode, or encode failure for one index skips that
/// index and moves on — the loop folds successes into the result and only
/// an empty result escalates, as [`MediaError::NoFramesExtracted`].
pub fn sample_frames(
    path: impl AsRef<Path>,
    sample_count: usize,
    indices: Option<Vec<i64>>,
) -> MediaResult<Vec<FrameSample>> {
    let path = path.as_ref();

    let mut cap = VideoCapture::from_file(&path.to_string_lossy(), CAP_ANY)
        .map_err(|_| MediaError::source_unreadable(path))?;
    if !cap.is_opened().unwrap_or(false) {
        return Err(MediaError::source_unreadable(path));
    }

    let total_frames = cap.get(CAP_PROP_FRAME_COUNT).unwrap_or(0.0) as i64;
    let fps = cap.get(CAP_PROP_FPS).unwrap_or(0.0);
    let indices = indices.unwrap_or_else(|| select_frame_indices(total_frames, sample_count));

    debug!(
        total_frames,
        fps,
        requested = sample_count,
        selected = indices.len(),
        "Sampling frames"
    );

    let mut samples = Vec::with_capacity(indices.len());

    for idx in indices {
        match cap.set(CAP_PROP_POS_FRAMES, idx as f64) {
            Ok(true) => {}
            Ok(false) | Err(_) => {
                warn!(index = idx, "Failed to seek to frame, skipping");
                continue;
            }
        }

        let mut frame = Mat::default();
        let success = match cap.read(&mut frame) {
            Ok(s) => s,
            Err(e) => {
                warn!(index = idx, "Failed to decode frame, skipping: {}", e);
                continue;
            }
        };
        if !success || frame.empty() {
            warn!(index = idx, "Empty frame, skipping");
            continue;
        }

        let data_url = match encode_frame(&frame) {
            Ok(url) => url,
            Err(e) => {
                warn!(index = idx, "Failed to encode frame, skipping: {}", e);
                continue;
            }
        };

        let timestamp_sec = if fps > 0.0 {
            Some(idx as f64 / fps)
        } else {
            None
        };

        samples.push(FrameSample {
            index: idx,
            timestamp_sec,
            data_url,
        });
    }

    let _ = cap.release();

    if samples.is_empty() {
        return Err(MediaError::NoFramesExtracted);
    }
    Ok(samples)
}

/// Sample frames without blocking the async runtime.
pub async fn sample_frames_async(
    path: impl AsRef<Path>,
    sample_count: usize,
    indices: Option<Vec<i64>>,
) -> MediaResult<Vec<FrameSample>> {
    let path = path.as_ref().to_path_buf();
    tokio::task::spawn_blocking(move || sample_frames(&path, sample_count, indices))
        .await
        .map_err(|e| MediaError::internal(format!("frame extraction task failed: {e}")))?
}

/// Encode a decoded frame as a JPEG data URI.
fn encode_frame(frame: &Mat) -> MediaResult<String> {
    let mut buf = Vector::<u8>::new();
    let encoded = imencode(".jpg", frame, &mut buf, &Vector::<i32>::new())?;
    if !encoded {
        return Err(MediaError::EncodeFailed);
    }
    let b64 = STANDARD.encode(buf.to_vec());
    Ok(format!("data:image/jpeg;base64,{}", b64))
}
