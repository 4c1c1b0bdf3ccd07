//! Decoder-backed video metadata probing.

use std::path::Path;

use opencv::prelude::{VideoCaptureTrait, VideoCaptureTraitConst};
use opencv::videoio::{VideoCapture, CAP_ANY, CAP_PROP_FPS, CAP_PROP_FRAME_COUNT};
use tracing::debug;

use crate::error::{MediaError, MediaResult};
use vva_models::VideoMetadata;

/// Read lightweight metadata to inform sampling density.
///
/// Opens a decoder handle for the duration of the call; the capture is
/// released on every exit path, including failures. Properties the
/// container does not report come back as zero and the duration stays
/// absent rather than being fabricated.
pub fn read_metadata(path: impl AsRef<Path>) -> MediaResult<VideoMetadata> {
    let path = path.as_ref();

    let mut cap = VideoCapture::from_file(&path.to_string_lossy(), CAP_ANY)
        .map_err(|_| MediaError::source_unreadable(path))?;
    if !cap.is_opened().unwrap_or(false) {
        return Err(MediaError::source_unreadable(path));
    }

    let frame_count = cap.get(CAP_PROP_FRAME_COUNT).unwrap_or(0.0) as i64;
    let fps = cap.get(CAP_PROP_FPS).unwrap_or(0.0);

    let metadata = VideoMetadata::from_decoder_props(frame_count, fps);
    debug!(
        frame_count = metadata.frame_count,
        fps = metadata.fps,
        duration_sec = metadata.duration_sec,
        "Probed video metadata"
    );

    let _ = cap.release();
    Ok(metadata)
}

/// Read metadata without blocking the async runtime.
pub async fn read_metadata_async(path: impl AsRef<Path>) -> MediaResult<VideoMetadata> {
    let path = path.as_ref().to_path_buf();
    tokio::task::spawn_blocking(move || read_metadata(&path))
        .await
        .map_err(|e| MediaError::internal(format!("metadata probe task failed: {e}")))?
}
