//! Video analysis handler.

use std::path::Path;

use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::Json;
use tracing::info;

use vva_models::VideoAnalysisResponse;

use crate::error::{ApiError, ApiResult};
use crate::services::VideoAnalyzer;
use crate::state::AppState;

/// Parsed multipart form for one analysis request.
#[derive(Default)]
struct AnalyzeForm {
    video: Option<(Bytes, Option<String>, Option<String>)>,
    instruction: Option<String>,
    frame_samples: Option<usize>,
    seconds_per_frame: Option<f64>,
}

/// Analyze an uploaded video with the vision model.
///
/// Multipart fields: `file` (required video), `instruction`,
/// `frame_samples`, `seconds_per_frame`. Overrides must be positive.
/// The upload is materialized to a temp file that is removed on every
/// exit path (success, validation failure, analysis failure).
pub async fn analyze_video(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<Json<VideoAnalysisResponse>> {
    let form = parse_form(multipart).await?;

    let (bytes, content_type, file_name) = form
        .video
        .ok_or_else(|| ApiError::bad_request("Missing video file field."))?;

    if !content_type.as_deref().unwrap_or_default().starts_with("video/") {
        return Err(ApiError::bad_request("Please upload a valid video file."));
    }

    // Keep the source extension so the decoder can pick the demuxer.
    let suffix = file_name
        .as_deref()
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_else(|| ".mp4".to_string());

    let temp = tempfile::Builder::new()
        .prefix("vva-upload-")
        .suffix(&suffix)
        .tempfile()
        .map_err(|e| ApiError::internal(format!("Failed to create temp file: {e}")))?;
    tokio::fs::write(temp.path(), &bytes)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to write upload: {e}")))?;

    info!(
        bytes = bytes.len(),
        file_name = file_name.as_deref().unwrap_or("<unnamed>"),
        "Received video for analysis"
    );

    let analyzer = VideoAnalyzer::new(&state);
    let response = analyzer
        .analyze(
            temp.path(),
            form.instruction.as_deref(),
            form.frame_samples,
            form.seconds_per_frame,
        )
        .await?;

    Ok(Json(response))
}

/// Pull known fields out of the multipart stream, validating overrides.
async fn parse_form(mut multipart: Multipart) -> ApiResult<AnalyzeForm> {
    let mut form = AnalyzeForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart payload: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let content_type = field.content_type().map(|s| s.to_string());
                let file_name = field.file_name().map(|s| s.to_string());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Failed to read upload: {e}")))?;
                form.video = Some((bytes, content_type, file_name));
            }
            "instruction" => {
                form.instruction = Some(read_text(field).await?);
            }
            "frame_samples" => {
                let value: i64 = read_text(field)
                    .await?
                    .trim()
                    .parse()
                    .map_err(|_| ApiError::bad_request("frame_samples must be an integer."))?;
                if value <= 0 {
                    return Err(ApiError::bad_request("frame_samples must be positive."));
                }
                form.frame_samples = Some(value as usize);
            }
            "seconds_per_frame" => {
                let value: f64 = read_text(field)
                    .await?
                    .trim()
                    .parse()
                    .map_err(|_| ApiError::bad_request("seconds_per_frame must be a number."))?;
                if !value.is_finite() || value <= 0.0 {
                    return Err(ApiError::bad_request("seconds_per_frame must be positive."));
                }
                form.seconds_per_frame = Some(value);
            }
            _ => {}
        }
    }

    Ok(form)
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> ApiResult<String> {
    field
        .text()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid form field: {e}")))
}
