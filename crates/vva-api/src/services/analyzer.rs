//! Video analysis orchestration.
//!
//! Sequences metadata probing, budget planning, frame extraction, prompt
//! construction, and the inference call into one stateless pipeline. The
//! blocking decode steps run on the blocking pool so a slow video never
//! stalls concurrent requests.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use vva_inference::{ChatMessage, ContentPart, VisionClient};
use vva_media::{plan_sample_budget, read_metadata_async, sample_frames_async};
use vva_models::{FrameSample, VideoAnalysisResponse};

use crate::config::AnalysisConfig;
use crate::error::ApiResult;
use crate::metrics;
use crate::state::AppState;

/// Instruction used when the caller does not supply one.
const DEFAULT_INSTRUCTION: &str = "Provide a rich, chronological explanation of the video. \
     Summarize intent and outcome, list scene changes, key actions, subjects/objects, and \
     notable visual cues. Reference timestamps when visible.";

/// System directive establishing the analyst persona.
const SYSTEM_DIRECTIVE: &str = "You are an expert video analyst. Use the provided frames to \
     reconstruct the story, noting scene transitions, actions, and visual details. Provide \
     detail without inventing elements not visible.";

/// Handles frame extraction and vision model calls for one request.
pub struct VideoAnalyzer {
    analysis: AnalysisConfig,
    inference: Arc<VisionClient>,
}

impl VideoAnalyzer {
    /// Create an analyzer from application state.
    pub fn new(state: &AppState) -> Self {
        Self {
            analysis: state.config.analysis.clone(),
            inference: Arc::clone(&state.inference),
        }
    }

    /// Analyze a video file and return a chronological summary.
    ///
    /// Overrides are validated positive by the handler before they get
    /// here. Media failures surface as client errors; inference failures
    /// as dependency errors. No retries.
    pub async fn analyze(
        &self,
        video_path: &Path,
        instruction: Option<&str>,
        frame_samples: Option<usize>,
        seconds_per_frame: Option<f64>,
    ) -> ApiResult<VideoAnalysisResponse> {
        let metadata = read_metadata_async(video_path).await?;
        let budget = plan_sample_budget(
            &metadata,
            frame_samples,
            seconds_per_frame,
            &self.analysis.sampling,
        );

        let extraction_start = Instant::now();
        let frames = sample_frames_async(video_path, budget.target_count, None).await?;
        metrics::record_extraction(frames.len(), extraction_start.elapsed().as_secs_f64());

        info!(
            target = budget.target_count,
            extracted = frames.len(),
            duration_sec = metadata.duration_sec,
            "Extracted evidence frames"
        );

        let instruction = resolve_instruction(instruction);
        let messages = build_messages(&instruction, &frames);

        let inference_start = Instant::now();
        let summary = self
            .inference
            .complete(&self.analysis.model, &messages, self.analysis.max_tokens)
            .await?;
        metrics::record_inference_duration(inference_start.elapsed().as_secs_f64());

        Ok(VideoAnalysisResponse {
            summary,
            frames_used: frames.len(),
            model: self.analysis.model.clone(),
            frame_timestamps: Some(frames.iter().filter_map(|f| f.timestamp_sec).collect()),
            prompt: Some(instruction),
            total_frames: (metadata.frame_count > 0).then_some(metadata.frame_count),
            video_duration_sec: metadata.duration_sec,
            sampling_interval_sec: Some(budget.effective_interval_sec),
            requested_frame_samples: Some(budget.target_count),
        })
    }
}

/// Use the caller's instruction when it has content, else the default.
fn resolve_instruction(instruction: Option<&str>) -> String {
    match instruction.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => DEFAULT_INSTRUCTION.to_string(),
    }
}

/// Compose the multimodal prompt: the fixed system directive, then one
/// user turn carrying the instruction followed by every frame in
/// ascending index order.
fn build_messages(instruction: &str, frames: &[FrameSample]) -> Vec<ChatMessage> {
    let mut parts = Vec::with_capacity(frames.len() + 1);
    parts.push(ContentPart::text(instruction));
    for frame in frames {
        parts.push(ContentPart::image_url(frame.data_url.clone()));
    }

    vec![
        ChatMessage::system(SYSTEM_DIRECTIVE),
        ChatMessage::user(parts),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use vva_inference::MessageContent;

    fn frame(index: i64, timestamp_sec: Option<f64>) -> FrameSample {
        FrameSample {
            index,
            timestamp_sec,
            data_url: format!("data:image/jpeg;base64,frame{}", index),
        }
    }

    #[test]
    fn test_caller_instruction_is_trimmed() {
        assert_eq!(resolve_instruction(Some("  list scenes  ")), "list scenes");
    }

    #[test]
    fn test_blank_instruction_falls_back_to_default() {
        assert_eq!(resolve_instruction(None), DEFAULT_INSTRUCTION);
        assert_eq!(resolve_instruction(Some("")), DEFAULT_INSTRUCTION);
        assert_eq!(resolve_instruction(Some("   ")), DEFAULT_INSTRUCTION);
    }

    #[test]
    fn test_messages_carry_instruction_then_frames_in_order() {
        let frames = vec![frame(0, Some(0.0)), frame(15, Some(0.5)), frame(30, Some(1.0))];
        let messages = build_messages("what happens?", &frames);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "user");

        let MessageContent::Parts(parts) = &messages[1].content else {
            panic!("user turn should be multimodal");
        };
        assert_eq!(parts.len(), 4);
        assert!(matches!(&parts[0], ContentPart::Text { text } if text == "what happens?"));
        for (part, frame) in parts[1..].iter().zip(&frames) {
            let ContentPart::ImageUrl { image_url } = part else {
                panic!("expected image part");
            };
            assert_eq!(image_url.url, frame.data_url);
        }
    }

    #[test]
    fn test_system_directive_constrains_invention() {
        let messages = build_messages("x", &[]);
        let MessageContent::Text(text) = &messages[0].content else {
            panic!("system turn should be plain text");
        };
        assert!(text.contains("without inventing"));
    }
}
