//! Bodies of the two remotely-callable operations. Each returns a JSON string:
//! either the success payload or `{"error": "..."}`. Raw faults never leave this
//! layer; full error details go to the diagnostic stream only.

use serde::Serialize;

use crate::pipeline::TranscriptionPipeline;
use crate::transcribe::ModelSize;

/// Transcribe a video from a YouTube URL or local file path.
///
/// The model name is validated here, before any external process is spawned.
pub async fn transcribe_video_tool(
    pipeline: &TranscriptionPipeline,
    source: &str,
    language: &str,
    model: &str,
) -> String {
    let model = match model.parse::<ModelSize>() {
        Ok(m) => m,
        Err(e) => return error_json(&e.to_string()),
    };

    match pipeline.transcribe_video(source, language, model).await {
        Ok(result) => to_json(&result),
        Err(e) => {
            tracing::error!("transcribe_video failed: {e:?}");
            error_json(&e.to_string())
        }
    }
}

/// Get metadata about a video without transcribing it.
pub async fn get_video_info_tool(pipeline: &TranscriptionPipeline, source: &str) -> String {
    match pipeline.get_video_info(source).await {
        Ok(info) => to_json(&info),
        Err(e) => {
            tracing::error!("get_video_info failed: {e:?}");
            error_json(&e.to_string())
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("response serialization failed: {e}");
            error_json("internal serialization error")
        }
    }
}

fn error_json(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcribe::MockTranscriptionEngine;
    use crate::Config;

    fn pipeline() -> TranscriptionPipeline {
        // Engine with no expectations: any call would fail the test, which is the
        // point for boundary-rejection cases.
        TranscriptionPipeline::with_engine(
            &Config::default(),
            Box::new(MockTranscriptionEngine::new()),
        )
    }

    #[tokio::test]
    async fn test_invalid_model_rejected_before_any_external_call() {
        let response = transcribe_video_tool(&pipeline(), "anything", "en", "huge").await;
        assert_eq!(
            response,
            r#"{"error":"Invalid model 'huge'. Choose from: tiny, base, small, medium, large"}"#
        );
    }

    #[tokio::test]
    async fn test_missing_file_becomes_error_payload() {
        let response = transcribe_video_tool(&pipeline(), "/nonexistent/clip.mp4", "en", "base").await;
        let v: serde_json::Value = serde_json::from_str(&response).unwrap();
        let msg = v["error"].as_str().unwrap();
        assert!(msg.starts_with("File not found: "));
        assert!(msg.contains("/nonexistent/clip.mp4"));
    }

    #[tokio::test]
    async fn test_info_missing_file_becomes_error_payload() {
        let response = get_video_info_tool(&pipeline(), "/nonexistent/clip.mp4").await;
        let v: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert!(v["error"].as_str().unwrap().contains("/nonexistent/clip.mp4"));
    }

    #[test]
    fn test_error_json_shape() {
        assert_eq!(error_json("boom"), r#"{"error":"boom"}"#);
    }
}
