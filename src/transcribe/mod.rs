use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tempfile::TempDir;

use crate::process::run_tool;
use crate::{Result, SummarizerError};

/// Whisper model size tiers. Anything outside this set is rejected at the tool
/// boundary before any external process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelSize {
    Tiny,
    Base,
    Small,
    Medium,
    Large,
}

impl ModelSize {
    pub const ALL: [ModelSize; 5] = [
        ModelSize::Tiny,
        ModelSize::Base,
        ModelSize::Small,
        ModelSize::Medium,
        ModelSize::Large,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelSize::Tiny => "tiny",
            ModelSize::Base => "base",
            ModelSize::Small => "small",
            ModelSize::Medium => "medium",
            ModelSize::Large => "large",
        }
    }

    /// Model repository identifier, `mlx-community/whisper-<size>-mlx`.
    pub fn repo_id(&self) -> String {
        format!("mlx-community/whisper-{}-mlx", self.as_str())
    }
}

impl fmt::Display for ModelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelSize {
    type Err = SummarizerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "tiny" => Ok(ModelSize::Tiny),
            "base" => Ok(ModelSize::Base),
            "small" => Ok(ModelSize::Small),
            "medium" => Ok(ModelSize::Medium),
            "large" => Ok(ModelSize::Large),
            other => Err(SummarizerError::InvalidModel(other.to_string())),
        }
    }
}

/// Speech-to-text capability: audio + model + language in, plain text out.
///
/// The concrete binding is injected into the pipeline so tests can substitute a
/// mock and deployments can swap engines.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, audio_path: &Path, model: ModelSize, language: &str)
        -> Result<String>;
}

/// Default engine: shells out to the `mlx_whisper` CLI, which writes a JSON result
/// file into an output directory we control.
pub struct MlxWhisperEngine {
    binary_path: String,
}

impl MlxWhisperEngine {
    pub fn new<S: Into<String>>(binary_path: S) -> Self {
        Self {
            binary_path: binary_path.into(),
        }
    }
}

#[async_trait]
impl TranscriptionEngine for MlxWhisperEngine {
    async fn transcribe(
        &self,
        audio_path: &Path,
        model: ModelSize,
        language: &str,
    ) -> Result<String> {
        tracing::info!(
            "Transcribing with whisper model={} language={}",
            model,
            language
        );

        let out_dir = TempDir::with_prefix("vs-whisper-")
            .map_err(|e| SummarizerError::Transcription(format!("no temp dir: {e}")))?;

        let args: Vec<String> = vec![
            audio_path.to_string_lossy().into_owned(),
            "--model".into(),
            model.repo_id(),
            "--language".into(),
            language.into(),
            "--output-dir".into(),
            out_dir.path().to_string_lossy().into_owned(),
            "--output-format".into(),
            "json".into(),
            "--verbose".into(),
            "False".into(),
        ];
        let out = run_tool(&self.binary_path, args)
            .await
            .map_err(|e| SummarizerError::Transcription(e.to_string()))?;

        if !out.success() {
            return Err(SummarizerError::Transcription(out.stderr));
        }

        let stem = audio_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| {
                SummarizerError::Transcription(format!(
                    "invalid audio filename: {}",
                    audio_path.display()
                ))
            })?;
        let result_path = out_dir.path().join(format!("{stem}.json"));

        let content = fs_err::read_to_string(&result_path)
            .map_err(|e| SummarizerError::Transcription(format!("no result file: {e}")))?;
        let value: Value = serde_json::from_str(&content)
            .map_err(|e| SummarizerError::Transcription(format!("bad result file: {e}")))?;

        Ok(value["text"].as_str().unwrap_or("").trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_size_round_trip() {
        for model in ModelSize::ALL {
            assert_eq!(model.as_str().parse::<ModelSize>().unwrap(), model);
        }
    }

    #[test]
    fn test_invalid_model_message() {
        let err = "huge".parse::<ModelSize>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid model 'huge'. Choose from: tiny, base, small, medium, large"
        );
    }

    #[test]
    fn test_model_names_are_case_sensitive() {
        assert!("Base".parse::<ModelSize>().is_err());
        assert!("".parse::<ModelSize>().is_err());
    }

    #[test]
    fn test_repo_id_convention() {
        assert_eq!(ModelSize::Base.repo_id(), "mlx-community/whisper-base-mlx");
        assert_eq!(ModelSize::Large.repo_id(), "mlx-community/whisper-large-mlx");
    }
}
