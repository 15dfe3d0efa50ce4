use serde::Serialize;

use crate::config::Config;
use crate::media::local::{resolve_path, LocalMedia};
use crate::media::youtube::YoutubeClient;
use crate::media::VideoMetadata;
use crate::source::VideoSource;
use crate::subtitles::SubtitleOutcome;
use crate::transcribe::{MlxWhisperEngine, ModelSize, TranscriptionEngine};
use crate::Result;

/// Minimum cleaned-subtitle length (in chars) accepted as real content. At or
/// below this, the subtitle attempt is treated as "nothing usable" and the
/// pipeline falls back to whisper. The exact value matters: it decides which
/// strategy a given video takes.
pub const SUBTITLE_ACCEPT_CHARS: usize = 50;

/// How a transcript was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TranscriptionMethod {
    #[serde(rename = "youtube_subtitles")]
    Subtitles,
    #[serde(rename = "whisper")]
    Whisper,
}

/// A finished transcription: the text plus how it was obtained. Immutable once
/// constructed; this is exactly the success payload of the transcribe operation.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptResult {
    pub transcript: String,
    pub metadata: TranscriptMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct TranscriptMetadata {
    pub method: TranscriptionMethod,
    /// Present only when method is whisper
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub title: String,
    pub duration_seconds: Option<f64>,
    pub word_count: usize,
    pub language: String,
}

impl TranscriptResult {
    fn from_subtitles(
        transcript: String,
        title: String,
        duration_seconds: Option<f64>,
        language: &str,
    ) -> Self {
        let word_count = transcript.split_whitespace().count();
        Self {
            metadata: TranscriptMetadata {
                method: TranscriptionMethod::Subtitles,
                model: None,
                title,
                duration_seconds,
                word_count,
                language: language.to_string(),
            },
            transcript,
        }
    }

    fn from_whisper(
        transcript: String,
        model: ModelSize,
        title: String,
        duration_seconds: Option<f64>,
        language: &str,
    ) -> Self {
        let word_count = transcript.split_whitespace().count();
        Self {
            metadata: TranscriptMetadata {
                method: TranscriptionMethod::Whisper,
                model: Some(model.as_str().to_string()),
                title,
                duration_seconds,
                word_count,
                language: language.to_string(),
            },
            transcript,
        }
    }
}

fn subtitles_usable(text: &str) -> bool {
    text.chars().count() > SUBTITLE_ACCEPT_CHARS
}

/// The decision pipeline behind both public operations.
///
/// One invocation runs one video end to end, synchronously; every temp resource it
/// creates is private to it and released when the call returns, on success or
/// error.
pub struct TranscriptionPipeline {
    youtube: YoutubeClient,
    local: LocalMedia,
    engine: Box<dyn TranscriptionEngine>,
}

impl TranscriptionPipeline {
    pub fn new(config: &Config) -> Self {
        let engine = MlxWhisperEngine::new(&config.tools.whisper);
        Self::with_engine(config, Box::new(engine))
    }

    /// Build a pipeline with an injected speech-to-text engine.
    pub fn with_engine(config: &Config, engine: Box<dyn TranscriptionEngine>) -> Self {
        Self {
            youtube: YoutubeClient::new(&config.tools.yt_dlp),
            local: LocalMedia::new(&config.tools.ffmpeg, &config.tools.ffprobe),
            engine,
        }
    }

    /// Get video metadata without transcribing.
    pub async fn get_video_info(&self, source: &str) -> Result<VideoMetadata> {
        match VideoSource::classify(source) {
            VideoSource::Remote(url) => {
                Ok(VideoMetadata::Remote(self.youtube.fetch_metadata(&url).await?))
            }
            VideoSource::Local(path) => {
                let resolved = resolve_path(&path)?;
                Ok(VideoMetadata::Local(self.local.probe(&resolved).await?))
            }
        }
    }

    /// Transcribe a video, preferring existing captions over model inference.
    ///
    /// Strategy: YouTube with usable subtitles -> clean VTT text (no audio ever
    /// downloaded); YouTube otherwise -> download audio, whisper; local file ->
    /// extract audio, whisper.
    pub async fn transcribe_video(
        &self,
        source: &str,
        language: &str,
        model: ModelSize,
    ) -> Result<TranscriptResult> {
        match VideoSource::classify(source) {
            VideoSource::Remote(url) => {
                tracing::info!("Attempting YouTube subtitle extraction...");
                if let SubtitleOutcome::Found(text) = self.youtube.try_subtitles(&url, language).await
                {
                    if subtitles_usable(&text) {
                        tracing::info!("Got subtitles: {} chars", text.chars().count());
                        let info = self.youtube.fetch_metadata(&url).await?;
                        return Ok(TranscriptResult::from_subtitles(
                            text,
                            info.title,
                            info.duration_seconds,
                            language,
                        ));
                    }
                    tracing::debug!(
                        "Subtitles below acceptance threshold ({} chars)",
                        text.chars().count()
                    );
                }

                tracing::info!("No usable subtitles, downloading audio for whisper...");
                let download = self.youtube.download_audio(&url).await?;
                let transcript = self
                    .engine
                    .transcribe(download.audio.path(), model, language)
                    .await?;
                Ok(TranscriptResult::from_whisper(
                    transcript,
                    model,
                    download.title.clone().unwrap_or_else(|| "Unknown".to_string()),
                    download.duration_seconds,
                    language,
                ))
                // download (and its temp dir) is dropped here, error or not
            }
            VideoSource::Local(path) => {
                tracing::info!("Extracting audio from local file: {}", path.display());
                let resolved = resolve_path(&path)?;
                let audio = self.local.extract_audio(&resolved).await?;
                let transcript = self.engine.transcribe(audio.path(), model, language).await?;
                drop(audio);

                let info = self.local.probe(&resolved).await?;
                Ok(TranscriptResult::from_whisper(
                    transcript,
                    model,
                    info.title,
                    Some(info.duration_seconds),
                    language,
                ))
            }
        }
    }
}
