use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Crate configuration: where the external tools live and what the transcription
/// defaults are. Everything has a working default, so no config file is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// External tool locations
    pub tools: ToolsConfig,

    /// Transcription defaults
    pub transcription: TranscriptionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Downloader for remote videos
    pub yt_dlp: String,

    /// Transcoder for local audio extraction
    pub ffmpeg: String,

    /// Prober for local metadata
    pub ffprobe: String,

    /// Whisper CLI used when no subtitles are available
    pub whisper: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptionConfig {
    /// ISO 639-1 language code
    pub default_language: String,

    /// Model size tier: tiny, base, small, medium, large
    pub default_model: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            yt_dlp: "yt-dlp".to_string(),
            ffmpeg: "ffmpeg".to_string(),
            ffprobe: "ffprobe".to_string(),
            whisper: "mlx_whisper".to_string(),
        }
    }
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            default_model: "base".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `config.yaml` (current directory first, then the
    /// user config directory). Falls back to built-in defaults when no file
    /// exists; the binary never writes config on its own.
    pub async fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs_err::read_to_string(&path)
                    .context("Failed to read config file")?;
                serde_yaml::from_str(&content).context("Failed to parse config file")
            }
            _ => Ok(Self::default()),
        }
    }

    fn config_path() -> Option<PathBuf> {
        let local_config = PathBuf::from("config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }
        dirs::config_dir().map(|d| d.join("video-summarizer").join("config.yaml"))
    }
}
