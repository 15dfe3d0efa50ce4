//! Video Summarizer - transcribe YouTube videos and local media files
//!
//! This library exposes two operations: fetching video metadata and transcribing a
//! video to plain text. Remote videos go through yt-dlp (subtitle extraction first,
//! audio download as fallback), local files through ffprobe/ffmpeg, and speech is
//! turned into text by a pluggable whisper engine.

pub mod cli;
pub mod config;
pub mod media;
pub mod pipeline;
pub mod process;
pub mod source;
pub mod subtitles;
pub mod tools;
pub mod transcribe;
pub mod utils;

pub use config::Config;
pub use media::VideoMetadata;
pub use pipeline::{TranscriptResult, TranscriptionPipeline};
pub use source::VideoSource;
pub use transcribe::{ModelSize, TranscriptionEngine};

use std::path::PathBuf;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, SummarizerError>;

/// Error taxonomy for the transcription pipeline
#[derive(thiserror::Error, Debug)]
pub enum SummarizerError {
    #[error("Invalid model '{0}'. Choose from: tiny, base, small, medium, large")]
    InvalidModel(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("{tool} failed: {stderr}")]
    ExternalTool { tool: String, stderr: String },

    #[error("No audio file found in {}", .0.display())]
    AudioNotFound(PathBuf),

    #[error("Transcription failed: {0}")]
    Transcription(String),

    #[error("Failed to parse {tool} output: {message}")]
    UnparseableOutput { tool: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
