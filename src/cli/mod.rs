use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "video-summarizer",
    about = "Transcribe YouTube videos and local media files",
    version,
    long_about = "Transcribes videos to plain text. YouTube sources try subtitle \
extraction first (instant, no model needed) and fall back to downloading audio for \
whisper; local files are probed and extracted with ffmpeg. Results are printed to \
stdout as JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Transcribe a video from a YouTube URL or local file path
    Transcribe {
        /// YouTube URL (youtube.com/youtu.be) or local file path
        #[arg(value_name = "SOURCE")]
        source: String,

        /// ISO 639-1 language code (default from config, normally "en")
        #[arg(short, long, value_name = "LANG")]
        language: Option<String>,

        /// Whisper model size: tiny, base, small, medium, large
        #[arg(short, long, value_name = "MODEL")]
        model: Option<String>,
    },

    /// Get video metadata without transcribing (fast, no model)
    Info {
        /// YouTube URL or local file path
        #[arg(value_name = "SOURCE")]
        source: String,
    },
}
