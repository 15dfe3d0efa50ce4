use serde::Serialize;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub mod local;
pub mod youtube;

use crate::{Result, SummarizerError};

/// Extensions yt-dlp may leave behind for an extracted audio track.
const AUDIO_EXTENSIONS: &[&str] = &["wav", "m4a", "mp3", "opus", "webm"];

/// Metadata for a video, shaped per source. Produced fresh on every call and never
/// cached.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum VideoMetadata {
    Remote(RemoteMetadata),
    Local(LocalMetadata),
}

impl VideoMetadata {
    pub fn title(&self) -> &str {
        match self {
            VideoMetadata::Remote(m) => &m.title,
            VideoMetadata::Local(m) => &m.title,
        }
    }

    pub fn duration_seconds(&self) -> Option<f64> {
        match self {
            VideoMetadata::Remote(m) => m.duration_seconds,
            VideoMetadata::Local(m) => Some(m.duration_seconds),
        }
    }
}

/// Metadata reported by yt-dlp for a hosted video.
#[derive(Debug, Clone, Serialize)]
pub struct RemoteMetadata {
    pub title: String,
    pub duration_seconds: Option<f64>,
    pub channel: String,
    pub upload_date: Option<String>,
    pub view_count: Option<u64>,
    /// Truncated to 500 characters
    pub description: String,
    pub format: String,
}

/// Metadata probed from a local file with ffprobe.
#[derive(Debug, Clone, Serialize)]
pub struct LocalMetadata {
    pub title: String,
    pub duration_seconds: f64,
    pub format: String,
    pub size_bytes: u64,
    pub streams: usize,
}

/// An audio file inside a private temporary directory, owned by exactly one
/// pipeline invocation.
///
/// The directory (and the file with it) is removed when this is dropped, on every
/// exit path. Cleanup failures are logged and never surfaced.
#[derive(Debug)]
pub struct TempAudio {
    path: PathBuf,
    dir: Option<TempDir>,
}

impl TempAudio {
    pub fn new(dir: TempDir, path: PathBuf) -> Self {
        Self { path, dir: Some(dir) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempAudio {
    fn drop(&mut self) {
        if let Some(dir) = self.dir.take() {
            let dir_path = dir.path().to_path_buf();
            if let Err(e) = dir.close() {
                tracing::warn!("Cleanup warning: {}: {}", dir_path.display(), e);
            } else {
                tracing::debug!("Removed temp dir {}", dir_path.display());
            }
        }
    }
}

/// Scan a directory for a file with a recognized audio extension.
pub fn find_audio_file(dir: &Path) -> Result<PathBuf> {
    for entry in fs_err::read_dir(dir)? {
        let path = entry?.path();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        if let Some(ext) = ext {
            if AUDIO_EXTENSIONS.contains(&ext.as_str()) {
                return Ok(path);
            }
        }
    }
    Err(SummarizerError::AudioNotFound(dir.to_path_buf()))
}
