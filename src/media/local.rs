use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::{LocalMetadata, TempAudio};
use crate::process::run_tool;
use crate::{Result, SummarizerError};

/// ffprobe/ffmpeg wrapper for files on the local filesystem.
pub struct LocalMedia {
    ffmpeg_path: String,
    ffprobe_path: String,
}

impl LocalMedia {
    pub fn new<S1: Into<String>, S2: Into<String>>(ffmpeg_path: S1, ffprobe_path: S2) -> Self {
        Self {
            ffmpeg_path: ffmpeg_path.into(),
            ffprobe_path: ffprobe_path.into(),
        }
    }

    /// Probe a resolved file with ffprobe and map its format/stream report.
    pub async fn probe(&self, path: &Path) -> Result<LocalMetadata> {
        let args: Vec<String> = vec![
            "-v".into(),
            "quiet".into(),
            "-print_format".into(),
            "json".into(),
            "-show_format".into(),
            "-show_streams".into(),
            path.to_string_lossy().into_owned(),
        ];
        let out = run_tool(&self.ffprobe_path, args).await?;

        if !out.success() {
            return Err(SummarizerError::ExternalTool {
                tool: "ffprobe".to_string(),
                stderr: out.stderr,
            });
        }

        let value: Value = serde_json::from_str(&out.stdout).map_err(|e| {
            SummarizerError::UnparseableOutput {
                tool: "ffprobe".to_string(),
                message: e.to_string(),
            }
        })?;

        let title = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(local_metadata_from_value(&value, title))
    }

    /// Extract the audio track as 16kHz mono WAV into a fresh private temp dir.
    pub async fn extract_audio(&self, path: &Path) -> Result<TempAudio> {
        let tmpdir = TempDir::with_prefix("vs-local-")?;
        let wav_path = tmpdir.path().join("audio.wav");

        let args: Vec<String> = vec![
            "-i".into(),
            path.to_string_lossy().into_owned(),
            "-vn".into(),
            "-ar".into(),
            "16000".into(),
            "-ac".into(),
            "1".into(),
            "-f".into(),
            "wav".into(),
            "-y".into(),
            wav_path.to_string_lossy().into_owned(),
        ];
        let out = run_tool(&self.ffmpeg_path, args).await?;

        if !out.success() {
            return Err(SummarizerError::ExternalTool {
                tool: "ffmpeg".to_string(),
                stderr: out.stderr,
            });
        }

        Ok(TempAudio::new(tmpdir, wav_path))
    }
}

/// Expand `~`, make the path absolute, and require that it exists.
pub fn resolve_path(path: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path);
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        std::env::current_dir()?.join(expanded)
    };

    if !absolute.exists() {
        return Err(SummarizerError::FileNotFound(absolute));
    }
    Ok(fs_err::canonicalize(&absolute).unwrap_or(absolute))
}

fn expand_tilde(path: &Path) -> PathBuf {
    let Some(s) = path.to_str() else {
        return path.to_path_buf();
    };
    if s == "~" {
        return dirs::home_dir().unwrap_or_else(|| path.to_path_buf());
    }
    if let Some(rest) = s.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

/// Map an ffprobe report into the local metadata shape. Absent fields default to
/// 0 / "Unknown".
fn local_metadata_from_value(v: &Value, title: String) -> LocalMetadata {
    let fmt = &v["format"];
    let duration_seconds = fmt["duration"]
        .as_str()
        .and_then(|d| d.parse::<f64>().ok())
        .or_else(|| fmt["duration"].as_f64())
        .unwrap_or(0.0);
    let size_bytes = fmt["size"]
        .as_str()
        .and_then(|s| s.parse::<u64>().ok())
        .or_else(|| fmt["size"].as_u64())
        .unwrap_or(0);

    LocalMetadata {
        title,
        duration_seconds,
        format: fmt["format_long_name"].as_str().unwrap_or("Unknown").to_string(),
        size_bytes,
        streams: v["streams"].as_array().map(|s| s.len()).unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_missing_file_reports_resolved_path() {
        let err = resolve_path(Path::new("/nonexistent/dir/video.mp4")).unwrap_err();
        match err {
            SummarizerError::FileNotFound(p) => {
                assert_eq!(p, PathBuf::from("/nonexistent/dir/video.mp4"));
            }
            other => panic!("expected FileNotFound, got: {other}"),
        }
    }

    #[test]
    fn test_resolve_existing_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("clip.mp4");
        fs_err::write(&file, b"x").unwrap();

        let resolved = resolve_path(&file).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.exists());
    }

    #[test]
    fn test_relative_path_resolves_against_cwd() {
        let err = resolve_path(Path::new("no-such-file.mp4")).unwrap_err();
        match err {
            SummarizerError::FileNotFound(p) => assert!(p.is_absolute()),
            other => panic!("expected FileNotFound, got: {other}"),
        }
    }

    #[test]
    fn test_ffprobe_mapping() {
        let v = json!({
            "format": {
                "duration": "63.5",
                "format_long_name": "QuickTime / MOV",
                "size": "1048576",
            },
            "streams": [{"codec_type": "video"}, {"codec_type": "audio"}],
        });
        let m = local_metadata_from_value(&v, "clip.mov".to_string());
        assert_eq!(m.title, "clip.mov");
        assert_eq!(m.duration_seconds, 63.5);
        assert_eq!(m.format, "QuickTime / MOV");
        assert_eq!(m.size_bytes, 1048576);
        assert_eq!(m.streams, 2);
    }

    #[test]
    fn test_ffprobe_mapping_defaults() {
        let m = local_metadata_from_value(&json!({}), "x.mp4".to_string());
        assert_eq!(m.duration_seconds, 0.0);
        assert_eq!(m.format, "Unknown");
        assert_eq!(m.size_bytes, 0);
        assert_eq!(m.streams, 0);
    }
}
