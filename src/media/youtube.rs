use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

use super::{find_audio_file, RemoteMetadata, TempAudio};
use crate::process::run_tool;
use crate::subtitles::{clean_vtt, SubtitleOutcome};
use crate::{Result, SummarizerError};

/// yt-dlp wrapper: metadata, caption extraction, and audio download for hosted
/// videos. Never touches the network directly.
pub struct YoutubeClient {
    yt_dlp_path: String,
}

impl YoutubeClient {
    pub fn new<S: Into<String>>(yt_dlp_path: S) -> Self {
        Self {
            yt_dlp_path: yt_dlp_path.into(),
        }
    }

    /// Fetch video metadata without downloading any media.
    pub async fn fetch_metadata(&self, url: &str) -> Result<RemoteMetadata> {
        let out = run_tool(
            &self.yt_dlp_path,
            ["--dump-json", "--no-download", url],
        )
        .await?;

        if !out.success() {
            return Err(SummarizerError::ExternalTool {
                tool: "yt-dlp".to_string(),
                stderr: out.stderr,
            });
        }

        let value: Value = serde_json::from_str(out.stdout.trim()).map_err(|e| {
            SummarizerError::UnparseableOutput {
                tool: "yt-dlp".to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(remote_metadata_from_value(&value))
    }

    /// Try to fetch existing or auto-generated captions for `language`.
    ///
    /// This is the one place a tool failure is absorbed: any problem here is logged
    /// and reported as `NotAvailable`, which sends the orchestrator down the
    /// audio-download path instead.
    pub async fn try_subtitles(&self, url: &str, language: &str) -> SubtitleOutcome {
        let tmpdir = match TempDir::with_prefix("vs-subs-") {
            Ok(d) => d,
            Err(e) => {
                tracing::warn!("Subtitle extraction skipped, no temp dir: {}", e);
                return SubtitleOutcome::NotAvailable;
            }
        };
        let out_template = tmpdir.path().join("subs");

        let args: Vec<String> = vec![
            "--write-subs".into(),
            "--write-auto-subs".into(),
            "--sub-lang".into(),
            language.into(),
            "--sub-format".into(),
            "vtt".into(),
            "--skip-download".into(),
            "-o".into(),
            out_template.to_string_lossy().into_owned(),
            url.into(),
        ];
        let result = run_tool(&self.yt_dlp_path, args).await;

        match result {
            Ok(out) if out.success() => {}
            Ok(out) => {
                tracing::warn!("Subtitle extraction failed: {}", out.stderr.trim());
                return SubtitleOutcome::NotAvailable;
            }
            Err(e) => {
                tracing::warn!("Subtitle extraction failed: {}", e);
                return SubtitleOutcome::NotAvailable;
            }
        }

        match find_subtitle_file(tmpdir.path()) {
            Some(path) => {
                tracing::debug!("Found subtitle file: {}", path.display());
                match fs_err::read_to_string(&path) {
                    Ok(vtt) => SubtitleOutcome::Found(clean_vtt(&vtt)),
                    Err(e) => {
                        tracing::warn!("Could not read subtitle file: {}", e);
                        SubtitleOutcome::NotAvailable
                    }
                }
            }
            None => SubtitleOutcome::NotAvailable,
        }
    }

    /// Download the audio track as 16kHz mono WAV into a fresh private temp dir.
    ///
    /// yt-dlp emits one JSON object per line on stdout; the first line that parses
    /// supplies the title/duration carried into the transcript metadata.
    pub async fn download_audio(&self, url: &str) -> Result<AudioDownload> {
        let tmpdir = TempDir::with_prefix("vs-audio-")?;
        let out_template = tmpdir.path().join("audio.%(ext)s");

        let args: Vec<String> = vec![
            "-x".into(),
            "--audio-format".into(),
            "wav".into(),
            "--audio-quality".into(),
            "0".into(),
            "--postprocessor-args".into(),
            "ffmpeg:-ar 16000 -ac 1".into(),
            "-o".into(),
            out_template.to_string_lossy().into_owned(),
            "--dump-json".into(),
            url.into(),
        ];
        let out = run_tool(&self.yt_dlp_path, args).await?;

        if !out.success() {
            return Err(SummarizerError::ExternalTool {
                tool: "yt-dlp".to_string(),
                stderr: out.stderr,
            });
        }

        let (title, duration_seconds) = first_json_line(&out.stdout)
            .map(|v| {
                (
                    v["title"].as_str().map(|s| s.to_string()),
                    v["duration"].as_f64(),
                )
            })
            .unwrap_or((None, None));

        let audio_path = find_audio_file(tmpdir.path())?;
        Ok(AudioDownload {
            audio: TempAudio::new(tmpdir, audio_path),
            title,
            duration_seconds,
        })
    }
}

/// A downloaded audio track plus the metadata yt-dlp reported alongside it.
#[derive(Debug)]
pub struct AudioDownload {
    pub audio: TempAudio,
    pub title: Option<String>,
    pub duration_seconds: Option<f64>,
}

/// Map a yt-dlp `--dump-json` object into the remote metadata shape. Missing or
/// empty fields fall back to "Unknown" / null.
fn remote_metadata_from_value(v: &Value) -> RemoteMetadata {
    let channel = v["channel"]
        .as_str()
        .filter(|s| !s.is_empty())
        .or_else(|| v["uploader"].as_str())
        .unwrap_or("Unknown");
    let format = v["format_note"]
        .as_str()
        .filter(|s| !s.is_empty())
        .or_else(|| v["format"].as_str())
        .unwrap_or("Unknown");

    RemoteMetadata {
        title: v["title"].as_str().unwrap_or("Unknown").to_string(),
        duration_seconds: v["duration"].as_f64(),
        channel: channel.to_string(),
        upload_date: v["upload_date"].as_str().map(|s| s.to_string()),
        view_count: v["view_count"].as_u64(),
        description: truncate_chars(v["description"].as_str().unwrap_or(""), 500),
        format: format.to_string(),
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// First line of stdout that parses as JSON; malformed lines are skipped.
fn first_json_line(stdout: &str) -> Option<Value> {
    stdout
        .lines()
        .find_map(|line| serde_json::from_str::<Value>(line).ok())
}

fn find_subtitle_file(dir: &Path) -> Option<std::path::PathBuf> {
    fs_err::read_dir(dir)
        .ok()?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .find(|p| p.extension().map(|e| e == "vtt").unwrap_or(false))
}
