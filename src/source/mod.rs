use std::path::PathBuf;
use url::Url;

/// Hosts recognized as YouTube. Anything else is treated as a local path.
const YOUTUBE_HOSTS: &[&str] = &["youtube.com", "www.youtube.com", "youtu.be", "m.youtube.com"];

/// Where a video lives: a recognized remote hosting site or the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSource {
    /// A YouTube URL, accessed only through yt-dlp
    Remote(String),

    /// A path on the invoking machine
    Local(PathBuf),
}

impl VideoSource {
    /// Classify an input string as a remote URL or local path.
    ///
    /// Pure and total: malformed URLs, missing hosts, and unrecognized domains all
    /// classify as `Local`.
    pub fn classify(input: &str) -> Self {
        match Url::parse(input) {
            Ok(url) => match url.host_str() {
                Some(host) if YOUTUBE_HOSTS.contains(&host) => {
                    VideoSource::Remote(input.to_string())
                }
                _ => VideoSource::Local(PathBuf::from(input)),
            },
            Err(_) => VideoSource::Local(PathBuf::from(input)),
        }
    }
}
