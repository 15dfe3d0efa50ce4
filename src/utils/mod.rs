use tokio::process::Command;

use crate::Config;

/// Check that the configured external tools are reachable. Returns a description
/// of each missing tool; callers warn rather than fail, since a given invocation
/// may never need the missing one.
pub async fn check_dependencies(config: &Config) -> Vec<String> {
    let mut missing = Vec::new();

    if !check_command_available(&config.tools.yt_dlp).await {
        missing.push(format!("{} - required for YouTube sources", config.tools.yt_dlp));
    }
    if !check_command_available(&config.tools.ffmpeg).await {
        missing.push(format!(
            "{} - required for local audio extraction",
            config.tools.ffmpeg
        ));
    }
    if !check_command_available(&config.tools.ffprobe).await {
        missing.push(format!("{} - required for local metadata", config.tools.ffprobe));
    }
    if !check_command_available(&config.tools.whisper).await {
        missing.push(format!(
            "{} - required when no subtitles are available",
            config.tools.whisper
        ));
    }

    missing
}

/// Check if a command is available in PATH
async fn check_command_available(command: &str) -> bool {
    Command::new(command)
        .arg("--version")
        .output()
        .await
        .map(|output| output.status.success())
        .unwrap_or(false)
}
