use std::process::Stdio;
use tokio::process::Command;

use crate::{Result, SummarizerError};

/// Captured result of one external tool invocation.
#[derive(Debug)]
pub struct ToolOutput {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Run an external tool to completion and capture its output as text.
///
/// The full command line is logged to the diagnostic stream before spawning.
/// Output parsing is the caller's job; a non-zero exit is not an error at this
/// layer. No timeout is enforced: a hung tool blocks the invocation (the log line
/// makes the hang attributable).
pub async fn run_tool<I, S>(program: &str, args: I) -> Result<ToolOutput>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    tracing::debug!("Running: {} {}", program, args.join(" "));

    let output = Command::new(program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| SummarizerError::ExternalTool {
            tool: program.to_string(),
            stderr: format!("failed to start: {e}"),
        })?;

    Ok(ToolOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}
