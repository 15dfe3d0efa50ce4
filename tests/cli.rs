//! End-to-end CLI tests that require none of the external tools: they exercise the
//! boundary validation and error-wrapping paths, which short-circuit before any
//! subprocess is spawned.

use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    Command::cargo_bin("video-summarizer").unwrap()
}

#[test]
fn test_help_lists_both_operations() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("transcribe"))
        .stdout(predicate::str::contains("info"));
}

#[test]
fn test_invalid_model_returns_error_payload() {
    bin()
        .args(["transcribe", "https://youtu.be/abc", "--model", "huge"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"error":"Invalid model 'huge'. Choose from: tiny, base, small, medium, large"}"#,
        ));
}

#[test]
fn test_transcribe_missing_local_file_reports_resolved_path() {
    bin()
        .args(["transcribe", "/nonexistent/dir/clip.mp4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File not found"))
        .stdout(predicate::str::contains("/nonexistent/dir/clip.mp4"));
}

#[test]
fn test_info_missing_local_file_reports_resolved_path() {
    let output = bin()
        .args(["info", "/nonexistent/dir/clip.mp4"])
        .assert()
        .success()
        .get_output()
        .clone();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    let msg = v["error"].as_str().unwrap();
    assert!(msg.starts_with("File not found: "), "unexpected: {msg}");
    assert!(msg.contains("/nonexistent/dir/clip.mp4"));
}

#[test]
fn test_missing_source_argument_is_a_usage_error() {
    bin().arg("transcribe").assert().failure();
}

#[test]
fn test_invalid_model_skips_dependency_probes() {
    // With every tool misconfigured, a verbose run would warn about each of
    // them; the default fast-reject path must not probe at all.
    let dir = tempfile::tempdir().unwrap();
    fs_err::write(
        dir.path().join("config.yaml"),
        "tools:\n  yt_dlp: missing-a\n  ffmpeg: missing-b\n  ffprobe: missing-c\n  whisper: missing-d\n",
    )
    .unwrap();

    bin()
        .current_dir(dir.path())
        .args(["transcribe", "https://youtu.be/abc", "--model", "huge"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid model 'huge'"))
        .stderr(predicate::str::contains("Missing tool").not());
}
