//! Command-line tests for the framecut binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn framecut() -> Command {
    let mut cmd = Command::cargo_bin("framecut").unwrap();
    cmd.env_remove("FRAMECUT_CONFIG")
        .env_remove("FRAMECUT_OUTPUT_DIR")
        .env_remove("FRAMECUT_TOOL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help() {
    framecut()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--mode"))
        .stdout(predicate::str::contains("--script"))
        .stdout(predicate::str::contains("<VIDEO>"));
}

#[test]
fn test_video_argument_required() {
    framecut().assert().failure();
}

#[test]
fn test_missing_video_fails() {
    let temp_dir = TempDir::new().unwrap();

    framecut()
        .current_dir(temp_dir.path())
        .arg("missing.mp4")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No file missing.mp4"));

    // The output directory is prepared before the video is opened
    assert!(temp_dir.path().join("output").is_dir());
}

#[test]
fn test_invalid_mode_fails() {
    let temp_dir = TempDir::new().unwrap();

    framecut()
        .current_dir(temp_dir.path())
        .args(["--mode", "gifs", "clip.mp4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid mode: gifs"));
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("framecut.toml"), "[keys]\nquit = \"s\"\n").unwrap();

    framecut()
        .current_dir(temp_dir.path())
        .arg("clip.mp4")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Key bindings must be distinct"));
}
