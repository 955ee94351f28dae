//! Integration tests for the `dk` CLI.
//!
//! Each test runs `dk` as a subprocess. Everything here works without a
//! live server: help output, config errors, and connection failures.

use std::path::PathBuf;
use std::process::Command;

/// Get the path to the built `dk` binary.
fn dk_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("dk");
    path
}

/// An empty config file so tests never pick up a real user config.
fn empty_config() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "").unwrap();
    (dir, path)
}

#[test]
fn help_names_the_surfaces() {
    let output = Command::new(dk_bin()).arg("--help").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("docket"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("tag"));
}

#[test]
fn unknown_subcommand_fails() {
    let output = Command::new(dk_bin()).arg("frobnicate").output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn list_without_session_is_a_config_error() {
    let (_dir, config) = empty_config();
    let output = Command::new(dk_bin())
        .args(["--config"])
        .arg(&config)
        .arg("list")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("session"), "stderr was: {stderr}");
}

#[test]
fn unreachable_server_reports_an_error() {
    let (_dir, config) = empty_config();
    let output = Command::new(dk_bin())
        .args(["--server", "http://127.0.0.1:1", "--session", "1"])
        .args(["--config"])
        .arg(&config)
        .arg("list")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error"), "stderr was: {stderr}");
}

#[test]
fn missing_explicit_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let output = Command::new(dk_bin())
        .args(["--config"])
        .arg(&missing)
        .arg("tags")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot read"), "stderr was: {stderr}");
}
