//! CLI compare integration tests
//!
//! These tests run the built `trackdiff` binary against track files written
//! into temporary directories.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

const SOURCE: &str = "\
[suite.cpp:10] s-suite
[suite.cpp:12] c-check [00000000000000a1] r-1-0-0
[suite.cpp:14] c-check [00000000000000a2] r-0-1-0
[suite.cpp:20] c-with_summary [00000000000000a3] r-5-0-0
";

const TARGET: &str = "\
[suite.cpp:10] s-suite
[suite.cpp:12] c-check [00000000000000a1] r-0-1-0
[suite.cpp:14] c-check [00000000000000a2] r-1-0-0
[suite.cpp:20] c-with_summary [00000000000000a3] r-6-0-0
";

fn write_tracks(temp_dir: &TempDir, source: &str, target: &str) -> (PathBuf, PathBuf) {
    let source_path = temp_dir.path().join("source.track");
    let target_path = temp_dir.path().join("target.track");
    fs::write(&source_path, source).unwrap();
    fs::write(&target_path, target).unwrap();
    (source_path, target_path)
}

fn run(args: &[&str]) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_trackdiff");
    Command::new(cli_bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI")
}

#[test]
fn test_cli_missing_arguments_exits_one() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(1));

    let temp_dir = TempDir::new().unwrap();
    let (source, _) = write_tracks(&temp_dir, SOURCE, TARGET);
    let output = run(&[source.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_cli_help_exits_zero() {
    let output = run(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--min-length"));
}

#[test]
fn test_cli_text_report_black_and_white() {
    let temp_dir = TempDir::new().unwrap();
    let (source, target) = write_tracks(&temp_dir, SOURCE, TARGET);

    let output = run(&[
        "--bw",
        "--width",
        "0",
        source.to_str().unwrap(),
        target.to_str().unwrap(),
    ]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Track evolution: 4 -> 4 elements, 3 changes\n"));
    assert!(stdout.contains("Edit script: m4:0.\n"));
    assert!(stdout.contains("== Good -> Wrong (1)\n"));
    assert!(stdout.contains("== Wrong -> Good (1)\n"));
    assert!(stdout.contains("== Data changed (1)\n"));
    assert!(!stdout.contains('\x1b'));
}

#[test]
fn test_cli_text_report_colour_by_default() {
    let temp_dir = TempDir::new().unwrap();
    let (source, target) = write_tracks(&temp_dir, SOURCE, TARGET);

    let output = run(&[source.to_str().unwrap(), target.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\x1b[31m"));
}

#[test]
fn test_cli_width_limits_lines() {
    let temp_dir = TempDir::new().unwrap();
    let (source, target) = write_tracks(&temp_dir, SOURCE, TARGET);

    let output = run(&[
        "--bw",
        "--width",
        "24",
        source.to_str().unwrap(),
        target.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for line in stdout.lines() {
        assert!(line.chars().count() <= 24, "line too wide: {}", line);
    }
}

#[test]
fn test_cli_unchanged_tracks() {
    let temp_dir = TempDir::new().unwrap();
    let (source, target) = write_tracks(&temp_dir, SOURCE, SOURCE);

    let output = run(&["--bw", source.to_str().unwrap(), target.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No semantic changes detected."));
}

#[test]
fn test_cli_json_report() {
    let temp_dir = TempDir::new().unwrap();
    let (source, target) = write_tracks(&temp_dir, SOURCE, TARGET);

    let output = run(&[
        "--format",
        "json",
        "--log-profile",
        "production",
        source.to_str().unwrap(),
        target.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["edit_script"], "m4:0.");
    assert_eq!(report["source_len"], 4);
    assert_eq!(report["target_len"], 4);
    assert_eq!(report["summary"]["good_to_wrong"].as_array().unwrap().len(), 1);
}

#[test]
fn test_cli_min_length_changes_script() {
    let temp_dir = TempDir::new().unwrap();
    let source = "c-check [0000000000000001] r-1-0-0\nc-check [0000000000000002] r-1-0-0\n";
    let target = "c-check [0000000000000002] r-1-0-0\n";
    let (source, target) = write_tracks(&temp_dir, source, target);

    let output = run(&[
        "--format",
        "json",
        "--min-length",
        "2",
        source.to_str().unwrap(),
        target.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["edit_script"], "w1.");
}

#[test]
fn test_cli_malformed_track_exits_one() {
    let temp_dir = TempDir::new().unwrap();
    let (source, target) = write_tracks(&temp_dir, SOURCE, "c-check [00000000000000zz] r-1-0-0\n");

    let output = run(&[source.to_str().unwrap(), target.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_MALFORMED_TRACK"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_missing_file_exits_one() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.track");

    let output = run(&[missing.to_str().unwrap(), missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_IO"), "stderr: {}", stderr);
}
