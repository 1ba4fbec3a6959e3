//! Integration tests for the chatcloud CLI.

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{write_file, SAMPLE_TRANSCRIPT};

/// Run chatcloud and capture output.
fn run_chatcloud(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_chatcloud"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute chatcloud");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

// ============================================================================
// Help and Argument Handling
// ============================================================================

#[test]
fn help_exits_0_and_shows_usage() {
    let (stdout, _stderr, exit_code) = run_chatcloud(&["--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Usage"));
    assert!(stdout.contains("--min-word-length"));
    assert!(stdout.contains("--block-words"));
}

#[test]
fn no_arguments_shows_error() {
    let (_stdout, stderr, exit_code) = run_chatcloud(&[]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("required arguments"));
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn unsupported_source_type_lists_supported_ones() {
    let dir = TempDir::new().unwrap();
    let transcript = write_file(dir.path(), "chat.txt", SAMPLE_TRANSCRIPT);

    Command::new(env!("CARGO_BIN_EXE_chatcloud"))
        .args([transcript.to_str().unwrap(), "telegram"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported source type"))
        .stderr(predicate::str::contains("whatsapp"));
}

#[test]
fn missing_transcript_file_names_the_path() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.txt");

    let (_stdout, stderr, exit_code) =
        run_chatcloud(&[missing.to_str().unwrap(), "whatsapp"]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("nope.txt"));
}

// ============================================================================
// End-to-end Runs
// ============================================================================

#[test]
fn writes_frequency_table_to_output_dir() {
    let dir = TempDir::new().unwrap();
    let transcript = write_file(dir.path(), "chat.txt", SAMPLE_TRANSCRIPT);
    let out_dir = dir.path().join("out");

    let (stdout, _stderr, exit_code) = run_chatcloud(&[
        transcript.to_str().unwrap(),
        "whatsapp",
        "--output",
        out_dir.to_str().unwrap(),
    ]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("hello"));

    let json = fs::read_to_string(out_dir.join("frequencies.json")).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&json).unwrap();
    let rows = rows.as_array().unwrap();

    let hello = rows
        .iter()
        .find(|row| row["token"] == "hello")
        .expect("'hello' should be counted");
    assert_eq!(hello["count"], 3);

    // The URL must have been stripped before counting.
    assert!(rows.iter().all(|row| row["token"] != "example"));
}

#[test]
fn block_words_file_excludes_tokens() {
    let dir = TempDir::new().unwrap();
    let transcript = write_file(dir.path(), "chat.txt", SAMPLE_TRANSCRIPT);
    let block = write_file(dir.path(), "block.txt", "hello\n");
    let out_dir = dir.path().join("out");

    let (stdout, _stderr, exit_code) = run_chatcloud(&[
        transcript.to_str().unwrap(),
        "whatsapp",
        "--block-words",
        block.to_str().unwrap(),
        "--output",
        out_dir.to_str().unwrap(),
    ]);

    assert_eq!(exit_code, 0);
    assert!(!stdout.contains("hello"));

    let json = fs::read_to_string(out_dir.join("frequencies.json")).unwrap();
    assert!(!json.contains("\"hello\""));
}

#[test]
fn missing_block_words_file_is_not_fatal() {
    let dir = TempDir::new().unwrap();
    let transcript = write_file(dir.path(), "chat.txt", SAMPLE_TRANSCRIPT);
    let out_dir = dir.path().join("out");

    let (_stdout, _stderr, exit_code) = run_chatcloud(&[
        transcript.to_str().unwrap(),
        "whatsapp",
        "--block-words",
        dir.path().join("absent.txt").to_str().unwrap(),
        "--output",
        out_dir.to_str().unwrap(),
    ]);

    assert_eq!(exit_code, 0);
    assert!(out_dir.join("frequencies.json").exists());
}

#[test]
fn max_words_limits_table_size() {
    let dir = TempDir::new().unwrap();
    let transcript = write_file(dir.path(), "chat.txt", SAMPLE_TRANSCRIPT);
    let out_dir = dir.path().join("out");

    let (_stdout, _stderr, exit_code) = run_chatcloud(&[
        transcript.to_str().unwrap(),
        "whatsapp",
        "--max-words",
        "2",
        "--output",
        out_dir.to_str().unwrap(),
    ]);

    assert_eq!(exit_code, 0);

    let json = fs::read_to_string(out_dir.join("frequencies.json")).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 2);
}
