//! Integration tests for the transaction-reporter binary.
//!
//! These tests run the actual binary and check exit codes, stdout and stderr.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::io::Write;
use tempfile::NamedTempFile;

const SAMPLE: &str = "tests/fixtures/sample/input.csv";

fn reporter() -> Command {
    Command::cargo_bin("transaction-reporter").unwrap()
}

#[test]
fn test_default_text_output() {
    let expected = std::fs::read_to_string("tests/fixtures/sample/expected.txt").unwrap();

    reporter()
        .arg(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::eq(expected));
}

#[test]
fn test_json_output() {
    let assert = reporter()
        .args([SAMPLE, "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 1);

    let parsed: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["summary"]["total_rows"], 5);
    assert_eq!(parsed["summary"]["completed"], 4);
    assert_eq!(parsed["summary"]["failed"], 1);
    assert_eq!(parsed["summary"]["sum_completed_amount"], 3000);
    assert_eq!(parsed["summary"]["avg_amount"], 600.0);
    assert_eq!(parsed["observability"]["rows_read"], 5);
    assert_eq!(parsed["observability"]["invalid_amounts"], 1);
    assert!(parsed["observability"]["duration_seconds"].as_f64().unwrap() >= 0.0);
}

#[test]
fn test_pretty_json_output() {
    reporter()
        .args([SAMPLE, "-f", "json", "--pretty"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\n  \"observability\": {"));
}

#[test]
fn test_verbose_prints_diagnostics() {
    reporter()
        .args([SAMPLE, "--verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "# diagnostics: rows_read=5 invalid_amounts=1 duration_s=",
        ))
        .stdout(predicate::str::starts_with("Transaction report:\n"));
}

#[test]
fn test_semicolon_delimiter() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "status;amount_cents\ncompleted;100\nfailed;50\n").unwrap();
    file.flush().unwrap();

    reporter()
        .arg(file.path())
        .args(["--delimiter", ";"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sum_completed_amount: 100\n"))
        .stdout(predicate::str::contains("avg_amount: 75.0\n"));
}

#[test]
fn test_missing_file_exit_code() {
    reporter()
        .arg("nonexistent.csv")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: file not found: nonexistent.csv"));
}

#[test]
fn test_directory_exit_code() {
    let dir = tempfile::tempdir().unwrap();

    reporter()
        .arg(dir.path())
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: file not found"));
}

#[test]
fn test_tiny_average_text_and_json() {
    let mut content = String::from("status,amount_cents\ncompleted,1\n");
    content.push_str(&"failed,0\n".repeat(99_999));
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();

    reporter()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::ends_with("  avg_amount: 1e-05\n"));

    reporter()
        .arg(file.path())
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"avg_amount\":1e-05"));
}

#[test]
fn test_empty_file_exit_code() {
    let file = NamedTempFile::new().unwrap();

    reporter()
        .arg(file.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no header row"));
}

#[test]
fn test_decode_failure_exit_code() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"status,amount_cents\ncompleted,1\n\xff,2\n")
        .unwrap();
    file.flush().unwrap();

    reporter()
        .arg(file.path())
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error while processing"));
}

#[test]
fn test_missing_argument_exit_code() {
    reporter().assert().code(1);
}

#[test]
fn test_unknown_format_exit_code() {
    reporter().args([SAMPLE, "--format", "xml"]).assert().code(1);
}
