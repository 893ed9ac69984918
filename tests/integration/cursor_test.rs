//! Integration tests for the where command (cursor position query)

use assert_cmd::Command;
use predicates::prelude::*;

use super::helpers::temp_file;

fn ansiout() -> Command {
    let mut cmd = Command::cargo_bin("ansiout").expect("binary should build");
    cmd.env_remove("ANSIOUT_LOG");
    cmd
}

#[test]
fn where_reports_reply_from_stdin() {
    ansiout()
        .args(["where", "--no-raw"])
        .write_stdin("\x1b[12;34R")
        .assert()
        .success()
        .stdout("\x1b[6n12;34\n");
}

#[test]
fn where_skips_stray_input_before_reply() {
    ansiout()
        .args(["where", "--no-raw"])
        .write_stdin("q\x1b[3;1R")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("3;1\n"));
}

#[test]
fn where_rejects_malformed_reply() {
    ansiout()
        .args(["where", "--no-raw"])
        .write_stdin("\x1b[12R")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed cursor position reply"));
}

#[test]
fn where_fails_when_input_closes_early() {
    ansiout()
        .args(["where", "--no-raw"])
        .write_stdin("\x1b[1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("closed"));
}

#[test]
fn where_ctrl_c_key_cancels() {
    let (_dir, config) = temp_file("slow.toml", b"cursor_timeout_ms = 60000\n");
    ansiout()
        .args(["where", "--no-raw", "--config", config.to_str().unwrap()])
        .write_stdin("\x03")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cancelled"));
}
