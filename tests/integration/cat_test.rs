//! Integration tests for the cat command (PrintFile)

use super::helpers::{run_ansiout, temp_file};

#[test]
fn cat_prints_lines_then_blank_line() {
    let (_dir, path) = temp_file("abc.txt", b"a\nb\nc\n");
    let (stdout, stderr, exit_code) = run_ansiout(&["cat", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert_eq!(stdout, "a\nb\nc\n\n");
}

#[test]
fn cat_handles_missing_final_newline() {
    let (_dir, path) = temp_file("abc.txt", b"a\nb\nc");
    let (stdout, _stderr, exit_code) = run_ansiout(&["cat", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "a\nb\nc\n\n");
}

#[test]
fn cat_missing_file_fails_without_output() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("missing.txt");
    let (stdout, stderr, exit_code) = run_ansiout(&["cat", path.to_str().unwrap()]);

    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("error opening file"));
    assert!(stderr.contains("missing.txt"));
}

#[test]
fn cat_no_arguments_shows_error() {
    let (_stdout, stderr, exit_code) = run_ansiout(&["cat"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("<FILE>"));
}
