//! Integration tests for argument handling and configuration

use super::helpers::{run_ansiout, temp_file};

#[test]
fn help_lists_subcommands() {
    let (stdout, _stderr, exit_code) = run_ansiout(&["--help"]);

    assert_eq!(exit_code, 0);
    for command in ["clear", "move-to", "print", "cat", "wait", "where"] {
        assert!(stdout.contains(command), "help is missing {}", command);
    }
}

#[test]
fn no_subcommand_is_usage_error() {
    let (_stdout, stderr, exit_code) = run_ansiout(&[]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("Usage"));
}

#[test]
fn foreground_out_of_range_is_rejected() {
    let (stdout, _stderr, exit_code) = run_ansiout(&["color", "16", "0"]);

    assert_eq!(exit_code, 2);
    assert!(stdout.is_empty());
}

#[test]
fn invalid_config_is_reported() {
    let (_dir, path) = temp_file("bad.toml", b"spinner_interval_ms = \"fast\"\n");
    let (stdout, stderr, exit_code) = run_ansiout(&["clear", "--config", path.to_str().unwrap()]);

    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Invalid config"));
}

#[test]
fn missing_config_is_reported() {
    let (_stdout, stderr, exit_code) =
        run_ansiout(&["clear", "--config", "/nonexistent/ansiout.toml"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Failed to read config"));
}

#[test]
fn completions_generate_script() {
    let (stdout, _stderr, exit_code) = run_ansiout(&["completions", "bash"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("ansiout"));
}
