//! Integration tests for the screen, cursor and color subcommands

use super::helpers::{fast_config, run_ansiout};

#[test]
fn clear_emits_erase_then_home() {
    let (stdout, _stderr, exit_code) = run_ansiout(&["clear"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "\x1b[2J\x1b[1;1H");
}

#[test]
fn clear_line_emits_erase_line() {
    let (stdout, _stderr, exit_code) = run_ansiout(&["clear-line"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "\x1b[2K");
}

#[test]
fn move_to_writes_row_first() {
    let (stdout, _stderr, exit_code) = run_ansiout(&["move-to", "10", "3"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "\x1b[3;10H");
}

#[test]
fn relative_moves() {
    let test_cases = [
        ("up", "\x1b[2A"),
        ("down", "\x1b[2B"),
        ("right", "\x1b[2C"),
        ("left", "\x1b[2D"),
    ];

    for (command, expected) in test_cases {
        let (stdout, _stderr, exit_code) = run_ansiout(&[command, "2"]);
        assert_eq!(exit_code, 0, "{} failed", command);
        assert_eq!(stdout, expected, "{} output", command);
    }
}

#[test]
fn save_restore_and_reset() {
    assert_eq!(run_ansiout(&["save"]).0, "\x1b[s");
    assert_eq!(run_ansiout(&["restore"]).0, "\x1b[u");
    assert_eq!(run_ansiout(&["reset"]).0, "\x1b[0m");
}

#[test]
fn default_colors_emit_nothing() {
    let (stdout, _stderr, exit_code) = run_ansiout(&["color", "7", "0"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.is_empty());
}

#[test]
fn write_at_moves_then_prints() {
    let (stdout, _stderr, exit_code) = run_ansiout(&["write-at", "4", "2", "hi"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "\x1b[2;4Hhi");
}

#[test]
fn snapshot_print_colors() {
    let mut output = String::new();
    for (fg, bg) in [("1", "0"), ("12", "0"), ("7", "9"), ("15", "6")] {
        let (stdout, _stderr, exit_code) = run_ansiout(&["print", fg, bg, "x"]);
        output.push_str(&format!("print {} {} -> {} {:?}\n", fg, bg, exit_code, stdout));
    }
    insta::assert_snapshot!("print_colors", output);
}

#[test]
fn aixterm_config_switches_bright_background() {
    let (_dir, config) = fast_config("bright_background = \"aixterm\"\n");
    let config = config.to_str().unwrap();
    let (stdout, _stderr, exit_code) = run_ansiout(&["print", "7", "9", "x", "--config", config]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "\x1b[0;37;104mx");
}

#[test]
fn wait_draws_spinner_frames() {
    let (_dir, config) = fast_config("");
    let config = config.to_str().unwrap();
    let (stdout, _stderr, exit_code) = run_ansiout(&["wait", "1", "--config", config]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "|\x08/\x08-\x08\\\x08");
}
