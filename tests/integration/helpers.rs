//! Shared helpers for integration tests

use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Run the ansiout binary and capture (stdout, stderr, exit code).
pub fn run_ansiout(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_ansiout"))
        .args(args)
        .env_remove("ANSIOUT_LOG")
        .output()
        .expect("Failed to execute ansiout");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Write `content` to `name` inside a fresh temp directory.
///
/// Keep the returned `TempDir` alive for as long as the file is needed.
pub fn temp_file(name: &str, content: &[u8]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("Failed to create temp file");
    file.write_all(content).expect("Failed to write temp file");
    (dir, path)
}

/// Config file that makes the spinner run without pausing.
pub fn fast_config(extra: &str) -> (TempDir, PathBuf) {
    let content = format!("spinner_interval_ms = 0\n{}", extra);
    temp_file("ansiout.toml", content.as_bytes())
}
