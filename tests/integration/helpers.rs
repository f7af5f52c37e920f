//! Shared helpers for integration tests

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Directory holding the story fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Path to a fixture file.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Read a fixture file into a string.
pub fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixture(name)).expect("Failed to read fixture")
}

/// Copy a fixture into a fresh temp dir. Keep the `TempDir` alive while the
/// path is in use.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::copy(fixture(name), &path).expect("Failed to copy fixture");
    (temp_dir, path)
}

/// Build a branchplay command isolated from the user's configuration.
pub fn branchplay(config_home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_branchplay"));
    cmd.env("NO_COLOR", "1")
        .env("HOME", config_home.path())
        .env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("BRANCHPLAY_LOG");
    cmd
}

/// Run branchplay and capture (stdout, stderr, exit code).
pub fn run_branchplay(args: &[&str]) -> (String, String, i32) {
    let config_home = TempDir::new().expect("Failed to create temp dir");
    let output = branchplay(&config_home)
        .args(args)
        .output()
        .expect("Failed to execute branchplay");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}
