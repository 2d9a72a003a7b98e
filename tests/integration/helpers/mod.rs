//! Shared helpers for CLI integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Path to a fixture file
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Load a fixture file's contents
pub fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixture(name)).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// The cstrip binary with colors off and no user config in play.
///
/// `HOME` points into `home` so a real `~/.config/cstrip/config.toml` is never read.
pub fn cstrip(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cstrip").expect("cstrip binary should be built");
    cmd.env("NO_COLOR", "1")
        .env("HOME", home)
        .env_remove("CSTRIP_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write `content` to `name` inside `dir` and return its path
pub fn write_source(dir: &TempDir, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write source file");
    path
}
