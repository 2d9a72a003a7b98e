//! Integration tests for config file handling in the CLI

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{cstrip, write_source};

#[test]
fn test_config_flag_allows_advisory_control_chars() {
    let temp = TempDir::new().unwrap();
    let config = write_source(&temp, "cfg.toml", "[cleaner]\ncontrol_chars_abort = false\n");
    let input = write_source(&temp, "a.c", "x;  // c\n\u{01}y;\n");
    let output = temp.path().join("a.min.c");

    cstrip(temp.path())
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .arg("-o")
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("U+0001 on line 2"))
        .stderr(predicate::str::contains("withheld").not())
        .stdout(predicate::str::contains("No errors found").not());

    assert_eq!(fs::read_to_string(&output).unwrap(), "x;\n\u{01}y;\n");
}

#[test]
fn test_config_from_environment_variable() {
    let temp = TempDir::new().unwrap();
    let config = write_source(&temp, "cfg.toml", "[output]\nshow_info = false\n");
    let input = write_source(&temp, "a.c", "x;\n");

    cstrip(temp.path())
        .env("CSTRIP_CONFIG", &config)
        .arg(&input)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("[INFO]").not());
}

#[test]
fn test_default_config_location_under_home() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".config").join("cstrip");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "[output]\nshow_info = false\n").unwrap();
    let input = write_source(&temp, "a.c", "x;\n");

    cstrip(temp.path())
        .arg(&input)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("[INFO]").not());
}

#[test]
fn test_missing_explicit_config_exits_two() {
    let temp = TempDir::new().unwrap();
    let input = write_source(&temp, "a.c", "x;\n");

    cstrip(temp.path())
        .arg(&input)
        .arg("--config")
        .arg(temp.path().join("absent.toml"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_malformed_config_exits_two() {
    let temp = TempDir::new().unwrap();
    let config = write_source(&temp, "cfg.toml", "[cleaner\n");
    let input = write_source(&temp, "a.c", "x;\n");

    cstrip(temp.path())
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config file"));
}
