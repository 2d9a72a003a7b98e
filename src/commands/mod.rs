//! Command handlers for the cstrip CLI.
//!
//! Everything that touches files, stdin/stdout or exit codes lives here; the
//! cleaning itself is in the library.

pub mod clean;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Cleaned successfully.
pub const EXIT_OK: u8 = 0;
/// Validation errors found, no output produced.
pub const EXIT_VALIDATION: u8 = 1;
/// Usage or file error before cleaning ran.
pub const EXIT_USAGE: u8 = 2;

/// Read a source file (or stdin) as UTF-8 text.
pub fn read_source(path: &Path, stdin: bool) -> Result<String> {
    let bytes = if stdin {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read standard input")?;
        buf
    } else {
        if !path.exists() {
            bail!("File not found: {}", path.display());
        }
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?
    };

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(_) => bail!("Could not read file as UTF-8"),
    }
}

/// Write cleaned text to `path`, creating parent directories as needed.
pub fn write_output(path: &Path, cleaned: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, cleaned)
        .with_context(|| format!("Failed to write output file: {}", path.display()))
}
