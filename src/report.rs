//! Rendering of a [`CleanOutcome`] for the CLI.
//!
//! The text report mirrors what a user sees in a terminal; the JSON report
//! carries the same content for scripts.

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::clean::{CleanError, CleanOutcome};
use crate::theme::Theme;

/// Printed to stderr when errors withheld the cleaned text.
pub const WITHHELD_MESSAGE: &str = "Errors found - cleaned output withheld.";

/// Printed to stdout after a clean run.
pub const SUCCESS_MESSAGE: &str = "No errors found";

/// Header separating the report from cleaned text printed to stdout.
pub const CLEANED_HEADER: &str = "--- CLEANED ---";

/// Options for [`write_text`].
#[derive(Debug, Clone, Copy)]
pub struct TextOptions<'a> {
    /// Print `[INFO]` lines for the pipeline counters
    pub show_info: bool,
    /// Where the cleaned text was written; `None` prints it to `out`
    pub saved_to: Option<&'a Path>,
}

/// Write the human-readable report.
///
/// Info and cleaned text go to `out`, errors to `err`.
pub fn write_text(
    out: &mut dyn Write,
    err: &mut dyn Write,
    outcome: &CleanOutcome,
    theme: &Theme,
    options: &TextOptions<'_>,
) -> io::Result<()> {
    if options.show_info {
        for info in &outcome.info {
            writeln!(out, "{}", theme.info_line(&info.to_string()))?;
        }
    }

    for error in &outcome.errors {
        writeln!(err, "{}", theme.error_line(&error.to_string()))?;
    }

    if !outcome.has_output() {
        writeln!(err, "{}", theme.error_text(WITHHELD_MESSAGE))?;
        return Ok(());
    }

    match options.saved_to {
        Some(path) => writeln!(
            out,
            "{}",
            theme.info_line(&format!("Cleaned code saved to: {}", path.display()))
        )?,
        None => {
            writeln!(out, "\n{}", theme.secondary_text(CLEANED_HEADER))?;
            write!(out, "{}", outcome.cleaned)?;
        }
    }

    if outcome.is_ok() {
        writeln!(out, "{}", theme.success_text(SUCCESS_MESSAGE))?;
    }

    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    cleaned: &'a str,
    info: Vec<String>,
    errors: Vec<JsonError<'a>>,
}

#[derive(Serialize)]
struct JsonError<'a> {
    #[serde(flatten)]
    error: &'a CleanError,
    message: String,
}

/// Write the report as a single JSON object followed by a newline.
pub fn write_json(out: &mut dyn Write, outcome: &CleanOutcome) -> io::Result<()> {
    let report = JsonReport {
        cleaned: &outcome.cleaned,
        info: outcome.info_messages(),
        errors: outcome
            .errors
            .iter()
            .map(|error| JsonError {
                error,
                message: error.to_string(),
            })
            .collect(),
    };
    serde_json::to_writer(&mut *out, &report)?;
    writeln!(out)
}
