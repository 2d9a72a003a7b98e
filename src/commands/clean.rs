//! Clean command handler.
//!
//! Reads the input, runs the cleaner with the configured options, writes the
//! result and reports, then maps the outcome to an exit code.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::debug;

use cstrip::cli::Cli;
use cstrip::report::{self, TextOptions};
use cstrip::{CleanOutcome, Cleaner, Config, Theme};

use super::{read_source, write_output, EXIT_OK, EXIT_VALIDATION};

/// Handle a full `cstrip <INPUT>` run.
///
/// `Err` means a usage/file problem (exit 2); validation findings are
/// reported and returned as exit code 1.
pub fn handle_clean(cli: &Cli) -> Result<ExitCode> {
    let config = Config::resolve(cli.config.as_deref()).context("Failed to load config")?;
    debug!(?config, "Configuration loaded");

    let theme = Theme::detect(config.output.color && !cli.no_color);
    let source = read_source(&cli.input, cli.reads_stdin())?;

    let outcome = Cleaner::from_config(&config.cleaner).clean(&source);

    if let Some(path) = cli.output.as_deref() {
        if outcome.has_output() {
            write_output(path, &outcome.cleaned)?;
        }
    }

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    if cli.json {
        report::write_json(&mut out, &outcome)?;
    } else {
        let options = TextOptions {
            show_info: config.output.show_info && !cli.quiet,
            saved_to: cli.output.as_deref(),
        };
        report::write_text(&mut out, &mut err, &outcome, &theme, &options)?;
    }
    out.flush()?;

    Ok(exit_code(&outcome).into())
}

/// Exit code for a finished run.
pub fn exit_code(outcome: &CleanOutcome) -> u8 {
    if outcome.is_ok() {
        EXIT_OK
    } else {
        EXIT_VALIDATION
    }
}
