//! CLI definitions for cstrip
//!
//! This module contains the clap CLI structure, separated from main.rs so the
//! library can be exercised by tests that parse argument lists directly.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;

/// Version string: crate version plus git commit for dev builds.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")");

/// Version string: crate version plus git commit for dev builds.
#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Path argument meaning "read standard input".
pub const STDIN_PATH: &str = "-";

/// Build clap styles matching the report colors.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Debug, Parser)]
#[command(name = "cstrip")]
#[command(about = "Strip comments and normalize whitespace in C/C++ sources")]
#[command(
    long_about = "Strip comments and normalize whitespace in C/C++ sources.

Removes /* block */ and // line comments, trims and collapses spaces/tabs,
and drops blank lines. String and character literals are left untouched.
Refuses to produce output when a block comment is unbalanced or the file
contains disallowed control characters.

EXIT CODES:
    0    Cleaned successfully
    1    Validation errors found, no output produced
    2    Usage or file error

EXAMPLES:
    cstrip main.cpp                  Print cleaned source to stdout
    cstrip main.cpp -o main.min.cpp  Write cleaned source to a file
    cat main.c | cstrip -            Read from stdin
    cstrip main.cpp --json           Machine-readable report"
)]
#[command(version = VERSION)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Source file to clean ('-' for stdin)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Write cleaned source to this file instead of stdout
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Config file (defaults to ~/.config/cstrip/config.toml)
    #[arg(long, value_name = "PATH", env = "CSTRIP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print a JSON report instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Suppress [INFO] lines
    #[arg(short, long)]
    pub quiet: bool,

    /// Log pipeline stages to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Whether the input argument names standard input.
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == STDIN_PATH
    }
}
