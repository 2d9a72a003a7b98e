//! cstrip Library
//!
//! Strips comments and normalizes whitespace in C/C++-like source text,
//! validating block comment balance and rejecting disallowed control
//! characters. See [`clean`] for the pipeline.

pub mod clean;
pub mod cli;
pub mod config;
pub mod report;
pub mod theme;

pub use clean::{clean, CleanError, CleanOutcome, Cleaner, Info};
pub use config::Config;
pub use theme::Theme;
