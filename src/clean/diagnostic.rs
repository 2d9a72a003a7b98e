//! Diagnostics produced by the cleaning pipeline.
//!
//! Two classes of message come out of [`clean`](super::clean):
//! - [`Info`] - observability counters (characters removed, lines dropped)
//! - [`CleanError`] - findings that withhold the cleaned text
//!
//! Both render to the human-readable lines printed by the CLI.

use serde::Serialize;

/// A finding that blocks (or, for control characters, may block) cleanup.
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CleanError {
    #[error("Disallowed control character U+{code:04X} on line {line}")]
    ControlChar { line: usize, code: u32 },

    #[error("Extra closing '*/' on line {line}")]
    ExtraClose { line: usize },

    #[error("Unterminated block comment '/*' (line {line})")]
    Unterminated { line: usize },

    #[error("Cannot protect literals: every private-use character already occurs in the input")]
    SentinelExhausted,
}

impl CleanError {
    /// Source line the finding points at, if it has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::ControlChar { line, .. } | Self::ExtraClose { line } | Self::Unterminated { line } => {
                Some(*line)
            }
            Self::SentinelExhausted => None,
        }
    }

    /// Whether this error comes from the comment-balance check.
    pub fn is_balance(&self) -> bool {
        matches!(self, Self::ExtraClose { .. } | Self::Unterminated { .. })
    }
}

/// Informational counters recorded while cleaning.
///
/// Character counts are approximate: placeholders stand in for literals
/// while comments are removed, so they count toward the length. A
/// placeholder is the sentinel, the decimal id and the sentinel again, so a
/// literal inside a removed comment counts as `id digits + 2` characters
/// rather than its own length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "count", rename_all = "snake_case")]
pub enum Info {
    BlockCommentChars(usize),
    LineCommentChars(usize),
    BlankLines(usize),
}

impl std::fmt::Display for Info {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlockCommentChars(n) => write!(f, "Removed characters (block comments): ~{}", n),
            Self::LineCommentChars(n) => write!(f, "Removed characters (line comments): ~{}", n),
            Self::BlankLines(n) => write!(f, "Removed empty lines: {}", n),
        }
    }
}

/// Result of one [`clean`](super::clean) call.
///
/// `cleaned` is empty whenever cleanup was aborted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanOutcome {
    pub cleaned: String,
    pub info: Vec<Info>,
    pub errors: Vec<CleanError>,
}

impl CleanOutcome {
    /// True when no errors were found.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// True when cleaned text was produced (it always ends in a newline).
    ///
    /// False exactly when cleanup was aborted.
    pub fn has_output(&self) -> bool {
        !self.cleaned.is_empty()
    }

    /// Info messages rendered as text, in order.
    pub fn info_messages(&self) -> Vec<String> {
        self.info.iter().map(ToString::to_string).collect()
    }

    /// Error messages rendered as text, in order.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Split into `(cleaned_text, info, errors)` with messages as text.
    pub fn into_parts(self) -> (String, Vec<String>, Vec<String>) {
        let info = self.info_messages();
        let errors = self.error_messages();
        (self.cleaned, info, errors)
    }
}
