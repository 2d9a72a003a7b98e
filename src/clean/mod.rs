//! C/C++ source cleaning
//!
//! Strips comments and normalizes whitespace in C-like source text while
//! validating that block comments are balanced and that no disallowed
//! control characters are present.
//!
//! # Pipeline
//!
//! 1. **Line endings** - `\r\n` and lone `\r` become `\n`
//! 2. **Control characters** - reported, scanning the unprotected text
//! 3. **Literal protection** - string/char literals become placeholders
//! 4. **Comment balance** - unbalanced `/*`/`*/` aborts before any mutation
//! 5. **Comment removal** - block comments first, then line comments
//! 6. **Whitespace** - trim, collapse runs, drop blank lines
//! 7. **Literal restoration**
//!
//! By default any error withholds the cleaned text, control characters
//! included. [`Cleaner::control_chars_abort`] relaxes that for control
//! characters only.
//!
//! # Example
//! ```
//! let outcome = cstrip::clean("int x;   // counter\n\n");
//! assert!(outcome.is_ok());
//! assert_eq!(outcome.cleaned, "int x;\n");
//! ```

mod comments;
mod diagnostic;
mod literals;
mod validate;
mod whitespace;

pub use comments::{chars_removed, remove_block_comments, remove_line_comments};
pub use diagnostic::{CleanError, CleanOutcome, Info};
pub use literals::{protect, restore, LiteralMap};
pub use validate::{
    check_comment_balance, check_control_chars, comment_tokens, is_disallowed_control,
    line_of_pos, CommentToken,
};
pub use whitespace::{normalize, Normalized};

use tracing::debug;

use crate::config::CleanerConfig;

/// Clean `text` with default options.
pub fn clean(text: &str) -> CleanOutcome {
    Cleaner::default().clean(text)
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Configurable cleaning pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cleaner {
    control_chars_abort: bool,
}

impl Default for Cleaner {
    fn default() -> Self {
        Self {
            control_chars_abort: true,
        }
    }
}

impl Cleaner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cleaner from the `[cleaner]` config section.
    pub fn from_config(config: &CleanerConfig) -> Self {
        Self::new().control_chars_abort(config.control_chars_abort)
    }

    /// Whether control-character errors alone withhold the cleaned text.
    ///
    /// When `false` they are still reported in [`CleanOutcome::errors`], but
    /// the cleaned text is produced anyway.
    pub fn control_chars_abort(mut self, abort: bool) -> Self {
        self.control_chars_abort = abort;
        self
    }

    /// Run the full pipeline over `text`.
    pub fn clean(&self, text: &str) -> CleanOutcome {
        let mut outcome = CleanOutcome::default();

        let text = normalize_line_endings(text);

        outcome.errors.extend(check_control_chars(&text));
        debug!(count = outcome.errors.len(), "Control character scan done");

        let (protected, literals) = match protect(&text) {
            Ok(protected) => protected,
            Err(err) => {
                outcome.errors.push(err);
                return outcome;
            }
        };
        debug!(literals = literals.len(), "Literals protected");

        let balance = check_comment_balance(&protected);
        let unbalanced = !balance.is_empty();
        outcome.errors.extend(balance);
        if unbalanced || (self.control_chars_abort && !outcome.errors.is_empty()) {
            debug!(errors = outcome.errors.len(), "Aborting before comment removal");
            return outcome;
        }

        let stripped = remove_block_comments(&protected);
        let removed = chars_removed(&protected, &stripped);
        debug!(removed, "Block comments removed");
        outcome.info.push(Info::BlockCommentChars(removed));

        let protected = stripped;
        let stripped = remove_line_comments(&protected);
        let removed = chars_removed(&protected, &stripped);
        debug!(removed, "Line comments removed");
        outcome.info.push(Info::LineCommentChars(removed));

        let normalized = normalize(&stripped);
        debug!(dropped = normalized.dropped_lines, "Whitespace normalized");
        outcome.info.push(Info::BlankLines(normalized.dropped_lines));

        outcome.cleaned = restore(&normalized.text, &literals);
        outcome
    }
}
