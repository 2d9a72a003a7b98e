//! ANSI color helpers for CLI report output
//!
//! Colors the `[INFO]`/`[ERROR]` prefixes and the final status line.
//! Only used when stdout is a terminal. Disabled by config, by
//! `--no-color`, or by a non-empty `NO_COLOR`.

use std::io::IsTerminal;

/// ANSI color codes for CLI output
pub mod ansi {
    /// Green color (ANSI 32) - used for info and success
    pub const GREEN: &str = "\x1b[32m";
    /// Red color (ANSI 31) - used for errors
    pub const RED: &str = "\x1b[31m";
    /// Dark gray (ANSI 90) - used for secondary text
    pub const DARK_GRAY: &str = "\x1b[90m";
    /// Reset color
    pub const RESET: &str = "\x1b[0m";
}

/// Output theme for the CLI report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    color: bool,
}

impl Theme {
    /// Theme that emits ANSI codes when `color` is true.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Plain theme, never colors.
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Resolve the theme from the configured preference and the environment.
    ///
    /// Redirected stdout never gets escape codes.
    pub fn detect(color: bool) -> Self {
        Self::new(color && io_is_terminal() && !no_color_requested())
    }

    pub fn is_colored(&self) -> bool {
        self.color
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", code, text, ansi::RESET)
        } else {
            text.to_string()
        }
    }

    /// `[INFO] <msg>`
    pub fn info_line(&self, msg: &str) -> String {
        format!("{} {}", self.paint(ansi::GREEN, "[INFO]"), msg)
    }

    /// `[ERROR] <msg>`
    pub fn error_line(&self, msg: &str) -> String {
        format!("{} {}", self.paint(ansi::RED, "[ERROR]"), msg)
    }

    /// Format text with the success color.
    pub fn success_text(&self, text: &str) -> String {
        self.paint(ansi::GREEN, text)
    }

    /// Format text with the error color.
    pub fn error_text(&self, text: &str) -> String {
        self.paint(ansi::RED, text)
    }

    /// Format text with the secondary color.
    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(ansi::DARK_GRAY, text)
    }
}

fn io_is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

/// True when `NO_COLOR` is set to a non-empty value (https://no-color.org).
fn no_color_requested() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}
