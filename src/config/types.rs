//! Configuration type definitions and defaults

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub cleaner: CleanerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Cleaning pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CleanerConfig {
    /// Withhold cleaned output when the only errors are control characters
    #[serde(default = "default_control_chars_abort")]
    pub control_chars_abort: bool,
}

pub fn default_control_chars_abort() -> bool {
    true
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            control_chars_abort: default_control_chars_abort(),
        }
    }
}

/// CLI report configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Print `[INFO]` lines
    #[serde(default = "default_true")]
    pub show_info: bool,
    /// Colorize `[INFO]`/`[ERROR]` prefixes (NO_COLOR always wins)
    #[serde(default = "default_true")]
    pub color: bool,
}

pub fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            show_info: default_true(),
            color: default_true(),
        }
    }
}
