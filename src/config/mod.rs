//! Configuration management for cstrip
//!
//! Settings live in `~/.config/cstrip/config.toml`; every key is optional.

mod io;
mod types;

pub use io::ConfigError;
pub use types::*;

use std::path::{Path, PathBuf};

impl Config {
    /// Get the config file path (~/.config/cstrip/config.toml)
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/cstrip)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self, ConfigError> {
        io::load()
    }

    /// Load configuration from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        io::load_from(path)
    }

    /// Load from `path` when given, otherwise from the default location
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        io::parse(contents)
    }
}
