// src/config/io.rs
//! Loading `ninja2cmake.toml`.

use super::types::{ConfigFile, CONFIG_FILE_NAME};
use crate::error::{GenerateError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Picks the config file: the explicit one, else `ninja2cmake.toml` in the
/// source dir if present.
#[must_use]
pub fn locate(explicit: Option<&Path>, source_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let candidate = source_dir.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

/// Reads and parses a config file.
///
/// # Errors
/// Returns error if the file cannot be read or is not valid config TOML.
pub fn load_file(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path).map_err(|e| GenerateError::io(e, path))?;
    parse_toml(&content, path)
}

/// Parses config TOML; `path` is only used for error messages.
///
/// # Errors
/// Returns error on malformed TOML or unknown keys.
pub fn parse_toml(content: &str, path: &Path) -> Result<ConfigFile> {
    toml::from_str(content).map_err(|source| GenerateError::ConfigParse {
        source,
        path: path.to_path_buf(),
    })
}
