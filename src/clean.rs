// src/clean.rs
//! Removes stale output before a run.

use crate::error::{GenerateError, Result};
use std::fs;
use std::path::Path;

/// Statistics from a clean.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanStats {
    pub files_removed: usize,
    pub dirs_removed: usize,
    pub preserved: usize,
}

/// Deletes everything under `root` except entries named `preserve`, then
/// removes directories left empty (including `root`). A missing `root` is a no-op.
///
/// # Errors
/// Returns error if a directory cannot be listed or an entry cannot be removed.
pub fn clean_output(root: &Path, preserve: &str) -> Result<CleanStats> {
    let mut stats = CleanStats::default();
    if root.symlink_metadata().is_ok() {
        remove_except(root, preserve, &mut stats)?;
    }
    Ok(stats)
}

fn remove_except(path: &Path, preserve: &str, stats: &mut CleanStats) -> Result<()> {
    if path.file_name().is_some_and(|n| n == preserve) {
        stats.preserved += 1;
        return Ok(());
    }

    let meta = path.symlink_metadata().map_err(|e| GenerateError::io(e, path))?;
    if !meta.is_dir() {
        fs::remove_file(path).map_err(|e| GenerateError::io(e, path))?;
        stats.files_removed += 1;
        return Ok(());
    }

    for child in fs::read_dir(path).map_err(|e| GenerateError::io(e, path))? {
        let child = child.map_err(|e| GenerateError::io(e, path))?;
        remove_except(&child.path(), preserve, stats)?;
    }

    let is_empty = fs::read_dir(path)
        .map_err(|e| GenerateError::io(e, path))?
        .next()
        .is_none();
    if is_empty {
        fs::remove_dir(path).map_err(|e| GenerateError::io(e, path))?;
        stats.dirs_removed += 1;
    }
    Ok(())
}
