// src/discovery.rs
//! Deterministic discovery of rule files under the ninja root.

use crate::error::Result;
use crate::ninja::RULE_FILE_EXT;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists every rule file under `root`, children visited in file-name order.
///
/// # Errors
/// Returns error if any directory entry cannot be read.
pub fn discover(root: &Path) -> Result<Vec<PathBuf>> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    let mut paths = Vec::new();
    for item in walker {
        let entry = item?;
        if !entry.file_type().is_dir() && is_rule_file(entry.path()) {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}

fn is_rule_file(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(RULE_FILE_EXT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_sorted_and_filtered() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("b/sub")).unwrap();
        fs::create_dir_all(root.join("a")).unwrap();
        fs::write(root.join("b/z.ninja"), "").unwrap();
        fs::write(root.join("b/sub/y.ninja"), "").unwrap();
        fs::write(root.join("b/a.ninja"), "").unwrap();
        fs::write(root.join("a/x.ninja"), "").unwrap();
        fs::write(root.join("a/readme.txt"), "").unwrap();
        fs::write(root.join("a/x.ninja.d"), "").unwrap();

        let found: Vec<_> = discover(root)
            .unwrap()
            .into_iter()
            .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            found,
            vec![
                PathBuf::from("a/x.ninja"),
                PathBuf::from("b/a.ninja"),
                PathBuf::from("b/sub/y.ninja"),
                PathBuf::from("b/z.ninja"),
            ]
        );
    }
}
