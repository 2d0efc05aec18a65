// src/aggregate.rs
//! Groups rule-file entries by the project file they render into.

use crate::ninja::NinjaEntry;
use crate::paths::normalize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File name of every generated project file.
pub const PROJECT_FILE: &str = "CMakeLists.txt";

/// Output subdirectory for rule files that sit directly in the ninja root.
pub const TOP_LEVEL_DIR: &str = "_top";

/// Absolute path of a generated project file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OutputKey(PathBuf);

impl OutputKey {
    /// Derives the key for `rule_file`: its directory relative to `ninja_root`,
    /// reparented under `output_root`, plus [`PROJECT_FILE`].
    ///
    /// Returns `None` if `rule_file` is not under `ninja_root`.
    #[must_use]
    pub fn derive(rule_file: &Path, ninja_root: &Path, output_root: &Path) -> Option<Self> {
        let dir = rule_file.parent()?;
        let rel = dir.strip_prefix(ninja_root).ok()?;
        let project_dir = if rel.as_os_str().is_empty() {
            output_root.join(TOP_LEVEL_DIR)
        } else {
            output_root.join(rel)
        };
        Some(Self(normalize(&project_dir.join(PROJECT_FILE))))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Directory holding the project file.
    #[must_use]
    pub fn dir(&self) -> &Path {
        self.0.parent().unwrap_or(self.0.as_path())
    }

    /// Name of the directory holding the project file.
    #[must_use]
    pub fn dir_name(&self) -> String {
        self.dir()
            .file_name()
            .map_or_else(String::new, |n| n.to_string_lossy().into_owned())
    }

    /// Directory relative to `output_root`, as written in `add_subdirectory`.
    #[must_use]
    pub fn relative_dir(&self, output_root: &Path) -> PathBuf {
        self.dir()
            .strip_prefix(output_root)
            .map_or_else(|_| self.dir().to_path_buf(), Path::to_path_buf)
    }
}

/// Insertion-ordered map from [`OutputKey`] to the entries that share it.
#[derive(Debug, Default)]
pub struct AggregationTable {
    groups: Vec<(OutputKey, Vec<NinjaEntry>)>,
    index: HashMap<OutputKey, usize>,
}

impl AggregationTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `entry` to the list for `key`, creating it on first use.
    pub fn insert(&mut self, key: OutputKey, entry: NinjaEntry) {
        if let Some(&i) = self.index.get(&key) {
            self.groups[i].1.push(entry);
            return;
        }
        self.index.insert(key.clone(), self.groups.len());
        self.groups.push((key, vec![entry]));
    }

    #[cfg(test)]
    fn get(&self, key: &OutputKey) -> Option<&[NinjaEntry]> {
        self.index.get(key).map(|&i| self.groups[i].1.as_slice())
    }

    /// Keys and their entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&OutputKey, &[NinjaEntry])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of entries across all keys.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|(_, v)| v.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> NinjaEntry {
        NinjaEntry {
            rule_file: PathBuf::from(name),
            ..NinjaEntry::default()
        }
    }

    #[test]
    fn test_derive_mirrors_relative_dir() {
        let key = OutputKey::derive(
            Path::new("/src/out/rk/obj/foo/bar/lib.ninja"),
            Path::new("/src/out/rk/obj"),
            Path::new("/src/cmake"),
        )
        .unwrap();
        assert_eq!(key.path(), Path::new("/src/cmake/foo/bar/CMakeLists.txt"));
        assert_eq!(key.dir_name(), "bar");
        assert_eq!(key.relative_dir(Path::new("/src/cmake")), PathBuf::from("foo/bar"));
    }

    #[test]
    fn test_derive_top_level() {
        let key = OutputKey::derive(
            Path::new("/src/out/rk/obj/x.ninja"),
            Path::new("/src/out/rk/obj"),
            Path::new("/src/cmake"),
        )
        .unwrap();
        assert_eq!(key.path(), Path::new("/src/cmake/_top/CMakeLists.txt"));
    }

    #[test]
    fn test_derive_outside_root() {
        assert!(OutputKey::derive(
            Path::new("/elsewhere/x.ninja"),
            Path::new("/src/out/rk/obj"),
            Path::new("/src/cmake"),
        )
        .is_none());
    }

    #[test]
    fn test_table_groups_in_insertion_order() {
        let a = OutputKey(PathBuf::from("/o/b/CMakeLists.txt"));
        let b = OutputKey(PathBuf::from("/o/a/CMakeLists.txt"));
        let mut table = AggregationTable::new();
        table.insert(a.clone(), entry("1"));
        table.insert(b.clone(), entry("2"));
        table.insert(a.clone(), entry("3"));

        assert_eq!(table.len(), 2);
        assert_eq!(table.entry_count(), 3);
        let keys: Vec<_> = table.iter().map(|(k, _)| k.clone()).collect();
        assert_eq!(keys, vec![a.clone(), b]);
        let names: Vec<_> = table.get(&a).unwrap().iter().map(|e| e.rule_file.clone()).collect();
        assert_eq!(names, vec![PathBuf::from("1"), PathBuf::from("3")]);
    }
}
