// src/ninja/types.rs
use std::path::PathBuf;

/// The distilled contents of one rule file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NinjaEntry {
    /// The rule file this entry was read from.
    pub rule_file: PathBuf,
    /// Absolute, lexically normalized source paths in edge order.
    pub sources: Vec<PathBuf>,
    /// Number of build edges seen; the source block is rendered iff this is non-zero.
    pub build_edges: usize,
    pub defines: Option<String>,
    pub include_dirs: Option<String>,
    pub cflags: Option<String>,
    pub cflags_cc: Option<String>,
    pub label_name: Option<String>,
    pub root_out_dir: Option<String>,
    pub target_output_name: Option<String>,
}

impl NinjaEntry {
    /// Counts the sources that currently exist on disk.
    #[must_use]
    pub fn existing_source_count(&self) -> usize {
        self.sources.iter().filter(|p| p.exists()).count()
    }
}
