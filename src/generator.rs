// src/generator.rs
//! One generation run: validate, clean, scan, render, write.

use crate::aggregate::{AggregationTable, OutputKey, PROJECT_FILE};
use crate::clean::clean_output;
use crate::cmake::{
    classify, render_project, render_root, Bucket, Diagnostic, EmitContext, Toolchain,
};
use crate::config::{Config, Layout};
use crate::discovery::discover;
use crate::error::{GenerateError, Result};
use crate::ninja::read_entry;
use crate::paths::PathTransform;
use crate::reporting::Reporter;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a successful run.
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    pub rule_files: usize,
    pub project_files: usize,
    pub normal: usize,
    pub test: usize,
    pub no_source: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerateReport {
    #[must_use]
    pub fn bucket_count(&self, bucket: Bucket) -> usize {
        match bucket {
            Bucket::Normal => self.normal,
            Bucket::Test => self.test,
            Bucket::NoSource => self.no_source,
        }
    }

    fn count(&mut self, bucket: Bucket) {
        match bucket {
            Bucket::Normal => self.normal += 1,
            Bucket::Test => self.test += 1,
            Bucket::NoSource => self.no_source += 1,
        }
    }

    /// Sources and include dirs written as comments because they do not exist.
    #[must_use]
    pub fn missing_paths(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| !matches!(d, Diagnostic::UnhandledEscape { .. }))
            .count()
    }
}

/// Runs a full generation.
///
/// Configuration errors are raised before anything under the output dir is
/// touched. Files written before a later I/O error stay on disk.
///
/// # Errors
/// Returns error on invalid configuration or any I/O failure.
pub fn generate(config: &Config, reporter: &Reporter) -> Result<GenerateReport> {
    let layout = config.validate()?;
    reporter.start(&layout);

    let stats = clean_output(&layout.output_dir, &config.preserve)?;
    reporter.cleaned(&stats);

    let table = build_table(&layout, reporter)?;
    if table.is_empty() {
        reporter.no_rule_files(&layout.ninja_root);
    }

    let toolchain = Toolchain::resolve(&layout.source_dir, config.target_platform);
    let transform = PathTransform::new(&layout.source_dir, config.transform_dir.clone());
    let ctx = EmitContext {
        build_dir: &layout.build_dir,
        toolchain: &toolchain,
        transform: &transform,
    };

    let mut report = GenerateReport {
        output_dir: layout.output_dir.clone(),
        rule_files: table.entry_count(),
        project_files: table.len(),
        ..GenerateReport::default()
    };

    let mut classified = Vec::with_capacity(table.len());
    for (key, entries) in table.iter() {
        let file = render_project(key, entries, &ctx)?;
        write_file(key.path(), &file.content)?;
        for diagnostic in &file.diagnostics {
            reporter.diagnostic(diagnostic);
        }
        report.diagnostics.extend(file.diagnostics);

        let bucket = classify(key, entries, &layout.output_dir);
        report.count(bucket);
        classified.push((key.clone(), bucket));
    }

    let root = render_root(&classified, &layout.output_dir)?;
    write_file(&layout.output_dir.join(PROJECT_FILE), &root)?;

    reporter.finish(&report);
    Ok(report)
}

/// Reads every rule file under the ninja root and groups the entries by output key.
///
/// # Errors
/// Returns error if the walk fails or any rule file cannot be read.
pub fn build_table(layout: &Layout, reporter: &Reporter) -> Result<AggregationTable> {
    let mut table = AggregationTable::new();
    for rule_file in discover(&layout.ninja_root)? {
        reporter.processing(&rule_file);
        let key = output_key(&rule_file, layout)?;
        let entry = read_entry(&rule_file, &layout.build_dir)?;
        table.insert(key, entry);
    }
    Ok(table)
}

fn output_key(rule_file: &Path, layout: &Layout) -> Result<OutputKey> {
    OutputKey::derive(rule_file, &layout.ninja_root, &layout.output_dir).ok_or_else(|| {
        GenerateError::OutsideNinjaRoot {
            path: rule_file.to_path_buf(),
        }
    })
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| GenerateError::io(e, parent))?;
    }
    fs::write(path, content).map_err(|e| GenerateError::io(e, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout {
            source_dir: PathBuf::from("/oh"),
            build_dir: PathBuf::from("/oh/out/rk"),
            ninja_root: PathBuf::from("/oh/out/rk/obj"),
            output_dir: PathBuf::from("/oh/cmake"),
            product_name: "rk".to_string(),
        }
    }

    #[test]
    fn test_output_key_under_root() {
        let key = output_key(Path::new("/oh/out/rk/obj/foo/a.ninja"), &layout()).unwrap();
        assert_eq!(key.path(), Path::new("/oh/cmake/foo/CMakeLists.txt"));
    }

    #[test]
    fn test_output_key_outside_root_is_an_error() {
        let err = output_key(Path::new("/elsewhere/a.ninja"), &layout()).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::OutsideNinjaRoot { ref path } if path == Path::new("/elsewhere/a.ninja")
        ));
    }

    #[test]
    fn test_empty_tree_writes_root_only() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("out/rk/obj")).unwrap();
        let config = Config {
            source_dir: temp.path().to_path_buf(),
            product_name: Some("rk".to_string()),
            ..Config::default()
        };
        let report = generate(&config, &Reporter::quiet()).unwrap();
        assert_eq!(report.project_files, 0);
        assert!(report.output_dir.join(PROJECT_FILE).exists());
    }
}
