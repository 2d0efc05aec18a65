//! Console output for generation runs.
//!
//! The library core returns diagnostics instead of printing them; this module
//! is the one place that writes to the terminal.

use crate::clean::CleanStats;
use crate::cmake::{Bucket, Diagnostic};
use crate::config::Layout;
use crate::generator::GenerateReport;
use colored::Colorize;
use std::path::Path;

/// How much the reporter prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Banner, warnings and the final summary.
    #[default]
    Normal,
    /// Also every rule file as it is read.
    Verbose,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    verbosity: Verbosity,
}

impl Reporter {
    #[must_use]
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// A reporter that prints nothing; used by tests and library callers.
    #[must_use]
    pub fn quiet() -> Self {
        Self::new(Verbosity::Quiet)
    }

    fn shows(&self, level: Verbosity) -> bool {
        self.verbosity >= level
    }

    pub fn start(&self, layout: &Layout) {
        if !self.shows(Verbosity::Normal) {
            return;
        }
        println!("{}", "Generate start".green());
        println!("sourceDir   : {}", layout.source_dir.display());
        println!("cmakeDir    : {}", layout.output_dir.display());
        println!("productName : {}\n", layout.product_name);
    }

    pub fn cleaned(&self, stats: &CleanStats) {
        if self.shows(Verbosity::Verbose) {
            println!(
                "Cleaned {} files, {} dirs ({} preserved)",
                stats.files_removed, stats.dirs_removed, stats.preserved
            );
        }
    }

    pub fn processing(&self, rule_file: &Path) {
        if self.shows(Verbosity::Verbose) {
            println!("Process: {}", rule_file.display());
        }
    }

    pub fn no_rule_files(&self, ninja_root: &Path) {
        if self.shows(Verbosity::Normal) {
            eprintln!(
                "{}",
                format!("No rule files found under {}", ninja_root.display()).yellow()
            );
        }
    }

    pub fn diagnostic(&self, diagnostic: &Diagnostic) {
        if !self.shows(Verbosity::Normal) {
            return;
        }
        let msg = match diagnostic {
            Diagnostic::MissingSource(p) => format!("Ignored srcFile: {}", p.display()),
            Diagnostic::MissingInclude(p) => format!("Ignored includeDir: {}", p.display()),
            Diagnostic::UnhandledEscape { variable, token } => {
                format!("Unhandled escape sequence in {variable}: {token}")
            }
        };
        eprintln!("{}", msg.yellow());
    }

    pub fn finish(&self, report: &GenerateReport) {
        if !self.shows(Verbosity::Normal) {
            return;
        }
        println!();
        println!(
            "Read {} from {}",
            pluralize(report.rule_files, "rule file"),
            pluralize(report.project_files, "project dir")
        );
        for bucket in Bucket::ORDER {
            println!("  {:<10} {}", bucket.label(), report.bucket_count(bucket));
        }
        if report.missing_paths() > 0 {
            println!(
                "  {}",
                format!("{} ignored", pluralize(report.missing_paths(), "missing path")).yellow()
            );
        }
        println!(
            "\n{}",
            format!("Successful : {}", report.output_dir.display()).green()
        );
    }
}

fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_order() {
        assert!(Verbosity::Verbose > Verbosity::Normal);
        assert!(Reporter::new(Verbosity::Normal).shows(Verbosity::Normal));
        assert!(!Reporter::quiet().shows(Verbosity::Normal));
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "rule file"), "1 rule file");
        assert_eq!(pluralize(3, "rule file"), "3 rule files");
    }
}
