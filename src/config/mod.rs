// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{
    Config, ConfigFile, Layout, CONFIG_FILE_NAME, DEFAULT_OUTPUT_DIR, DEFAULT_PRESERVE,
};
use crate::error::{GenerateError, Result};
use crate::paths::absolutize;
use std::fs;
use std::path::Path;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config for `source_dir`, merged with its config file when one exists.
    ///
    /// # Errors
    /// Returns error if a config file exists but cannot be read or parsed.
    pub fn load(source_dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        let mut config = Self {
            source_dir: source_dir.to_path_buf(),
            ..Self::default()
        };
        if let Some(path) = io::locate(explicit, source_dir) {
            config.apply_file(io::load_file(&path)?);
        }
        Ok(config)
    }

    /// Overlays the keys the file sets.
    pub fn apply_file(&mut self, file: ConfigFile) {
        if file.product_name.is_some() {
            self.product_name = file.product_name;
        }
        if file.output_dir.is_some() {
            self.output_dir = file.output_dir;
        }
        if let Some(platform) = file.target_platform {
            self.target_platform = platform;
        }
        if file.transform_dir.is_some() {
            self.transform_dir = file.transform_dir;
        }
        if let Some(preserve) = file.preserve {
            self.preserve = preserve;
        }
    }

    /// Resolves and checks the directories of a run. Nothing is written.
    ///
    /// # Errors
    /// Returns a configuration error if the product name is missing, the
    /// `out/<product>/obj` tree does not exist, or the output dir contains the
    /// source dir or lies inside `out/<product>`.
    pub fn validate(&self) -> Result<Layout> {
        let product_name = self
            .product_name
            .clone()
            .filter(|p| !p.trim().is_empty())
            .ok_or(GenerateError::MissingProductName)?;

        let expected = self.source_dir.join("out").join(&product_name).join("obj");
        let source_dir = fs::canonicalize(&self.source_dir)
            .map_err(|_| GenerateError::MissingNinjaRoot { path: expected })?;
        let build_dir = source_dir.join("out").join(&product_name);
        let ninja_root = build_dir.join("obj");
        if !ninja_root.is_dir() {
            return Err(GenerateError::MissingNinjaRoot { path: ninja_root });
        }

        let output_dir = match &self.output_dir {
            Some(dir) => absolutize(dir).map_err(|e| GenerateError::io(e, dir))?,
            None => source_dir.join(DEFAULT_OUTPUT_DIR),
        };
        // The clean step would delete the sources or the rule files.
        if source_dir.starts_with(&output_dir) || output_dir.starts_with(&build_dir) {
            return Err(GenerateError::UnsafeOutputDir { path: output_dir });
        }

        Ok(Layout {
            source_dir,
            build_dir,
            ninja_root,
            output_dir,
            product_name,
        })
    }
}
