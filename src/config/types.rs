// src/config/types.rs
use crate::cmake::TargetPlatform;
use crate::reporting::Verbosity;
use serde::Deserialize;
use std::path::PathBuf;

/// Name of the config file looked up inside the source dir.
pub const CONFIG_FILE_NAME: &str = "ninja2cmake.toml";

/// Directory left in place when the output root is cleaned.
pub const DEFAULT_PRESERVE: &str = ".idea";

/// Name of the default output directory under the source dir.
pub const DEFAULT_OUTPUT_DIR: &str = "cmake";

/// Everything a generation run needs to know.
#[derive(Debug, Clone)]
pub struct Config {
    pub source_dir: PathBuf,
    /// Defaults to `<source_dir>/cmake` when unset.
    pub output_dir: Option<PathBuf>,
    pub product_name: Option<String>,
    pub target_platform: TargetPlatform,
    pub transform_dir: Option<String>,
    pub preserve: String,
    pub verbosity: Verbosity,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            output_dir: None,
            product_name: None,
            target_platform: TargetPlatform::default(),
            transform_dir: None,
            preserve: DEFAULT_PRESERVE.to_string(),
            verbosity: Verbosity::default(),
        }
    }
}

/// On-disk form of the config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub target_platform: Option<TargetPlatform>,
    #[serde(default)]
    pub transform_dir: Option<String>,
    #[serde(default)]
    pub preserve: Option<String>,
}

/// Absolute directories derived from a validated [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Canonical source dir.
    pub source_dir: PathBuf,
    /// `<source>/out/<product>`; rule-file paths are relative to it.
    pub build_dir: PathBuf,
    /// `<source>/out/<product>/obj`; the tree that is scanned.
    pub ninja_root: PathBuf,
    pub output_dir: PathBuf,
    pub product_name: String,
}
