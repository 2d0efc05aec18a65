// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(
        "Incorrect source dir: {path} not found, select the OpenHarmony source dir and compile first"
    )]
    MissingNinjaRoot { path: PathBuf },

    #[error("No product name given (use --product-name or `product_name` in the config file)")]
    MissingProductName,

    #[error("Refusing to use {path} as output dir: cleaning it would delete the source dir or the build output")]
    UnsafeOutputDir { path: PathBuf },

    #[error("Rule file {path} is outside the ninja root")]
    OutsideNinjaRoot { path: PathBuf },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        source: toml::de::Error,
        path: PathBuf,
    },
}

impl GenerateError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }

    /// True for errors caused by the user's configuration rather than the environment.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::MissingNinjaRoot { .. }
                | Self::MissingProductName
                | Self::UnsafeOutputDir { .. }
                | Self::ConfigParse { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GenerateError>;
