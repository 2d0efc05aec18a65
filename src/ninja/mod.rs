// src/ninja/mod.rs
//! Reading GN-generated ninja rule files into per-target records.

pub mod line;
pub mod reader;
pub mod types;

pub use self::line::{classify_line, LineKind, Variable};
pub use self::reader::{extract_sources, read_entry};
pub use self::types::NinjaEntry;

/// Extension of the rule files picked up by the walker.
pub const RULE_FILE_EXT: &str = ".ninja";
