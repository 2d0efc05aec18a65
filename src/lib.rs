//! Translates the GN-generated ninja files of an OpenHarmony build into a
//! tree of `CMakeLists.txt` files so IDEs can index the source tree.

pub mod aggregate;
pub mod clean;
pub mod cli;
pub mod cmake;
pub mod config;
pub mod discovery;
pub mod error;
pub mod exit;
pub mod generator;
pub mod ninja;
pub mod paths;
pub mod reporting;
pub mod utils;

pub use generator::{generate, GenerateReport};
