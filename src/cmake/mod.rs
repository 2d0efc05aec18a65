// src/cmake/mod.rs
//! Rendering aggregated entries as CMake project files.

pub mod emitter;
pub mod flags;
pub mod root;
pub mod toolchain;

pub use self::emitter::{render_project, Diagnostic, EmitContext, ProjectFile};
pub use self::flags::{unescape, FlagSet};
pub use self::root::{classify, render_root, Bucket};
pub use self::toolchain::{TargetPlatform, Toolchain};

/// First line of every generated file.
pub const BANNER: &str = "# THIS FILE WAS AUTOMATICALY GENERATED, DO NOT MODIFY!";

/// Minimum CMake version declared by generated files.
pub const CMAKE_MINIMUM: &str = "3.6";
