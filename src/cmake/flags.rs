// src/cmake/flags.rs
//! Compiler flag lines and their per-file deduplication.

use std::collections::HashSet;
use std::fmt::Write;

/// GN writes a literal `=` inside flag values as this sequence.
const ESCAPED_EQUALS: &str = "\\$ =\\$ ";

/// Replaces the escaped-equals sequence. No other escapes are interpreted.
#[must_use]
pub fn unescape(raw: &str) -> String {
    raw.replace(ESCAPED_EQUALS, "=")
}

/// Tokens that still carry a ninja `$` escape after [`unescape`].
#[must_use]
pub fn unhandled_escapes(line: &str) -> Vec<&str> {
    line.split_whitespace().filter(|tok| tok.contains('$')).collect()
}

/// The CMake variables a flag token is appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagVar {
    C,
    Cxx,
}

impl FlagVar {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::C => "CMAKE_C_FLAGS",
            Self::Cxx => "CMAKE_CXX_FLAGS",
        }
    }
}

/// Renders one `set(...)` line, commented out when `enabled` is false.
#[must_use]
pub fn flag_line(var: FlagVar, token: &str, enabled: bool) -> String {
    let name = var.name();
    let prefix = if enabled { "" } else { "# " };
    format!("{prefix}set({name} \"${{{name}}} {token}\")")
}

/// Lines already emitted into one project file.
#[derive(Debug, Default)]
pub struct FlagSet {
    emitted: HashSet<String>,
}

impl FlagSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `line` to `out` unless an identical line was appended before.
    ///
    /// # Errors
    /// Returns error if writing to `out` fails.
    pub fn append(&mut self, out: &mut String, line: String) -> std::fmt::Result {
        if self.emitted.contains(&line) {
            return Ok(());
        }
        writeln!(out, "{line}")?;
        self.emitted.insert(line);
        Ok(())
    }
}
