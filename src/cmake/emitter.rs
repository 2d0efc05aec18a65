// src/cmake/emitter.rs
//! Renders one `CMakeLists.txt` per output key.

use super::flags::{flag_line, unescape, unhandled_escapes, FlagSet, FlagVar};
use super::toolchain::Toolchain;
use super::{BANNER, CMAKE_MINIMUM};
use crate::aggregate::OutputKey;
use crate::error::Result;
use crate::ninja::NinjaEntry;
use crate::paths::{normalize, PathTransform};
use crate::utils::short_hash;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Something worth telling the user about while rendering; never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    MissingSource(PathBuf),
    MissingInclude(PathBuf),
    UnhandledEscape {
        variable: &'static str,
        token: String,
    },
}

/// Inputs shared by every rendered project file.
#[derive(Debug, Clone, Copy)]
pub struct EmitContext<'a> {
    /// `out/<product>`, the base that relative include dirs resolve against.
    pub build_dir: &'a Path,
    pub toolchain: &'a Toolchain,
    pub transform: &'a PathTransform,
}

/// A rendered project file, not yet written.
#[derive(Debug, Clone)]
pub struct ProjectFile {
    pub key: OutputKey,
    pub name: String,
    pub content: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// `<dir name>-<hash of the full key path>`.
#[must_use]
pub fn project_name(key: &OutputKey) -> String {
    let hash = short_hash(&key.path().to_string_lossy());
    format!("{}-{hash}", key.dir_name())
}

/// Renders the project file for `key` from its entries, in order.
///
/// # Errors
/// Returns error if formatting fails.
pub fn render_project(
    key: &OutputKey,
    entries: &[NinjaEntry],
    ctx: &EmitContext<'_>,
) -> Result<ProjectFile> {
    let name = project_name(key);
    let mut r = Renderer {
        ctx,
        out: String::new(),
        flags: FlagSet::new(),
        diagnostics: Vec::new(),
    };

    writeln!(r.out, "{BANNER}")?;
    writeln!(r.out, "cmake_minimum_required(VERSION {CMAKE_MINIMUM})")?;
    writeln!(r.out, "project({name})")?;
    writeln!(r.out)?;
    writeln!(
        r.out,
        "set(CMAKE_C_COMPILER \"{}\")",
        ctx.transform.render(&ctx.toolchain.c_compiler)
    )?;
    writeln!(
        r.out,
        "set(CMAKE_CXX_COMPILER \"{}\")",
        ctx.transform.render(&ctx.toolchain.cxx_compiler)
    )?;
    writeln!(r.out)?;

    for entry in entries {
        r.entry(entry)?;
    }

    writeln!(r.out)?;
    writeln!(r.out, "add_executable({name} ${{SOURCE_FILES}})")?;

    Ok(ProjectFile {
        key: key.clone(),
        name,
        content: r.out,
        diagnostics: r.diagnostics,
    })
}

struct Renderer<'a> {
    ctx: &'a EmitContext<'a>,
    out: String,
    flags: FlagSet,
    diagnostics: Vec<Diagnostic>,
}

impl Renderer<'_> {
    fn entry(&mut self, entry: &NinjaEntry) -> Result<()> {
        let rule_file = self.ctx.transform.render(&entry.rule_file);
        writeln!(self.out, "\n# CMakeLists rule for: {rule_file}")?;
        if let Some(label) = &entry.label_name {
            writeln!(self.out, "# label: {label}")?;
        }
        if let Some(output) = target_output(entry) {
            writeln!(self.out, "# output: {output}")?;
        }

        if entry.build_edges > 0 {
            self.sources(&entry.sources)?;
        }
        if let Some(raw) = &entry.include_dirs {
            self.includes(raw)?;
        }
        if let Some(raw) = &entry.defines {
            self.flag_block("defines", raw, true)?;
        }
        if let Some(raw) = &entry.cflags {
            self.flag_block("cflags", raw, false)?;
        }
        if let Some(raw) = &entry.cflags_cc {
            self.flag_block("cflags_cc", raw, false)?;
        }
        Ok(())
    }

    fn sources(&mut self, sources: &[PathBuf]) -> Result<()> {
        writeln!(self.out, "\n# src: \nlist(APPEND\n    SOURCE_FILES")?;
        for src in sources {
            let shown = self.ctx.transform.render(src);
            if src.exists() {
                writeln!(self.out, "    {shown}")?;
            } else {
                writeln!(self.out, "#   {shown}")?;
                self.diagnostics.push(Diagnostic::MissingSource(src.clone()));
            }
        }
        writeln!(self.out, ")")?;
        Ok(())
    }

    fn includes(&mut self, raw: &str) -> Result<()> {
        writeln!(self.out, "\n# include:\n# {raw}\ninclude_directories(")?;
        for token in raw.split_whitespace() {
            let rel = token.strip_prefix("-I").unwrap_or(token);
            let dir = normalize(&self.ctx.build_dir.join(rel));
            let shown = self.ctx.transform.render(&dir);
            if dir.exists() {
                writeln!(self.out, "    \"{shown}\"")?;
            } else {
                writeln!(self.out, "#   \"{shown}\"")?;
                self.diagnostics.push(Diagnostic::MissingInclude(dir));
            }
        }
        writeln!(self.out, ")")?;
        Ok(())
    }

    fn flag_block(&mut self, variable: &'static str, raw: &str, enabled: bool) -> Result<()> {
        let line = unescape(raw);
        writeln!(self.out, "\n# {variable}:\n# {line}")?;

        for token in unhandled_escapes(&line) {
            self.diagnostics.push(Diagnostic::UnhandledEscape {
                variable,
                token: token.to_string(),
            });
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        for var in [FlagVar::C, FlagVar::Cxx] {
            for token in &tokens {
                self.flags.append(&mut self.out, flag_line(var, token, enabled))?;
            }
        }
        Ok(())
    }
}

fn target_output(entry: &NinjaEntry) -> Option<String> {
    let name = entry.target_output_name.as_deref()?;
    Some(match entry.root_out_dir.as_deref() {
        Some(dir) => format!("{dir}/{name}"),
        None => name.to_string(),
    })
}
