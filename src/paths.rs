// src/paths.rs
//! Lexical path handling. Nothing here touches the filesystem.

use std::path::{Component, Path, PathBuf};

/// Resolves `.` and `..` components without following symlinks.
///
/// Referenced paths may not exist, so `fs::canonicalize` is not an option.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component.as_os_str()),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Makes `path` absolute against the current directory, then normalizes it.
///
/// # Errors
/// Returns error if the current directory cannot be determined.
pub fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(normalize(path));
    }
    Ok(normalize(&std::env::current_dir()?.join(path)))
}

/// Normalizes a path to use forward slashes (cross-platform pattern matching).
#[must_use]
pub fn normalize_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Rewrites the source-dir prefix of emitted paths to another base directory.
///
/// Pure string substitution on whole path components; the target base is
/// never checked against the filesystem.
#[derive(Debug, Clone, Default)]
pub struct PathTransform {
    from: PathBuf,
    to: Option<String>,
}

impl PathTransform {
    #[must_use]
    pub fn new(source_dir: &Path, to: Option<String>) -> Self {
        Self {
            from: source_dir.to_path_buf(),
            to,
        }
    }

    /// Renders a path as it should appear in generated files.
    #[must_use]
    pub fn render(&self, path: &Path) -> String {
        let Some(to) = &self.to else {
            return path.display().to_string();
        };
        match path.strip_prefix(&self.from) {
            Ok(rest) if rest.as_os_str().is_empty() => to.clone(),
            Ok(rest) => format!("{}/{}", to.trim_end_matches('/'), normalize_slashes(rest)),
            Err(_) => path.display().to_string(),
        }
    }
}
