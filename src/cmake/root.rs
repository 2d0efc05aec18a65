// src/cmake/root.rs
//! The root `CMakeLists.txt`: a commented index of every generated project.

use super::{BANNER, CMAKE_MINIMUM};
use crate::aggregate::OutputKey;
use crate::error::Result;
use crate::ninja::NinjaEntry;
use crate::paths::normalize_slashes;
use regex::Regex;
use std::fmt::{self, Write};
use std::path::Path;
use std::sync::LazyLock;

/// Project name of the root file.
pub const ROOT_PROJECT: &str = "OpenHarmony";

const TEST_DIR_NAME_PATTERN: &str = r"(?:_test|tests|test)$";
const TEST_SEGMENT_PATTERN: &str = r"/(?:test|tests|unittest)/";

static TEST_DIR_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(TEST_DIR_NAME_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex"))
});
static TEST_SEGMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(TEST_SEGMENT_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Group an output key is listed under in the root file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Normal,
    Test,
    NoSource,
}

impl Bucket {
    /// Order of the groups in the root file.
    pub const ORDER: [Bucket; 3] = [Bucket::Normal, Bucket::Test, Bucket::NoSource];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Test => "test",
            Self::NoSource => "no source",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Buckets a key. Existence of sources is checked now, not cached.
///
/// Path segments are matched below `output_root` only.
#[must_use]
pub fn classify(key: &OutputKey, entries: &[NinjaEntry], output_root: &Path) -> Bucket {
    let existing: usize = entries.iter().map(NinjaEntry::existing_source_count).sum();
    if existing == 0 {
        return Bucket::NoSource;
    }
    if is_test_path(key, output_root) {
        return Bucket::Test;
    }
    Bucket::Normal
}

fn is_test_path(key: &OutputKey, output_root: &Path) -> bool {
    let rel = normalize_slashes(&key.relative_dir(output_root));
    TEST_DIR_NAME_RE.is_match(&key.dir_name()) || TEST_SEGMENT_RE.is_match(&format!("/{rel}/"))
}

/// Renders the root file. `keys` must already be in emission order.
///
/// # Errors
/// Returns error if formatting fails.
pub fn render_root(keys: &[(OutputKey, Bucket)], output_root: &Path) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{BANNER}")?;
    writeln!(out, "cmake_minimum_required(VERSION {CMAKE_MINIMUM})")?;
    writeln!(out, "project({ROOT_PROJECT})")?;

    for bucket in Bucket::ORDER {
        writeln!(out, "\n# {bucket}")?;
        for (key, _) in keys.iter().filter(|(_, b)| *b == bucket) {
            let rel = normalize_slashes(&key.relative_dir(output_root));
            writeln!(out, "# add_subdirectory({rel})")?;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const OUT: &str = "/oh/cmake";

    fn key_under(out: &str, rel: &str) -> OutputKey {
        OutputKey::derive(
            &Path::new("/oh/out/rk/obj").join(rel).join("x.ninja"),
            Path::new("/oh/out/rk/obj"),
            Path::new(out),
        )
        .unwrap()
    }

    fn key(rel: &str) -> OutputKey {
        key_under(OUT, rel)
    }

    fn bucket_of(rel: &str, entries: &[NinjaEntry]) -> Bucket {
        classify(&key(rel), entries, Path::new(OUT))
    }

    fn with_source(temp: &TempDir, exists: bool) -> NinjaEntry {
        let src = temp.path().join("a.cpp");
        if exists {
            fs::write(&src, "").unwrap();
        }
        NinjaEntry {
            sources: vec![src],
            build_edges: 1,
            ..NinjaEntry::default()
        }
    }

    #[test]
    fn test_no_source_beats_test_name() {
        let temp = TempDir::new().unwrap();
        let entries = [with_source(&temp, false)];
        assert_eq!(bucket_of("foo/unittest/bar_test", &entries), Bucket::NoSource);
    }

    #[test]
    fn test_test_dir_names() {
        let temp = TempDir::new().unwrap();
        let entries = [with_source(&temp, true)];
        assert_eq!(bucket_of("a/foo_test", &entries), Bucket::Test);
        assert_eq!(bucket_of("a/footests", &entries), Bucket::Test);
        assert_eq!(bucket_of("a/tests/impl", &entries), Bucket::Test);
        assert_eq!(bucket_of("a/unittest/impl", &entries), Bucket::Test);
        assert_eq!(bucket_of("a/testing/impl", &entries), Bucket::Normal);
        assert_eq!(bucket_of("a/foo", &entries), Bucket::Normal);
    }

    #[test]
    fn test_test_segment_above_output_root_ignored() {
        let temp = TempDir::new().unwrap();
        let entries = [with_source(&temp, true)];
        let out = "/home/u/test/oh/cmake";
        assert_eq!(classify(&key_under(out, "lib"), &entries, Path::new(out)), Bucket::Normal);
        assert_eq!(
            classify(&key_under(out, "test/lib"), &entries, Path::new(out)),
            Bucket::Test
        );
    }

    #[test]
    fn test_render_root_groups() {
        let keys = vec![
            (key("z/lib"), Bucket::Normal),
            (key("a/lib_test"), Bucket::Test),
            (key("b/empty"), Bucket::NoSource),
            (key("c/lib"), Bucket::Normal),
        ];
        let out = render_root(&keys, &PathBuf::from("/oh/cmake")).unwrap();
        let expected = format!(
            "{BANNER}\ncmake_minimum_required(VERSION 3.6)\nproject(OpenHarmony)\n\n\
             # normal\n# add_subdirectory(z/lib)\n# add_subdirectory(c/lib)\n\n\
             # test\n# add_subdirectory(a/lib_test)\n\n\
             # no source\n# add_subdirectory(b/empty)\n"
        );
        assert_eq!(out, expected);
    }
}
