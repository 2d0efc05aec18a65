// src/ninja/reader.rs
//! Folds the lines of one rule file into a [`NinjaEntry`].

use super::line::{classify_line, LineKind, Variable};
use super::types::NinjaEntry;
use crate::error::{GenerateError, Result};
use crate::paths::normalize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads a rule file. Sources are resolved against `build_dir`
/// (the parent of the ninja root, i.e. `out/<product>`).
///
/// Lines are decoded as UTF-8 with invalid bytes replaced, so only real
/// I/O failures are errors.
///
/// # Errors
/// Returns error if the file cannot be opened or read.
pub fn read_entry(rule_file: &Path, build_dir: &Path) -> Result<NinjaEntry> {
    let file = File::open(rule_file).map_err(|e| GenerateError::io(e, rule_file))?;
    let mut reader = BufReader::new(file);
    let mut entry = NinjaEntry {
        rule_file: rule_file.to_path_buf(),
        ..NinjaEntry::default()
    };

    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| GenerateError::io(e, rule_file))?;
        if read == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        apply_line(&mut entry, line.trim_end_matches(['\n', '\r']), build_dir);
    }
    Ok(entry)
}

fn apply_line(entry: &mut NinjaEntry, line: &str, build_dir: &Path) {
    match classify_line(line) {
        LineKind::Variable(var, value) => {
            let slot = match var {
                Variable::Defines => &mut entry.defines,
                Variable::IncludeDirs => &mut entry.include_dirs,
                Variable::Cflags => &mut entry.cflags,
                Variable::CflagsCc => &mut entry.cflags_cc,
                Variable::LabelName => &mut entry.label_name,
                Variable::RootOutDir => &mut entry.root_out_dir,
                Variable::TargetOutputName => &mut entry.target_output_name,
            };
            *slot = Some(value.to_string());
        }
        LineKind::BuildEdge(edge) => {
            entry.build_edges += 1;
            entry.sources.extend(
                extract_sources(edge)
                    .into_iter()
                    .map(|src| normalize(&build_dir.join(src))),
            );
        }
        LineKind::NoMatch => {}
    }
}

/// Pulls the C/C++ inputs out of a build edge line.
///
/// Everything up to the first `:` is dropped, then `||` and the rule names
/// `cxx`/`cc` are erased before splitting on whitespace.
#[must_use]
pub fn extract_sources(edge: &str) -> Vec<String> {
    let Some((_, inputs)) = edge.split_once(':') else {
        return Vec::new();
    };
    let inputs = inputs.replace("||", "").replace("cxx", "").replace("cc", "");
    inputs
        .split_whitespace()
        .filter(|tok| tok.ends_with(".cpp") || tok.ends_with(".c"))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_cpp_with_order_only() {
        let srcs = extract_sources("build obj/a.o: cxx ../src/a.cpp || ../include/a.h");
        assert_eq!(srcs, vec!["../src/a.cpp"]);
    }

    #[test]
    fn test_extract_c_and_cpp() {
        let srcs = extract_sources("build obj/x.o: cc ../x.c ../y.cpp ../z.h");
        assert_eq!(srcs, vec!["../x.c", "../y.cpp"]);
    }

    #[test]
    fn test_extract_without_colon() {
        assert!(extract_sources("build a.c").is_empty());
    }

    #[test]
    fn test_rule_names_are_erased_from_paths() {
        // Rule-name erasure is textual and also hits path text.
        let srcs = extract_sources("build o: cxx ../accel/a.cpp");
        assert_eq!(srcs, vec!["../ael/a.cpp"]);
    }

    #[test]
    fn test_read_entry_tolerates_invalid_utf8() {
        let temp = tempfile::TempDir::new().unwrap();
        let rule_file = temp.path().join("x.ninja");
        let mut content = b"# comment caf\xe9\r\n".to_vec();
        content.extend_from_slice(b"defines = -DFOO\r\nbuild obj/a.o: cxx ../../src/a.cpp");
        std::fs::write(&rule_file, content).unwrap();

        let entry = read_entry(&rule_file, Path::new("/oh/out/rk")).unwrap();

        assert_eq!(entry.defines.as_deref(), Some("-DFOO"));
        assert_eq!(entry.sources, vec![Path::new("/oh/src/a.cpp").to_path_buf()]);
    }

    #[test]
    fn test_apply_line_last_write_wins() {
        let mut entry = NinjaEntry::default();
        let dir = Path::new("/src/out/rk");
        apply_line(&mut entry, "defines = -DA", dir);
        apply_line(&mut entry, "defines = -DB", dir);
        assert_eq!(entry.defines.as_deref(), Some("-DB"));
    }

    #[test]
    fn test_apply_line_accumulates_sources() {
        let mut entry = NinjaEntry::default();
        let dir = Path::new("/src/out/rk");
        apply_line(&mut entry, "build obj/a.o: cxx ../../foo/a.cpp", dir);
        apply_line(&mut entry, "build obj/b.o: cc ../../foo/b.c", dir);
        assert_eq!(entry.build_edges, 2);
        assert_eq!(
            entry.sources,
            vec![
                Path::new("/src/foo/a.cpp").to_path_buf(),
                Path::new("/src/foo/b.c").to_path_buf()
            ]
        );
    }
}
