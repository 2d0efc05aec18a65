// src/ninja/line.rs
//! Single-line classification for ninja rule files.

/// The variables a rule file may assign that the generator cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    Defines,
    IncludeDirs,
    Cflags,
    CflagsCc,
    LabelName,
    RootOutDir,
    TargetOutputName,
}

impl Variable {
    /// Match order. Each prefix ends in `" = "`, so `cflags` never shadows `cflags_cc`.
    pub const ALL: [Variable; 7] = [
        Variable::Defines,
        Variable::IncludeDirs,
        Variable::Cflags,
        Variable::CflagsCc,
        Variable::LabelName,
        Variable::RootOutDir,
        Variable::TargetOutputName,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Defines => "defines",
            Self::IncludeDirs => "include_dirs",
            Self::Cflags => "cflags",
            Self::CflagsCc => "cflags_cc",
            Self::LabelName => "label_name",
            Self::RootOutDir => "root_out_dir",
            Self::TargetOutputName => "target_output_name",
        }
    }

    fn value_of(self, line: &str) -> Option<&str> {
        line.strip_prefix(self.name())?.strip_prefix(" = ")
    }
}

/// Result of classifying one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `name = value` for one of the known variables.
    Variable(Variable, &'a str),
    /// A `build` edge mentioning a C or C++ source; carries the whole line.
    BuildEdge(&'a str),
    NoMatch,
}

/// Classifies a line. Variables are tried before build edges.
#[must_use]
pub fn classify_line(line: &str) -> LineKind<'_> {
    for var in Variable::ALL {
        if let Some(value) = var.value_of(line) {
            return LineKind::Variable(var, value);
        }
    }
    // ".cpp" contains ".c", so one check covers both suffixes.
    if line.starts_with("build ") && line.contains(".c") {
        return LineKind::BuildEdge(line);
    }
    LineKind::NoMatch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_lines() {
        assert_eq!(
            classify_line("defines = -DFOO -DBAR"),
            LineKind::Variable(Variable::Defines, "-DFOO -DBAR")
        );
        assert_eq!(
            classify_line("cflags_cc = -std=c++17"),
            LineKind::Variable(Variable::CflagsCc, "-std=c++17")
        );
        assert_eq!(
            classify_line("cflags = -Wall"),
            LineKind::Variable(Variable::Cflags, "-Wall")
        );
        assert_eq!(
            classify_line("target_output_name = libfoo"),
            LineKind::Variable(Variable::TargetOutputName, "libfoo")
        );
    }

    #[test]
    fn test_empty_value_still_matches() {
        assert_eq!(
            classify_line("include_dirs = "),
            LineKind::Variable(Variable::IncludeDirs, "")
        );
    }

    #[test]
    fn test_indented_variable_is_ignored() {
        assert_eq!(classify_line("  defines = -DFOO"), LineKind::NoMatch);
    }

    #[test]
    fn test_build_edges() {
        let line = "build obj/a.o: cxx ../src/a.cpp || ../include/a.h";
        assert_eq!(classify_line(line), LineKind::BuildEdge(line));
        let c = "build obj/b.o: cc ../src/b.c";
        assert_eq!(classify_line(c), LineKind::BuildEdge(c));
    }

    #[test]
    fn test_irrelevant_lines() {
        assert_eq!(classify_line("build foo.stamp: stamp obj/a.o"), LineKind::NoMatch);
        assert_eq!(classify_line("rule cxx"), LineKind::NoMatch);
        assert_eq!(classify_line("pool link_pool"), LineKind::NoMatch);
        assert_eq!(classify_line("# comment about a.cpp"), LineKind::NoMatch);
        assert_eq!(classify_line(""), LineKind::NoMatch);
    }

    #[test]
    fn test_variable_wins_over_build() {
        assert_eq!(
            classify_line("label_name = build x.c"),
            LineKind::Variable(Variable::LabelName, "build x.c")
        );
    }
}
