// src/cmake/toolchain.rs
use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Host platform of the prebuilt clang toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetPlatform {
    #[default]
    Linux,
    Windows,
}

impl TargetPlatform {
    fn bin_dir(self) -> &'static str {
        match self {
            Self::Linux => "prebuilts/clang/ohos/linux-x86_64/llvm/bin",
            Self::Windows => "prebuilts/clang/ohos/windows-x86_64/llvm/bin",
        }
    }

    fn exe_suffix(self) -> &'static str {
        match self {
            Self::Linux => "",
            Self::Windows => ".exe",
        }
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linux => write!(f, "linux"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

/// Compiler paths written into every project file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub c_compiler: PathBuf,
    pub cxx_compiler: PathBuf,
}

impl Toolchain {
    #[must_use]
    pub fn resolve(source_dir: &Path, platform: TargetPlatform) -> Self {
        let bin = source_dir.join(platform.bin_dir());
        let suffix = platform.exe_suffix();
        Self {
            c_compiler: bin.join(format!("clang{suffix}")),
            cxx_compiler: bin.join(format!("clang++{suffix}")),
        }
    }
}
