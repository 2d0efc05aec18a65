use crate::cmake::TargetPlatform;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ninja2cmake",
    version,
    about = "Generate CMakeLists.txt from OpenHarmony ninja files for IDE indexing"
)]
pub struct Cli {
    /// OpenHarmony source dir
    #[arg(long, short, alias = "sourceDir", value_name = "DIR", default_value = ".")]
    pub source_dir: PathBuf,

    /// Product name, selects out/<product>
    #[arg(long, short, alias = "productName", value_name = "NAME")]
    pub product_name: Option<String>,

    /// Generate dir [default: <source-dir>/cmake]
    #[arg(long, short = 'c', alias = "cmakeDir", value_name = "DIR")]
    pub cmake_dir: Option<PathBuf>,

    /// Host platform of the prebuilt clang toolchain
    #[arg(long, alias = "targetPlatform", value_enum)]
    pub target_platform: Option<TargetPlatform>,

    /// Change source base dir of the generated CMakeLists.txt
    #[arg(long, alias = "transformDir", value_name = "DIR")]
    pub transform_dir: Option<String>,

    /// Directory name kept when the generate dir is cleaned [default: .idea]
    #[arg(long, value_name = "NAME")]
    pub preserve: Option<String>,

    /// Config file [default: <source-dir>/ninja2cmake.toml if present]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print every rule file as it is read
    #[arg(long, short, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(long, short)]
    pub quiet: bool,
}
