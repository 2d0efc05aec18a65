use clap::Parser;
use colored::Colorize;
use ninja2cmake_core::cli::{self, Cli};
use ninja2cmake_core::exit::Ninja2CmakeExit;

fn main() -> Ninja2CmakeExit {
    let cli = Cli::parse();

    match cli::dispatch::execute(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            Ninja2CmakeExit::for_error(&e)
        }
    }
}
