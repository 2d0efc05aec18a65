//! Turns parsed arguments into a [`Config`] and runs the generator.

use super::args::Cli;
use crate::config::Config;
use crate::exit::Ninja2CmakeExit;
use crate::generator;
use crate::reporting::{Reporter, Verbosity};
use anyhow::{Context, Result};

/// Builds the effective config: defaults, then the config file, then flags.
///
/// # Errors
/// Returns error if the config file cannot be loaded.
pub fn build_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(&cli.source_dir, cli.config.as_deref())
        .context("Failed to load config file")?;

    if let Some(product) = &cli.product_name {
        config.product_name = Some(product.clone());
    }
    if let Some(dir) = &cli.cmake_dir {
        config.output_dir = Some(dir.clone());
    }
    if let Some(platform) = cli.target_platform {
        config.target_platform = platform;
    }
    if let Some(transform) = &cli.transform_dir {
        config.transform_dir = Some(transform.clone());
    }
    if let Some(preserve) = &cli.preserve {
        config.preserve = preserve.clone();
    }
    config.verbosity = verbosity(cli);
    Ok(config)
}

fn verbosity(cli: &Cli) -> Verbosity {
    if cli.quiet {
        Verbosity::Quiet
    } else if cli.verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Executes a run.
///
/// # Errors
/// Returns error if configuration or generation fails.
pub fn execute(cli: &Cli) -> Result<Ninja2CmakeExit> {
    let config = build_config(cli)?;
    let reporter = Reporter::new(config.verbosity);
    generator::generate(&config, &reporter)?;
    Ok(Ninja2CmakeExit::Success)
}
