//! termpick - pick one option in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use termpick_cli::cli::dispatch_command;
use termpick_cli::logging::{self, LOG_LEVEL_ENV};
use termpick_cli::{Cli, apply_color_mode, config, install_panic_hook};

fn main() -> Result<()> {
    install_panic_hook();

    let cli = Cli::parse();
    apply_color_mode(cli.color);

    let config = config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let env_level = std::env::var(LOG_LEVEL_ENV).ok();
    let log_level = logging::resolve_level(
        cli.trace,
        cli.verbose,
        cli.log_level,
        env_level.as_deref(),
        config.log.level,
    );
    let _log_guard = match cli.log_file.as_ref().or(config.log.file.as_ref()) {
        Some(path) => Some(logging::init_file_logging(path, log_level)?),
        None => None,
    };

    let output = dispatch_command(&cli.command, config.selector)?;
    println!("{output}");
    Ok(())
}
