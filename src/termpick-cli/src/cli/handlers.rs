//! Command execution.

use crate::cli::{Commands, PickArgs};
use anyhow::{Context, Result, bail};
use std::io::{self, BufRead};
use termpick_input::InputReader;
use termpick_select::{ListSelector, MenuSelector, SelectorOptions};
use termpick_terminal::CrosstermBackend;

/// Runs the picker for `command` and returns the line to print.
pub fn dispatch_command(command: &Commands, settings: SelectorOptions) -> Result<String> {
    let args = command.pick_args();
    let stdin = io::stdin();
    let options = collect_options(args, stdin.lock())?;
    if options.is_empty() {
        bail!("No options given: pass them as arguments or with --stdin");
    }

    tracing::debug!(count = options.len(), title = %args.title, "starting picker");

    // Draw on stderr so stdout carries only the result.
    let mut backend = CrosstermBackend::stderr()?;
    let mut keys = InputReader::new();
    keys.init().context("Failed to read from the terminal")?;

    let index = match command {
        Commands::List(_) => ListSelector::new(&args.title, &options)
            .with_options(settings)
            .run(&mut backend, &mut keys)?,
        Commands::Menu(_) => MenuSelector::new(&args.title, &options)
            .with_options(settings)
            .run(&mut backend, &mut keys)?,
    };

    Ok(format_choice(args, &options, index))
}

/// Options from the command line, followed by the non-empty lines of
/// `input` when `--stdin` is given.
pub fn collect_options<R: BufRead>(args: &PickArgs, input: R) -> Result<Vec<String>> {
    let mut options = args.options.clone();
    if args.stdin {
        for line in input.lines() {
            let line = line.context("Failed to read options from stdin")?;
            let line = line.trim_end_matches('\r');
            if !line.trim().is_empty() {
                options.push(line.to_string());
            }
        }
    }
    Ok(options)
}

/// What to print for the chosen option.
pub fn format_choice(args: &PickArgs, options: &[String], index: usize) -> String {
    if args.print_option {
        options.get(index).cloned().unwrap_or_default()
    } else {
        index.to_string()
    }
}
