//! CLI argument structures.

use clap::{Args, Parser, Subcommand};
use serde::Deserialize;
use std::path::PathBuf;

/// Log verbosity level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors
    Warn,
    /// Show informational messages, warnings, and errors (default)
    #[default]
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace-level details
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<LogLevel> {
        match s.to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Color output mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Use colors unless NO_COLOR is set or the terminal has none
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// termpick - pick one option in the terminal
///
/// Prints the zero-based index of the chosen option.
#[derive(Debug, Parser)]
#[command(name = "termpick", author, version)]
#[command(about = "Pick one option in the terminal", long_about = None)]
pub struct Cli {
    /// Path to the config file (default: $TERMPICK_HOME/config.toml)
    #[arg(long = "config", global = true, env = "TERMPICK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Control color output: auto (default), always, or never
    #[arg(long = "color", global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Write logs to this file (the terminal is busy with the picker)
    #[arg(long = "log-file", global = true, env = "TERMPICK_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level for the log file
    #[arg(long = "log-level", global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (same as --log-level debug)
    #[arg(long = "verbose", short = 'v', global = true)]
    pub verbose: bool,

    /// Enable trace-level logging
    #[arg(long = "trace", global = true)]
    pub trace: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available pickers.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search the options by typing, or move with the arrow keys
    List(PickArgs),
    /// Numbered menu of up to nine options, pick with a digit
    Menu(PickArgs),
}

impl Commands {
    /// Arguments shared by every picker.
    pub fn pick_args(&self) -> &PickArgs {
        match self {
            Commands::List(args) | Commands::Menu(args) => args,
        }
    }
}

/// Arguments shared by both pickers.
#[derive(Debug, Args)]
pub struct PickArgs {
    /// Title shown above the options
    pub title: String,

    /// Options to choose from
    pub options: Vec<String>,

    /// Read additional options from stdin, one per line
    #[arg(long = "stdin")]
    pub stdin: bool,

    /// Print the chosen option instead of its index
    #[arg(long = "print-option")]
    pub print_option: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_log_level_default() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn test_log_level_from_str_loose() {
        assert_eq!(LogLevel::from_str_loose("WARNING"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::from_str_loose("TrAcE"), Some(LogLevel::Trace));
        assert_eq!(LogLevel::from_str_loose("loud"), None);
    }

    #[test]
    fn test_parse_list_command() {
        let cli = Cli::try_parse_from([
            "termpick", "--color", "never", "list", "Fruit: ", "Apple", "Banana",
        ])
        .unwrap();

        assert_eq!(cli.color, ColorMode::Never);
        let Commands::List(args) = &cli.command else {
            panic!("expected list command");
        };
        assert_eq!(args.title, "Fruit: ");
        assert_eq!(args.options, vec!["Apple", "Banana"]);
        assert!(!args.stdin);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "termpick", "menu", "Main", "Start", "--print-option", "-v", "--log-level", "trace",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.log_level, Some(LogLevel::Trace));
        assert!(cli.command.pick_args().print_option);
    }

    #[test]
    fn test_title_is_required() {
        assert!(Cli::try_parse_from(["termpick", "list"]).is_err());
    }
}
