//! CLI argument parsing and command dispatch.
//!
//! - `args` - Command-line argument structures
//! - `handlers` - Command execution

pub mod args;
pub mod handlers;

pub use args::{Cli, ColorMode, Commands, LogLevel, PickArgs};
pub use handlers::{collect_options, dispatch_command, format_choice};
