//! termpick CLI library.
//!
//! Argument parsing, config loading and log setup for the `termpick`
//! binary, plus the terminal-restoring panic hook.

use std::io::Write;
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

pub mod cli;
pub mod config;
pub mod logging;

pub use cli::{Cli, ColorMode, Commands, LogLevel, PickArgs};

static PANIC_HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

/// Install a panic hook that puts the terminal back before the panic
/// message is printed.
pub fn install_panic_hook() {
    // Only install once
    if PANIC_HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));
}

/// Best-effort terminal reset: cooked mode, visible cursor, default colors.
pub fn restore_terminal() {
    let _ = crossterm::terminal::disable_raw_mode();

    let mut stderr = std::io::stderr();
    let _ = crossterm::execute!(
        stderr,
        crossterm::style::ResetColor,
        crossterm::cursor::Show
    );
    // Move to new line (in case we were mid-line)
    let _ = writeln!(stderr);
    let _ = stderr.flush();
}

/// Applies `--color` to the process environment.
///
/// `never` sets `NO_COLOR`, `always` removes it, `auto` leaves it alone.
pub fn apply_color_mode(mode: ColorMode) {
    // SAFETY: called from main before any threads are spawned
    match mode {
        ColorMode::Never => unsafe { std::env::set_var("NO_COLOR", "1") },
        ColorMode::Always => unsafe { std::env::remove_var("NO_COLOR") },
        ColorMode::Auto => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_color_mode_never_sets_no_color() {
        let previous = std::env::var("NO_COLOR").ok();

        apply_color_mode(ColorMode::Never);
        assert_eq!(std::env::var("NO_COLOR").as_deref(), Ok("1"));

        apply_color_mode(ColorMode::Always);
        assert!(std::env::var("NO_COLOR").is_err());

        // SAFETY: serialized with the other tests touching the environment
        if let Some(value) = previous {
            unsafe { std::env::set_var("NO_COLOR", value) };
        }
    }

    #[test]
    fn test_panic_hook_installs_once() {
        install_panic_hook();
        install_panic_hook();
        assert!(PANIC_HOOK_INSTALLED.load(Ordering::SeqCst));
    }
}
