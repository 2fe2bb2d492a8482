//! Log setup.
//!
//! The picker owns the terminal, so logs only ever go to a file.

use crate::cli::LogLevel;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable that picks the log level.
pub const LOG_LEVEL_ENV: &str = "TERMPICK_LOG_LEVEL";

/// Keeps the background log writer alive; logs are flushed when dropped.
pub struct LogGuard {
    _guard: WorkerGuard,
}

/// Picks the log level: `--trace`, then `-v`, then `--log-level`, then
/// `TERMPICK_LOG_LEVEL`, then the config file, then `info`.
pub fn resolve_level(
    trace: bool,
    verbose: bool,
    flag: Option<LogLevel>,
    env_level: Option<&str>,
    configured: Option<LogLevel>,
) -> LogLevel {
    if trace {
        LogLevel::Trace
    } else if verbose {
        LogLevel::Debug
    } else if let Some(level) = flag {
        level
    } else if let Some(level) = env_level.and_then(LogLevel::from_str_loose) {
        level
    } else {
        configured.unwrap_or_default()
    }
}

/// Builds the filter; `RUST_LOG` wins when it is set and valid.
fn build_filter(level: LogLevel) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return filter;
        }
    }
    EnvFilter::new(level.as_filter_str())
}

/// Sends all logs at `level` and above to `path`, appending.
pub fn init_file_logging(path: &Path, level: LogLevel) -> Result<LogGuard> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(build_filter(level))
        .with(file_layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::info!(level = level.as_filter_str(), "logging to {}", path.display());
    Ok(LogGuard { _guard: guard })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_beats_everything() {
        let level = resolve_level(true, true, Some(LogLevel::Error), Some("warn"), None);
        assert_eq!(level, LogLevel::Trace);
    }

    #[test]
    fn test_verbose_means_debug() {
        let level = resolve_level(false, true, Some(LogLevel::Error), None, None);
        assert_eq!(level, LogLevel::Debug);
    }

    #[test]
    fn test_flag_beats_env_and_config() {
        let level = resolve_level(
            false,
            false,
            Some(LogLevel::Warn),
            Some("trace"),
            Some(LogLevel::Error),
        );
        assert_eq!(level, LogLevel::Warn);
    }

    #[test]
    fn test_env_then_config_then_default() {
        assert_eq!(
            resolve_level(false, false, None, Some("DEBUG"), Some(LogLevel::Error)),
            LogLevel::Debug
        );
        assert_eq!(
            resolve_level(false, false, None, Some("bogus"), Some(LogLevel::Error)),
            LogLevel::Error
        );
        assert_eq!(resolve_level(false, false, None, None, None), LogLevel::Info);
    }
}
