//! Configuration file loading.
//!
//! The config lives in `config.toml` under the termpick home directory:
//! `$TERMPICK_HOME` if set, otherwise `~/.termpick`.
//!
//! ```toml
//! [selector]
//! flash_ms = 80
//! rule = "==================="
//!
//! [selector.palette]
//! highlight = "cyan"
//! muted_highlight = "#008080"
//!
//! [log]
//! level = "debug"
//! file = "/tmp/termpick.log"
//! ```

use crate::cli::LogLevel;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use termpick_select::SelectorOptions;
use thiserror::Error;

/// Environment variable overriding the termpick home directory.
pub const HOME_ENV: &str = "TERMPICK_HOME";

/// Home directory name under the user's home.
pub const HOME_DIR_NAME: &str = ".termpick";

/// Config file name inside the home directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Everything `config.toml` can set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Picker appearance and timing.
    pub selector: SelectorOptions,
    /// Log output.
    pub log: LogConfig,
}

/// The `[log]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Level used when no flag or environment variable picks one.
    pub level: Option<LogLevel>,
    /// Log file used when `--log-file` is not given.
    pub file: Option<PathBuf>,
}

/// The termpick home directory.
pub fn termpick_home() -> Option<PathBuf> {
    if let Ok(home) = std::env::var(HOME_ENV) {
        if !home.is_empty() {
            return Some(PathBuf::from(home));
        }
    }
    dirs::home_dir().map(|home| home.join(HOME_DIR_NAME))
}

/// Where the config file is looked up when `--config` is not given.
pub fn default_config_path() -> Option<PathBuf> {
    termpick_home().map(|home| home.join(CONFIG_FILE_NAME))
}

/// Loads the configuration.
///
/// An explicit path must exist. The default path is optional: if it is
/// missing, defaults are used.
pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return load_from(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => load_from(&path),
        Some(path) => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Config::default())
        }
        None => Ok(Config::default()),
    }
}

/// Loads and parses one config file.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    let config: Config = toml::from_str(&content).map_err(|source| ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use std::time::Duration;
    use termpick_core::{Color, NamedColor};

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE_NAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_full_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r##"
            [selector]
            flash_ms = 80

            [selector.palette]
            highlight = "cyan"
            muted_highlight = "#008080"

            [log]
            level = "debug"
            "##,
        );

        let config = load_from(&path).unwrap();
        assert_eq!(config.selector.flash, Duration::from_millis(80));
        assert_eq!(
            config.selector.palette.highlight,
            Color::Named(NamedColor::Cyan)
        );
        assert_eq!(
            config.selector.palette.muted_highlight,
            Color::Rgb(0, 0x80, 0x80)
        );
        assert_eq!(config.log.level, Some(LogLevel::Debug));
        assert_eq!(config.log.file, None);
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "");
        assert_eq!(load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_bad_color_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[selector.palette]\nalert = \"not-a-color\"\n");

        let err = load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = load(Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    #[serial]
    fn test_home_override() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "[selector]\nrule = \"==\"\n");

        // SAFETY: serialized with the other tests touching the environment
        unsafe { std::env::set_var(HOME_ENV, dir.path()) };
        let path = default_config_path();
        let config = load(None);
        unsafe { std::env::remove_var(HOME_ENV) };

        assert_eq!(path, Some(dir.path().join(CONFIG_FILE_NAME)));
        assert_eq!(config.unwrap().selector.rule, "==");
    }

    #[test]
    #[serial]
    fn test_missing_default_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();

        // SAFETY: serialized with the other tests touching the environment
        unsafe { std::env::set_var(HOME_ENV, dir.path()) };
        let config = load(None);
        unsafe { std::env::remove_var(HOME_ENV) };

        assert_eq!(config.unwrap(), Config::default());
    }
}
