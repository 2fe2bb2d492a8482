//! Blocking key reader for terminal applications.
//!
//! [`InputReader`] puts the terminal into raw mode and reads key events
//! through crossterm. Everything that is not a key press (mouse, resize,
//! focus, key releases) is skipped, so callers see one keystroke per call.

use crate::keyboard::KeyEvent;
use crate::source::KeySource;
use crossterm::event::{self, Event as CrosstermEvent};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;
use thiserror::Error;

/// Error types for input reading operations.
#[derive(Debug, Error)]
pub enum InputError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The reader has not been initialized.
    #[error("Input reader not initialized")]
    NotInitialized,
    /// The reader is already initialized.
    #[error("Input reader already initialized")]
    AlreadyInitialized,
    /// A scripted key source ran out of keys.
    #[error("no more scripted keys")]
    Exhausted,
}

impl From<InputError> for termpick_core::Error {
    fn from(err: InputError) -> Self {
        match err {
            InputError::Io(io) => termpick_core::Error::Io(io),
            other => termpick_core::Error::Input(other.to_string()),
        }
    }
}

/// Result type for input operations.
pub type InputResult<T> = Result<T, InputError>;

/// Reads key events from the controlling terminal.
///
/// # Example
///
/// ```no_run
/// use termpick_input::{InputReader, KeySource};
///
/// let mut reader = InputReader::new();
/// reader.init().expect("Failed to initialize");
/// let key = reader.read_key().expect("read failed");
/// println!("got {key}");
/// ```
pub struct InputReader {
    initialized: bool,
    was_raw_mode: bool,
}

impl InputReader {
    /// Creates a reader; call [`InputReader::init`] before reading.
    #[must_use]
    pub fn new() -> Self {
        Self {
            initialized: false,
            was_raw_mode: false,
        }
    }

    /// Enables raw mode unless it is already on.
    pub fn init(&mut self) -> InputResult<()> {
        if self.initialized {
            return Err(InputError::AlreadyInitialized);
        }

        self.was_raw_mode = crossterm::terminal::is_raw_mode_enabled().unwrap_or(false);
        if !self.was_raw_mode {
            enable_raw_mode()?;
        }

        self.initialized = true;
        Ok(())
    }

    /// Restores the raw mode state found by [`InputReader::init`].
    pub fn cleanup(&mut self) -> InputResult<()> {
        if !self.initialized {
            return Ok(());
        }

        if !self.was_raw_mode {
            disable_raw_mode()?;
        }

        self.initialized = false;
        Ok(())
    }

    /// Returns true if the reader has been initialized.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl Default for InputReader {
    fn default() -> Self {
        Self::new()
    }
}

impl KeySource for InputReader {
    fn read_key(&mut self) -> InputResult<KeyEvent> {
        if !self.initialized {
            return Err(InputError::NotInitialized);
        }

        loop {
            match event::read()? {
                CrosstermEvent::Key(key) => {
                    let key = KeyEvent::from(key);
                    if !key.is_release() {
                        return Ok(key);
                    }
                }
                other => tracing::trace!(event = ?other, "skipping non-key event"),
            }
        }
    }
}

impl Drop for InputReader {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_not_initialized() {
        let mut reader = InputReader::new();
        assert!(!reader.is_initialized());
        assert!(matches!(reader.read_key(), Err(InputError::NotInitialized)));
    }

    #[test]
    fn test_cleanup_without_init_is_noop() {
        let mut reader = InputReader::default();
        assert!(reader.cleanup().is_ok());
    }

    #[test]
    fn test_error_converts_into_core_error() {
        let err: termpick_core::Error = InputError::Exhausted.into();
        assert!(matches!(err, termpick_core::Error::Input(msg) if msg == "no more scripted keys"));
    }

    // Reading real keys needs an attached terminal; exercise it by hand with
    // `termpick list ...`.
}
