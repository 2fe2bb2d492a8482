//! Error types for termpick operations.

use thiserror::Error;

/// Core error type shared by the termpick crates.
#[derive(Error, Debug)]
pub enum Error {
    /// An I/O error occurred while talking to the terminal.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Reading a key event failed.
    #[error("Input error: {0}")]
    Input(String),

    /// A selector was invoked without any options to choose from.
    #[error("no options to choose from")]
    NoOptions,

    /// A selector was given more options than it can address.
    #[error("too many options: {count} > {max}")]
    TooManyOptions {
        /// Number of options supplied.
        count: usize,
        /// Largest number of options the selector supports.
        max: usize,
    },
}

/// Result type alias using the core Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for color parsing operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input string was empty.
    #[error("empty input")]
    EmptyInput,

    /// Hex string had an invalid length.
    #[error("invalid hex length: {0} (expected 3 or 6)")]
    InvalidLength(usize),

    /// Invalid hexadecimal character.
    #[error("invalid hex character")]
    InvalidHexChar,

    /// `ansi:N` with N outside 0-255 or not a number.
    #[error("invalid palette index: {0}")]
    InvalidIndex(String),

    /// Unknown color name.
    #[error("unknown color name: {0}")]
    UnknownColor(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::TooManyOptions { count: 12, max: 9 };
        assert_eq!(err.to_string(), "too many options: 12 > 9");
        assert_eq!(Error::NoOptions.to_string(), "no options to choose from");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
