//! Core types for `termpick`.
//!
//! This crate provides the building blocks shared by the termpick crates:
//!
//! - [`color`]: terminal colors with name/hex parsing and palette downgrades
//! - [`palette`]: the color roles a selector paints with
//! - [`error`]: error types for the selectors and the terminal layer
//!
//! # Examples
//!
//! ```
//! use termpick_core::{Color, Palette, Tone};
//!
//! let mut palette = Palette::default();
//! palette.highlight = "cyan".parse::<Color>().unwrap();
//!
//! assert_eq!(palette.color(Tone::Highlight).to_ansi_256(), Some(14));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod color;
pub mod error;
pub mod palette;

pub use color::{Color, NamedColor};
pub use error::{ColorParseError, Error, Result};
pub use palette::{Palette, Tone};
