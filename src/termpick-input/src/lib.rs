//! # `termpick` Input
//!
//! Keyboard input for the termpick selectors.
//!
//! - **Keyboard types**: [`KeyEvent`], [`KeyCode`] and [`KeyModifiers`],
//!   converted from crossterm.
//! - **Key sources**: the [`KeySource`] trait with a terminal-backed
//!   [`InputReader`] and a prerecorded [`ScriptedKeys`] for headless use.
//!
//! ## Quick Start
//!
//! ```no_run
//! use termpick_input::{InputReader, KeyCode, KeySource};
//!
//! let mut reader = InputReader::new();
//! reader.init().expect("Failed to initialize input reader");
//!
//! loop {
//!     let key = reader.read_key().expect("read failed");
//!     if key.code == KeyCode::Enter {
//!         break;
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod keyboard;
pub mod reader;
pub mod source;

pub use keyboard::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
pub use reader::{InputError, InputReader, InputResult};
pub use source::{KeySource, ScriptedKeys};
