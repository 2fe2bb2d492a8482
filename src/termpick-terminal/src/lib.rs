//! Terminal backend for termpick.
//!
//! - [`TerminalBackend`]: the screen operations the selectors draw with
//! - [`CrosstermBackend`]: the real terminal, with color downgrading
//! - [`MemoryBackend`]: an inspectable in-memory screen
//! - [`TerminalSession`]: raw mode for a scope, restored on every exit path

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod capabilities;
pub mod memory;
pub mod session;

pub use backend::{CrosstermBackend, TerminalBackend};
pub use capabilities::{Capabilities, ColorMode};
pub use memory::{Cell, MemoryBackend};
pub use session::TerminalSession;
