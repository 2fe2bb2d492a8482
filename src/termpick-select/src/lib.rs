//! # `termpick` Select
//!
//! Two in-terminal pickers that return the zero-based index of the chosen
//! option:
//!
//! - [`show_menu`]: numbered options, pick with a digit, confirm with Enter.
//! - [`show_list`]: type the beginning of an option (case-insensitive) or
//!   move with Up/Down, confirm with Enter.
//!
//! Both draw through a [`TerminalBackend`](termpick_terminal::TerminalBackend)
//! and read from a [`KeySource`](termpick_input::KeySource), so
//! [`ListSelector`] and [`MenuSelector`] can also run against an in-memory
//! screen and scripted keys.
//!
//! ```no_run
//! let options = ["Apple", "Apricot", "Banana"];
//! let index = termpick_select::show_list("Fruit: ", &options)?;
//! println!("picked {}", options[index]);
//! # Ok::<(), termpick_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod list;
pub mod menu;
pub mod options;
pub mod render;
pub mod search;

pub use list::ListSelector;
pub use menu::{MENU_CAPACITY, MenuKey, MenuSelector, MenuState};
pub use options::SelectorOptions;
pub use render::ListPainter;
pub use search::{HEADER_ROWS, ListKey, Paint, SearchState, Transition, prefix_matches};

use termpick_core::Result;
use termpick_input::InputReader;
use termpick_terminal::CrosstermBackend;

/// Shows the incremental-search list on the real terminal.
pub fn show_list<S: AsRef<str>>(title: &str, options: &[S]) -> Result<usize> {
    show_list_with(title, options, SelectorOptions::default())
}

/// [`show_list`] with custom settings.
pub fn show_list_with<S: AsRef<str>>(
    title: &str,
    options: &[S],
    settings: SelectorOptions,
) -> Result<usize> {
    let (mut backend, mut reader) = open_terminal()?;
    ListSelector::new(title, options)
        .with_options(settings)
        .run(&mut backend, &mut reader)
}

/// Shows the numbered menu on the real terminal.
pub fn show_menu<S: AsRef<str>>(title: &str, options: &[S]) -> Result<usize> {
    show_menu_with(title, options, SelectorOptions::default())
}

/// [`show_menu`] with custom settings.
pub fn show_menu_with<S: AsRef<str>>(
    title: &str,
    options: &[S],
    settings: SelectorOptions,
) -> Result<usize> {
    let (mut backend, mut reader) = open_terminal()?;
    MenuSelector::new(title, options)
        .with_options(settings)
        .run(&mut backend, &mut reader)
}

fn open_terminal() -> Result<(CrosstermBackend, InputReader)> {
    let backend = CrosstermBackend::new()?;
    let mut reader = InputReader::new();
    reader.init()?;
    Ok((backend, reader))
}
