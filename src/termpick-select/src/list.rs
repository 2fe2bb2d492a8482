//! The incremental-search list selector.

use crate::options::SelectorOptions;
use crate::render::ListPainter;
use crate::search::{ListKey, SearchState};
use termpick_core::{Error, Result};
use termpick_input::KeySource;
use termpick_terminal::{TerminalBackend, TerminalSession};

/// Lets the user pick an option by typing its beginning or moving with
/// the arrow keys.
///
/// ```
/// use termpick_input::{KeyCode, ScriptedKeys};
/// use termpick_select::ListSelector;
/// use termpick_terminal::MemoryBackend;
///
/// let options = ["Apple", "Apricot", "Banana"];
/// let mut screen = MemoryBackend::new(40, 10);
/// let mut keys = ScriptedKeys::typed("apr").then(KeyCode::Enter);
///
/// let choice = ListSelector::new("Fruit: ", &options)
///     .run(&mut screen, &mut keys)
///     .unwrap();
/// assert_eq!(choice, 1);
/// ```
pub struct ListSelector<'a, S> {
    title: &'a str,
    options: &'a [S],
    settings: SelectorOptions,
}

impl<'a, S: AsRef<str>> ListSelector<'a, S> {
    /// Creates a selector with default settings.
    pub fn new(title: &'a str, options: &'a [S]) -> Self {
        Self {
            title,
            options,
            settings: SelectorOptions::default(),
        }
    }

    /// Replaces the settings.
    #[must_use]
    pub fn with_options(mut self, settings: SelectorOptions) -> Self {
        self.settings = settings;
        self
    }

    /// Runs the selector until Enter is pressed on a match.
    ///
    /// Returns the zero-based index of the chosen option. The terminal is
    /// restored before returning, on success and on error.
    pub fn run<B, K>(&self, backend: &mut B, keys: &mut K) -> Result<usize>
    where
        B: TerminalBackend,
        K: KeySource,
    {
        if self.options.is_empty() {
            return Err(Error::NoOptions);
        }

        let painter = ListPainter::new(self.title, self.options, &self.settings);
        let mut session = TerminalSession::begin(backend, false)?;
        painter.frame(&mut *session)?;

        let mut state = SearchState::Empty;
        loop {
            painter.place_cursor(&mut *session, state.term())?;
            session.flush()?;

            let key = keys.read_key()?;
            let transition = state.step(self.options, ListKey::from(key));
            if transition.state != state {
                tracing::debug!(%key, from = ?state, to = ?transition.state, "list transition");
            }

            for paint in transition.paints {
                painter.apply(&mut *session, paint)?;
            }
            state = transition.state;

            if let Some(index) = state.choice() {
                session.finish()?;
                tracing::debug!(index, "list choice confirmed");
                return Ok(index);
            }
        }
    }
}
