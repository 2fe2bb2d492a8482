//! Key sources: anything that hands out one key event per call.

use crate::keyboard::{KeyCode, KeyEvent};
use crate::reader::{InputError, InputResult};
use std::collections::VecDeque;

/// A blocking supplier of key events.
///
/// Implementations return exactly one key per call, without interpreting
/// it; the selectors decide what a key means.
pub trait KeySource {
    /// Blocks until the next key event is available.
    fn read_key(&mut self) -> InputResult<KeyEvent>;
}

impl<K: KeySource + ?Sized> KeySource for &mut K {
    fn read_key(&mut self) -> InputResult<KeyEvent> {
        (**self).read_key()
    }
}

/// A prerecorded sequence of keys.
///
/// Used to drive selectors headlessly. Once the script is used up,
/// [`KeySource::read_key`] fails with [`InputError::Exhausted`].
///
/// ```
/// use termpick_input::{KeyCode, KeySource, ScriptedKeys};
///
/// let mut keys = ScriptedKeys::typed("ap").then(KeyCode::Enter);
/// assert_eq!(keys.read_key().unwrap().code, KeyCode::Char('a'));
/// assert_eq!(keys.remaining(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<KeyEvent>,
}

impl ScriptedKeys {
    /// Creates an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a script that types each character of `text`.
    #[must_use]
    pub fn typed(text: &str) -> Self {
        Self::new().then_type(text)
    }

    /// Appends one key.
    #[must_use]
    pub fn then(mut self, key: impl Into<KeyEvent>) -> Self {
        self.keys.push_back(key.into());
        self
    }

    /// Appends `count` presses of the same key.
    #[must_use]
    pub fn then_repeat(mut self, code: KeyCode, count: usize) -> Self {
        self.keys
            .extend(std::iter::repeat_n(KeyEvent::from(code), count));
        self
    }

    /// Appends a key press for each character of `text`.
    #[must_use]
    pub fn then_type(mut self, text: &str) -> Self {
        self.keys.extend(text.chars().map(KeyEvent::char));
        self
    }

    /// Number of keys not yet read.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn read_key(&mut self) -> InputResult<KeyEvent> {
        self.keys.pop_front().ok_or(InputError::Exhausted)
    }
}

impl FromIterator<KeyEvent> for ScriptedKeys {
    fn from_iter<T: IntoIterator<Item = KeyEvent>>(iter: T) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}
