//! The numbered menu selector.

use crate::options::SelectorOptions;
use termpick_core::{Error, Result, Tone};
use termpick_input::{KeyCode, KeyEvent, KeySource};
use termpick_terminal::{TerminalBackend, TerminalSession};

/// Largest menu that single digit keys can address.
pub const MENU_CAPACITY: usize = 9;

/// Row of the first numbered option.
const MENU_FIRST_ROW: u16 = 2;

/// A key as the menu understands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    /// Confirm the pending choice.
    Enter,
    /// A number key.
    Digit(u32),
    /// Anything else; ignored.
    Other,
}

impl From<KeyEvent> for MenuKey {
    fn from(key: KeyEvent) -> Self {
        if key.code == KeyCode::Enter {
            return MenuKey::Enter;
        }
        match key.printable_char().and_then(|ch| ch.to_digit(10)) {
            Some(digit) => MenuKey::Digit(digit),
            None => MenuKey::Other,
        }
    }
}

/// Progress through a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    /// No option picked yet.
    #[default]
    Idle,
    /// Option `index` is highlighted and waits for Enter.
    Pending {
        /// Zero-based option index.
        index: usize,
    },
    /// Option `index` was confirmed.
    Confirmed {
        /// Zero-based option index.
        index: usize,
    },
}

impl MenuState {
    /// Returns the next state for a menu of `count` options.
    ///
    /// Digits `1..=count` pick an option, Enter confirms a picked one.
    /// Everything else leaves the state as it is.
    #[must_use]
    pub fn step(self, count: usize, key: MenuKey) -> Self {
        match (self, key) {
            (MenuState::Confirmed { .. }, _) => self,
            (MenuState::Pending { index }, MenuKey::Enter) => MenuState::Confirmed { index },
            (_, MenuKey::Digit(digit)) => match usize::try_from(digit) {
                Ok(number) if (1..=count).contains(&number) => MenuState::Pending { index: number - 1 },
                _ => self,
            },
            _ => self,
        }
    }

    /// The highlighted option, if any.
    #[must_use]
    pub fn pending(self) -> Option<usize> {
        match self {
            MenuState::Pending { index } => Some(index),
            _ => None,
        }
    }

    /// The confirmed option, if any.
    #[must_use]
    pub fn choice(self) -> Option<usize> {
        match self {
            MenuState::Confirmed { index } => Some(index),
            _ => None,
        }
    }
}

/// Lets the user pick one of up to nine options with the number keys.
pub struct MenuSelector<'a, S> {
    title: &'a str,
    options: &'a [S],
    settings: SelectorOptions,
}

impl<'a, S: AsRef<str>> MenuSelector<'a, S> {
    /// Creates a menu with default settings.
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

    /// Runs the menu until a picked option is confirmed with Enter.
    pub fn run<B, K>(&self, backend: &mut B, keys: &mut K) -> Result<usize>
    where
        B: TerminalBackend,
        K: KeySource,
    {
        match self.options.len() {
            0 => return Err(Error::NoOptions),
            count if count > MENU_CAPACITY => {
                return Err(Error::TooManyOptions {
                    count,
                    max: MENU_CAPACITY,
                });
            }
            _ => {}
        }

        let mut session = TerminalSession::begin(backend, true)?;
        self.draw(&mut *session, None)?;

        let mut state = MenuState::Idle;
        loop {
            session.flush()?;
            let key = keys.read_key()?;
            let next = state.step(self.options.len(), MenuKey::from(key));

            if let Some(index) = next.choice() {
                session.finish()?;
                tracing::debug!(index, "menu choice confirmed");
                return Ok(index);
            }
            if next != state {
                tracing::debug!(%key, to = ?next, "menu transition");
                self.draw(&mut *session, next.pending())?;
            }
            state = next;
        }
    }

    fn draw<B: TerminalBackend>(&self, backend: &mut B, pending: Option<usize>) -> Result<()> {
        let palette = &self.settings.palette;

        backend.clear()?;
        backend.set_foreground(palette.color(Tone::Default))?;
        backend.move_cursor(0, 0)?;
        backend.write_str(self.title)?;
        backend.move_cursor(0, MENU_FIRST_ROW - 1)?;
        backend.write_str(&self.settings.rule)?;

        for (index, option) in self.options.iter().enumerate() {
            backend.move_cursor(0, menu_row(index))?;
            backend.write_str(&menu_line(index, option.as_ref()))?;
        }
        backend.move_cursor(0, menu_row(self.options.len()))?;
        backend.write_str(&self.settings.rule)?;

        if let Some(index) = pending {
            let option = self.options.get(index).map_or("", |option| option.as_ref());
            backend.set_foreground(palette.color(Tone::Highlight))?;
            backend.move_cursor(0, menu_row(index))?;
            backend.write_str(&menu_line(index, option))?;
        }
        Ok(())
    }
}

fn menu_row(index: usize) -> u16 {
    u16::try_from(index).map_or(u16::MAX, |index| MENU_FIRST_ROW.saturating_add(index))
}

fn menu_line(index: usize, option: &str) -> String {
    format!("{} - {}", index + 1, option)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_in_range_picks() {
        let state = MenuState::Idle.step(3, MenuKey::Digit(2));
        assert_eq!(state, MenuState::Pending { index: 1 });
    }

    #[test]
    fn test_out_of_range_digits_are_ignored() {
        let pending = MenuState::Pending { index: 0 };
        assert_eq!(pending.step(3, MenuKey::Digit(0)), pending);
        assert_eq!(pending.step(3, MenuKey::Digit(4)), pending);
        assert_eq!(MenuState::Idle.step(3, MenuKey::Digit(9)), MenuState::Idle);
    }

    #[test]
    fn test_enter_needs_pending_choice() {
        assert_eq!(MenuState::Idle.step(3, MenuKey::Enter), MenuState::Idle);
        let done = MenuState::Pending { index: 2 }.step(3, MenuKey::Enter);
        assert_eq!(done.choice(), Some(2));
    }

    #[test]
    fn test_repick_replaces_pending() {
        let state = MenuState::Idle
            .step(5, MenuKey::Digit(4))
            .step(5, MenuKey::Digit(1));
        assert_eq!(state.pending(), Some(0));
    }

    #[test]
    fn test_menu_key_from_event() {
        assert_eq!(MenuKey::from(KeyEvent::char('7')), MenuKey::Digit(7));
        assert_eq!(MenuKey::from(KeyEvent::from(KeyCode::Enter)), MenuKey::Enter);
        assert_eq!(MenuKey::from(KeyEvent::char('x')), MenuKey::Other);
    }

    #[test]
    fn test_draw_highlights_pending_line() {
        use termpick_core::Palette;
        use termpick_terminal::MemoryBackend;

        let options = ["Start", "Options", "Quit"];
        let menu = MenuSelector::new("Main menu", &options);
        let mut screen = MemoryBackend::new(30, 8);
        menu.draw(&mut screen, Some(1)).unwrap();

        assert_eq!(
            screen.lines(),
            vec![
                "Main menu",
                "-------------------",
                "1 - Start",
                "2 - Options",
                "3 - Quit",
                "-------------------",
                "",
                "",
            ]
        );
        let palette = Palette::default();
        assert_eq!(
            screen.styled_runs(3),
            vec![("2 - Options".to_string(), palette.highlight)]
        );
        assert_eq!(
            screen.styled_runs(2),
            vec![("1 - Start".to_string(), palette.default)]
        );
    }

    #[test]
    fn test_menu_line() {
        assert_eq!(menu_line(0, "Start"), "1 - Start");
        assert_eq!(menu_row(0), 2);
    }
}
