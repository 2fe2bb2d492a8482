//! Key events as the selectors see them.
//!
//! crossterm reports far more keys than a picker reacts to. Everything the
//! selectors ignore collapses into [`KeyCode::Other`] so matches stay short.

use bitflags::bitflags;
use std::fmt;

/// Press, auto-repeat or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key went down.
    #[default]
    Press,
    /// Key is held and repeating.
    Repeat,
    /// Key came up. Only reported with the kitty keyboard protocol or on Windows.
    Release,
}

impl From<crossterm::event::KeyEventKind> for KeyEventKind {
    fn from(kind: crossterm::event::KeyEventKind) -> Self {
        use crossterm::event::KeyEventKind as CT;
        match kind {
            CT::Press => Self::Press,
            CT::Repeat => Self::Repeat,
            CT::Release => Self::Release,
        }
    }
}

/// Keys with a distinct meaning somewhere in a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Backspace.
    Backspace,
    /// Enter / Return.
    Enter,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Escape.
    Esc,
    /// A character key, including digits and space.
    Char(char),
    /// Any key without a meaning here (other arrows, function keys, media keys).
    Other,
}

impl KeyCode {
    fn label(self) -> &'static str {
        match self {
            Self::Backspace => "backspace",
            Self::Enter => "enter",
            Self::Up => "up",
            Self::Down => "down",
            Self::Esc => "esc",
            Self::Char(_) => "char",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(' ') => f.write_str("space"),
            Self::Char(c) => write!(f, "{c}"),
            other => f.write_str(other.label()),
        }
    }
}

impl From<crossterm::event::KeyCode> for KeyCode {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode as CT;
        match code {
            CT::Backspace => Self::Backspace,
            CT::Enter => Self::Enter,
            CT::Up => Self::Up,
            CT::Down => Self::Down,
            CT::Esc => Self::Esc,
            CT::Char(c) => Self::Char(c),
            _ => Self::Other,
        }
    }
}

bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyModifiers: u8 {
        /// No modifiers.
        const NONE = 0;
        /// Shift.
        const SHIFT = 1 << 0;
        /// Control.
        const CONTROL = 1 << 1;
        /// Alt / Option.
        const ALT = 1 << 2;
        /// Super, Hyper or Meta.
        const SUPER = 1 << 3;
    }
}

impl KeyModifiers {
    /// Modifiers that turn a character key into a shortcut.
    pub const CHORD: Self = Self::CONTROL.union(Self::ALT).union(Self::SUPER);
}

impl From<crossterm::event::KeyModifiers> for KeyModifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers as CT;
        [
            (CT::SHIFT, Self::SHIFT),
            (CT::CONTROL, Self::CONTROL),
            (CT::ALT, Self::ALT),
            (CT::SUPER | CT::HYPER | CT::META, Self::SUPER),
        ]
        .into_iter()
        .filter(|(ct, _)| mods.intersects(*ct))
        .fold(Self::NONE, |acc, (_, flag)| acc | flag)
    }
}

/// One key event read from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// Which key.
    pub code: KeyCode,
    /// Modifiers held at the time.
    pub modifiers: KeyModifiers,
    /// Press, repeat or release.
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// A key press with the given modifiers.
    #[must_use]
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self {
            code,
            modifiers,
            kind: KeyEventKind::Press,
        }
    }

    /// An unmodified character press.
    #[must_use]
    pub fn char(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    /// Returns true if this is a key release event.
    #[must_use]
    pub fn is_release(&self) -> bool {
        self.kind == KeyEventKind::Release
    }

    /// The character this key types, if it types one.
    ///
    /// Shift only picks the case, so it is allowed. Control, Alt and Super
    /// make a shortcut rather than text.
    #[must_use]
    pub fn printable_char(&self) -> Option<char> {
        if self.modifiers.intersects(KeyModifiers::CHORD) {
            return None;
        }
        match self.code {
            KeyCode::Char(c) if !c.is_control() => Some(c),
            _ => None,
        }
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (flag, prefix) in [
            (KeyModifiers::CONTROL, "C-"),
            (KeyModifiers::ALT, "M-"),
            (KeyModifiers::SUPER, "S-"),
        ] {
            if self.modifiers.contains(flag) {
                f.write_str(prefix)?;
            }
        }
        write!(f, "{}", self.code)
    }
}

impl From<KeyCode> for KeyEvent {
    fn from(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }
}

impl From<crossterm::event::KeyEvent> for KeyEvent {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        Self {
            code: event.code.into(),
            modifiers: event.modifiers.into(),
            kind: event.kind.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event as ct;

    #[test]
    fn test_unhandled_keys_collapse_to_other() {
        assert_eq!(KeyCode::from(ct::KeyCode::Left), KeyCode::Other);
        assert_eq!(KeyCode::from(ct::KeyCode::F(5)), KeyCode::Other);
        assert_eq!(KeyCode::from(ct::KeyCode::Tab), KeyCode::Other);
        assert_eq!(KeyCode::from(ct::KeyCode::Down), KeyCode::Down);
    }

    #[test]
    fn test_printable_char() {
        assert_eq!(KeyEvent::char('a').printable_char(), Some('a'));
        assert_eq!(KeyEvent::char(' ').printable_char(), Some(' '));
        assert_eq!(
            KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT).printable_char(),
            Some('A')
        );
        assert_eq!(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL).printable_char(),
            None
        );
        assert_eq!(KeyEvent::char('\t').printable_char(), None);
        assert_eq!(KeyEvent::from(KeyCode::Enter).printable_char(), None);
    }

    #[test]
    fn test_display_for_logs() {
        assert_eq!(KeyEvent::char('q').to_string(), "q");
        assert_eq!(KeyEvent::char(' ').to_string(), "space");
        assert_eq!(KeyEvent::from(KeyCode::Backspace).to_string(), "backspace");
        let chord = KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL | KeyModifiers::ALT,
        );
        assert_eq!(chord.to_string(), "C-M-c");
    }

    #[test]
    fn test_crossterm_conversion() {
        let event: KeyEvent =
            ct::KeyEvent::new(ct::KeyCode::Char('q'), ct::KeyModifiers::ALT | ct::KeyModifiers::META).into();
        assert_eq!(event.code, KeyCode::Char('q'));
        assert_eq!(event.modifiers, KeyModifiers::ALT | KeyModifiers::SUPER);
        assert_eq!(event.kind, KeyEventKind::Press);
        assert_eq!(event.printable_char(), None);

        let release = ct::KeyEvent::new_with_kind(
            ct::KeyCode::Enter,
            ct::KeyModifiers::NONE,
            ct::KeyEventKind::Release,
        );
        assert!(KeyEvent::from(release).is_release());
    }
}
