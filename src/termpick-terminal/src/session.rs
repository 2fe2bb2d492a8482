//! Scoped terminal session.

use crate::backend::TerminalBackend;
use std::ops::{Deref, DerefMut};
use termpick_core::Result;

/// Puts a backend into raw mode for the lifetime of the guard.
///
/// Ending the session, either through [`TerminalSession::finish`] or by
/// dropping the guard on an error path, resets the text color, clears the
/// screen, homes and shows the cursor, and leaves raw mode.
pub struct TerminalSession<'a, B: TerminalBackend> {
    backend: &'a mut B,
    restored: bool,
}

impl<'a, B: TerminalBackend> TerminalSession<'a, B> {
    /// Starts a session, optionally hiding the cursor.
    pub fn begin(backend: &'a mut B, hide_cursor: bool) -> Result<Self> {
        backend.enter_raw_mode()?;
        let mut session = Self {
            backend,
            restored: false,
        };
        if hide_cursor {
            session.backend.hide_cursor()?;
        }
        Ok(session)
    }

    /// Ends the session and reports any failure to restore the terminal.
    pub fn finish(mut self) -> Result<()> {
        self.restore()
    }

    fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        let backend = &mut *self.backend;
        backend.reset_style()?;
        backend.clear()?;
        backend.move_cursor(0, 0)?;
        backend.show_cursor()?;
        backend.flush()?;
        backend.exit_raw_mode()
    }
}

impl<B: TerminalBackend> Deref for TerminalSession<'_, B> {
    type Target = B;

    fn deref(&self) -> &B {
        &*self.backend
    }
}

impl<B: TerminalBackend> DerefMut for TerminalSession<'_, B> {
    fn deref_mut(&mut self) -> &mut B {
        &mut *self.backend
    }
}

impl<B: TerminalBackend> Drop for TerminalSession<'_, B> {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            tracing::warn!(error = %err, "failed to restore terminal");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryBackend;
    use termpick_core::{Color, NamedColor};

    #[test]
    fn test_finish_restores_terminal() {
        let mut screen = MemoryBackend::new(20, 4);
        let mut session = TerminalSession::begin(&mut screen, true).unwrap();
        assert!(session.is_raw_mode());
        assert!(!session.is_cursor_visible());

        session
            .set_foreground(Color::Named(NamedColor::Green))
            .unwrap();
        session.write_str("picked").unwrap();
        session.finish().unwrap();

        assert!(!screen.is_raw_mode());
        assert!(screen.is_cursor_visible());
        assert_eq!(screen.foreground(), Color::Reset);
        assert_eq!(screen.row_text(0), "");
        assert_eq!(screen.cursor(), (0, 0));
        assert_eq!(screen.clear_count(), 1);
    }

    #[test]
    fn test_drop_restores_terminal() {
        let mut screen = MemoryBackend::new(20, 4);
        {
            let mut session = TerminalSession::begin(&mut screen, true).unwrap();
            session.write_str("abandoned").unwrap();
        }

        assert!(!screen.is_raw_mode());
        assert!(screen.is_cursor_visible());
        assert_eq!(screen.row_text(0), "");
    }

    #[test]
    fn test_restores_only_once() {
        let mut screen = MemoryBackend::new(20, 4);
        let session = TerminalSession::begin(&mut screen, false).unwrap();
        session.finish().unwrap();
        assert_eq!(screen.clear_count(), 1);
    }
}
