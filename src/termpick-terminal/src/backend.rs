//! Terminal backend abstraction and crossterm implementation.

use crate::Capabilities;
use crate::capabilities::ColorMode;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Attribute, Color as CrosstermColor, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode, size},
};
use std::io::{self, Stderr, Stdout, Write};
use termpick_core::{Color, Error, NamedColor, Result};

/// Trait for terminal backend implementations.
///
/// This is the whole screen surface the selectors need: cursor placement,
/// clearing, colored text, and the raw-mode/cursor-visibility switches that
/// have to be undone on exit.
pub trait TerminalBackend {
    /// Enters raw mode for the terminal.
    fn enter_raw_mode(&mut self) -> Result<()>;

    /// Exits raw mode, restoring normal terminal behavior.
    fn exit_raw_mode(&mut self) -> Result<()>;

    /// Hides the terminal cursor.
    fn hide_cursor(&mut self) -> Result<()>;

    /// Shows the terminal cursor.
    fn show_cursor(&mut self) -> Result<()>;

    /// Moves the cursor to the specified position (0-based).
    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()>;

    /// Gets the current terminal size (columns, rows).
    fn size(&self) -> Result<(u16, u16)>;

    /// Clears the entire screen.
    fn clear(&mut self) -> Result<()>;

    /// Flushes any buffered output to the terminal.
    fn flush(&mut self) -> Result<()>;

    /// Sets the foreground color for subsequent writes.
    fn set_foreground(&mut self, color: Color) -> Result<()>;

    /// Resets all colors and attributes to default.
    fn reset_style(&mut self) -> Result<()>;

    /// Writes a string at the current cursor position.
    fn write_str(&mut self, s: &str) -> Result<()>;
}

impl<B: TerminalBackend + ?Sized> TerminalBackend for &mut B {
    fn enter_raw_mode(&mut self) -> Result<()> {
        (**self).enter_raw_mode()
    }

    fn exit_raw_mode(&mut self) -> Result<()> {
        (**self).exit_raw_mode()
    }

    fn hide_cursor(&mut self) -> Result<()> {
        (**self).hide_cursor()
    }

    fn show_cursor(&mut self) -> Result<()> {
        (**self).show_cursor()
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        (**self).move_cursor(x, y)
    }

    fn size(&self) -> Result<(u16, u16)> {
        (**self).size()
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn set_foreground(&mut self, color: Color) -> Result<()> {
        (**self).set_foreground(color)
    }

    fn reset_style(&mut self) -> Result<()> {
        (**self).reset_style()
    }

    fn write_str(&mut self, s: &str) -> Result<()> {
        (**self).write_str(s)
    }
}

/// Crossterm-based terminal backend.
///
/// Output is queued on the writer (stdout unless built with
/// [`CrosstermBackend::stderr`] or [`CrosstermBackend::with_writer`]) and
/// sent on [`TerminalBackend::flush`]. Colors are downgraded to what
/// [`Capabilities`] says the terminal can display.
pub struct CrosstermBackend<W: Write = Stdout> {
    writer: W,
    capabilities: Capabilities,
    in_raw_mode: bool,
    cursor_hidden: bool,
}

impl CrosstermBackend<Stdout> {
    /// Creates a backend drawing on stdout.
    ///
    /// Automatically detects terminal capabilities.
    pub fn new() -> Result<Self> {
        Self::with_capabilities(Capabilities::detect())
    }

    /// Creates a stdout backend with custom capabilities.
    pub fn with_capabilities(capabilities: Capabilities) -> Result<Self> {
        Ok(Self::with_writer(io::stdout(), capabilities))
    }
}

impl CrosstermBackend<Stderr> {
    /// Creates a backend drawing on stderr, leaving stdout free for results.
    pub fn stderr() -> Result<Self> {
        Ok(Self::with_writer(io::stderr(), Capabilities::detect()))
    }
}

impl<W: Write> CrosstermBackend<W> {
    /// Creates a backend over an arbitrary writer.
    pub fn with_writer(writer: W, capabilities: Capabilities) -> Self {
        tracing::debug!(
            color_mode = ?capabilities.color_mode,
            term = %capabilities.term_name,
            "terminal backend ready"
        );
        Self {
            writer,
            capabilities,
            in_raw_mode: false,
            cursor_hidden: false,
        }
    }

    /// Returns the detected terminal capabilities.
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }
}

/// Converts a color to what crossterm should emit for the given color mode.
fn to_crossterm_color(color: Color, mode: ColorMode) -> CrosstermColor {
    match (mode, color) {
        (ColorMode::None, _) | (_, Color::Reset) => CrosstermColor::Reset,
        (_, Color::Named(named)) => named_to_crossterm(named),
        (ColorMode::TrueColor, Color::Rgb(r, g, b)) => CrosstermColor::Rgb { r, g, b },
        (ColorMode::TrueColor | ColorMode::Extended, other) => other
            .to_ansi_256()
            .map_or(CrosstermColor::Reset, CrosstermColor::AnsiValue),
        (ColorMode::Basic, other) => other
            .to_named()
            .map_or(CrosstermColor::Reset, named_to_crossterm),
    }
}

fn named_to_crossterm(named: NamedColor) -> CrosstermColor {
    match named {
        NamedColor::Black => CrosstermColor::Black,
        NamedColor::DarkRed => CrosstermColor::DarkRed,
        NamedColor::DarkGreen => CrosstermColor::DarkGreen,
        NamedColor::DarkYellow => CrosstermColor::DarkYellow,
        NamedColor::DarkBlue => CrosstermColor::DarkBlue,
        NamedColor::DarkMagenta => CrosstermColor::DarkMagenta,
        NamedColor::DarkCyan => CrosstermColor::DarkCyan,
        NamedColor::Gray => CrosstermColor::Grey,
        NamedColor::DarkGray => CrosstermColor::DarkGrey,
        NamedColor::Red => CrosstermColor::Red,
        NamedColor::Green => CrosstermColor::Green,
        NamedColor::Yellow => CrosstermColor::Yellow,
        NamedColor::Blue => CrosstermColor::Blue,
        NamedColor::Magenta => CrosstermColor::Magenta,
        NamedColor::Cyan => CrosstermColor::Cyan,
        NamedColor::White => CrosstermColor::White,
    }
}

impl<W: Write> TerminalBackend for CrosstermBackend<W> {
    fn enter_raw_mode(&mut self) -> Result<()> {
        if !self.in_raw_mode {
            enable_raw_mode().map_err(Error::Io)?;
            self.in_raw_mode = true;
        }
        Ok(())
    }

    fn exit_raw_mode(&mut self) -> Result<()> {
        if self.in_raw_mode {
            disable_raw_mode().map_err(Error::Io)?;
            self.in_raw_mode = false;
        }
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        if !self.cursor_hidden {
            execute!(self.writer, Hide).map_err(Error::Io)?;
            self.cursor_hidden = true;
        }
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        if self.cursor_hidden {
            execute!(self.writer, Show).map_err(Error::Io)?;
            self.cursor_hidden = false;
        }
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        queue!(self.writer, MoveTo(x, y)).map_err(Error::Io)
    }

    fn size(&self) -> Result<(u16, u16)> {
        size().map_err(Error::Io)
    }

    fn clear(&mut self) -> Result<()> {
        queue!(self.writer, Clear(ClearType::All)).map_err(Error::Io)
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(Error::Io)
    }

    fn set_foreground(&mut self, color: Color) -> Result<()> {
        let color = to_crossterm_color(color, self.capabilities.color_mode);
        queue!(self.writer, SetForegroundColor(color)).map_err(Error::Io)
    }

    fn reset_style(&mut self) -> Result<()> {
        queue!(self.writer, ResetColor, SetAttribute(Attribute::Reset)).map_err(Error::Io)
    }

    fn write_str(&mut self, s: &str) -> Result<()> {
        queue!(self.writer, Print(s)).map_err(Error::Io)
    }
}

impl<W: Write> Drop for CrosstermBackend<W> {
    fn drop(&mut self) {
        // Best-effort cleanup on drop
        let _ = self.show_cursor();
        let _ = self.exit_raw_mode();
    }
}
