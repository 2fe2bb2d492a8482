//! In-memory terminal backend.
//!
//! [`MemoryBackend`] keeps a grid of colored cells instead of talking to a
//! real terminal, so screens can be inspected after a selector has run.

use crate::backend::TerminalBackend;
use termpick_core::{Color, Result};

/// A single screen cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The character shown in the cell.
    pub symbol: char,
    /// Foreground color it was written with.
    pub fg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            symbol: ' ',
            fg: Color::Reset,
        }
    }
}

/// A terminal backend that renders into memory.
///
/// Writing past the right edge is clipped. A `'\n'` moves to the start of
/// the next row.
#[derive(Debug, Clone)]
pub struct MemoryBackend {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    cursor: (u16, u16),
    foreground: Color,
    cursor_visible: bool,
    raw_mode: bool,
    clears: usize,
    flushes: usize,
}

impl MemoryBackend {
    /// Creates a blank screen of the given size.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
            cursor: (0, 0),
            foreground: Color::Reset,
            cursor_visible: true,
            raw_mode: false,
            clears: 0,
            flushes: 0,
        }
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// Returns the cell at `(x, y)`, if it is on screen.
    #[must_use]
    pub fn cell(&self, x: u16, y: u16) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Text of row `y` with trailing blanks removed.
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        let Some(start) = self.index(0, y) else {
            return String::new();
        };
        let row = &self.cells[start..start + usize::from(self.width)];
        let text: String = row.iter().map(|cell| cell.symbol).collect();
        text.trim_end().to_string()
    }

    /// All rows, trailing blanks removed.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        (0..self.height).map(|y| self.row_text(y)).collect()
    }

    /// Row `y` split into runs of equal foreground color.
    ///
    /// Trailing blanks are dropped before splitting.
    #[must_use]
    pub fn styled_runs(&self, y: u16) -> Vec<(String, Color)> {
        let text_len = self.row_text(y).chars().count();
        let mut runs: Vec<(String, Color)> = Vec::new();
        for x in 0..text_len {
            let Some(cell) = u16::try_from(x).ok().and_then(|x| self.cell(x, y)) else {
                break;
            };
            match runs.last_mut() {
                Some((text, fg)) if *fg == cell.fg => text.push(cell.symbol),
                _ => runs.push((cell.symbol.to_string(), cell.fg)),
            }
        }
        runs
    }

    /// Current cursor position.
    #[must_use]
    pub fn cursor(&self) -> (u16, u16) {
        self.cursor
    }

    /// Color the next write will use.
    #[must_use]
    pub fn foreground(&self) -> Color {
        self.foreground
    }

    /// Whether the cursor is shown.
    #[must_use]
    pub fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Whether raw mode is on.
    #[must_use]
    pub fn is_raw_mode(&self) -> bool {
        self.raw_mode
    }

    /// How many times the screen was cleared.
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    /// How many times output was flushed.
    #[must_use]
    pub fn flush_count(&self) -> usize {
        self.flushes
    }
}

impl TerminalBackend for MemoryBackend {
    fn enter_raw_mode(&mut self) -> Result<()> {
        self.raw_mode = true;
        Ok(())
    }

    fn exit_raw_mode(&mut self) -> Result<()> {
        self.raw_mode = false;
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.cursor_visible = false;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.cursor_visible = true;
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.cursor = (x, y);
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        Ok((self.width, self.height))
    }

    fn clear(&mut self) -> Result<()> {
        self.cells.fill(Cell::default());
        self.clears += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }

    fn set_foreground(&mut self, color: Color) -> Result<()> {
        self.foreground = color;
        Ok(())
    }

    fn reset_style(&mut self) -> Result<()> {
        self.foreground = Color::Reset;
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> Result<()> {
        for ch in s.chars() {
            let (x, y) = self.cursor;
            if ch == '\n' {
                self.cursor = (0, y.saturating_add(1));
                continue;
            }
            if let Some(i) = self.index(x, y) {
                self.cells[i] = Cell {
                    symbol: ch,
                    fg: self.foreground,
                };
            }
            self.cursor = (x.saturating_add(1), y);
        }
        Ok(())
    }
}
