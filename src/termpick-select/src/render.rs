//! Drawing for the list selector.

use crate::options::SelectorOptions;
use crate::search::{HEADER_ROWS, Paint, row_of};
use std::thread;
use termpick_core::{Result, Tone};
use termpick_terminal::TerminalBackend;

/// Applies [`Paint`] plans for one list.
///
/// Layout:
///
/// ```text
/// row 0   <title><typed><rest of match>
/// row 1
/// row 2   -------------------
/// row 3   first option
/// ...
/// row n   -------------------
/// ```
pub struct ListPainter<'a, S> {
    title: &'a str,
    options: &'a [S],
    settings: &'a SelectorOptions,
}

impl<'a, S: AsRef<str>> ListPainter<'a, S> {
    /// Creates a painter for `options` under `title`.
    pub fn new(title: &'a str, options: &'a [S], settings: &'a SelectorOptions) -> Self {
        Self {
            title,
            options,
            settings,
        }
    }

    /// Applies a single paint operation.
    pub fn apply<B: TerminalBackend>(&self, backend: &mut B, paint: Paint) -> Result<()> {
        tracing::trace!(?paint, "paint");
        match paint {
            Paint::Frame => self.frame(backend),
            Paint::Highlight { index, typed } => self.highlight(backend, index, typed),
            Paint::Unhighlight { index } => self.unhighlight(backend, index),
            Paint::Flash { index, typed, ch } => self.flash(backend, index, typed, ch),
        }
    }

    /// Clears the screen and draws title, rules and every option.
    pub fn frame<B: TerminalBackend>(&self, backend: &mut B) -> Result<()> {
        backend.clear()?;
        backend.set_foreground(self.color(Tone::Default))?;

        backend.move_cursor(0, 0)?;
        backend.write_str(self.title)?;

        backend.move_cursor(0, HEADER_ROWS - 1)?;
        backend.write_str(&self.settings.rule)?;

        for (index, option) in self.options.iter().enumerate() {
            backend.move_cursor(0, row_of(index))?;
            backend.write_str(option.as_ref())?;
        }

        backend.move_cursor(0, row_of(self.options.len()))?;
        backend.write_str(&self.settings.rule)
    }

    /// Puts the cursor on the header, just after the search term.
    pub fn place_cursor<B: TerminalBackend>(&self, backend: &mut B, term: &str) -> Result<()> {
        let column = self.title_width() + term.chars().count();
        backend.move_cursor(u16::try_from(column).unwrap_or(u16::MAX), 0)
    }

    fn highlight<B: TerminalBackend>(&self, backend: &mut B, index: usize, typed: usize) -> Result<()> {
        let option = self.option(index);
        let (head, tail) = split_chars(option, typed);

        self.clear_header(backend)?;
        backend.set_foreground(self.color(Tone::Default))?;
        backend.write_str(head)?;
        backend.set_foreground(self.color(Tone::Muted))?;
        backend.write_str(tail)?;

        backend.move_cursor(0, row_of(index))?;
        backend.set_foreground(self.color(Tone::Highlight))?;
        backend.write_str(head)?;
        backend.set_foreground(self.color(Tone::MutedHighlight))?;
        backend.write_str(tail)
    }

    fn unhighlight<B: TerminalBackend>(&self, backend: &mut B, index: usize) -> Result<()> {
        backend.set_foreground(self.color(Tone::Default))?;
        backend.move_cursor(0, row_of(index))?;
        backend.write_str(self.option(index))
    }

    fn flash<B: TerminalBackend>(&self, backend: &mut B, index: usize, typed: usize, ch: char) -> Result<()> {
        let (head, _) = split_chars(self.option(index), typed);

        backend.move_cursor(self.header_column(), 0)?;
        backend.set_foreground(self.color(Tone::Alert))?;
        backend.write_str(head)?;
        backend.write_str(ch.encode_utf8(&mut [0; 4]))?;
        backend.flush()?;

        if !self.settings.flash.is_zero() {
            thread::sleep(self.settings.flash);
        }
        Ok(())
    }

    /// Rewrites row 0 as the bare title padded to the terminal width and
    /// leaves the cursor right after the title.
    fn clear_header<B: TerminalBackend>(&self, backend: &mut B) -> Result<()> {
        let (width, _) = backend.size()?;
        backend.set_foreground(self.color(Tone::Default))?;
        backend.move_cursor(0, 0)?;
        backend.write_str(&format!("{:<width$}", self.title, width = usize::from(width)))?;
        backend.move_cursor(self.header_column(), 0)
    }

    fn option(&self, index: usize) -> &str {
        self.options.get(index).map_or("", |option| option.as_ref())
    }

    fn color(&self, tone: Tone) -> termpick_core::Color {
        self.settings.palette.color(tone)
    }

    fn title_width(&self) -> usize {
        self.title.chars().count()
    }

    fn header_column(&self) -> u16 {
        u16::try_from(self.title_width()).unwrap_or(u16::MAX)
    }
}

/// Splits `text` after its first `count` characters.
fn split_chars(text: &str, count: usize) -> (&str, &str) {
    let at = text
        .char_indices()
        .nth(count)
        .map_or(text.len(), |(offset, _)| offset);
    text.split_at(at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    use termpick_core::{Color, NamedColor, Palette};
    use termpick_terminal::MemoryBackend;

    const FRUIT: [&str; 3] = ["Apple", "Apricot", "Banana"];

    fn settings() -> SelectorOptions {
        SelectorOptions::default().with_flash(Duration::ZERO)
    }

    #[test]
    fn test_split_chars() {
        assert_eq!(split_chars("Apricot", 3), ("Apr", "icot"));
        assert_eq!(split_chars("Fig", 5), ("Fig", ""));
        assert_eq!(split_chars("héllo", 2), ("hé", "llo"));
    }

    #[test]
    fn test_frame_layout() {
        let settings = settings();
        let painter = ListPainter::new("Fruit: ", &FRUIT, &settings);
        let mut screen = MemoryBackend::new(40, 8);
        painter.frame(&mut screen).unwrap();

        assert_eq!(
            screen.lines(),
            vec![
                "Fruit:",
                "",
                "-------------------",
                "Apple",
                "Apricot",
                "Banana",
                "-------------------",
                "",
            ]
        );
    }

    #[test]
    fn test_highlight_splits_header_and_row() {
        let settings = settings();
        let painter = ListPainter::new("Fruit: ", &FRUIT, &settings);
        let mut screen = MemoryBackend::new(40, 8);
        painter.frame(&mut screen).unwrap();
        painter
            .apply(&mut screen, Paint::Highlight { index: 1, typed: 3 })
            .unwrap();

        let palette = Palette::default();
        assert_eq!(
            screen.styled_runs(0),
            vec![
                ("Fruit: Apr".to_string(), palette.default),
                ("icot".to_string(), palette.muted),
            ]
        );
        assert_eq!(
            screen.styled_runs(4),
            vec![
                ("Apr".to_string(), palette.highlight),
                ("icot".to_string(), palette.muted_highlight),
            ]
        );
    }

    #[test]
    fn test_header_is_cleared_before_rewrite() {
        let settings = settings();
        let painter = ListPainter::new("> ", &FRUIT, &settings);
        let mut screen = MemoryBackend::new(20, 8);
        painter
            .apply(&mut screen, Paint::Highlight { index: 1, typed: 7 })
            .unwrap();
        painter
            .apply(&mut screen, Paint::Highlight { index: 0, typed: 1 })
            .unwrap();

        assert_eq!(screen.row_text(0), "> Apple");
    }

    #[test]
    fn test_unhighlight_restores_default_color() {
        let settings = settings();
        let painter = ListPainter::new("", &FRUIT, &settings);
        let mut screen = MemoryBackend::new(20, 8);
        painter
            .apply(&mut screen, Paint::Highlight { index: 0, typed: 5 })
            .unwrap();
        painter
            .apply(&mut screen, Paint::Unhighlight { index: 0 })
            .unwrap();

        assert_eq!(
            screen.styled_runs(3),
            vec![("Apple".to_string(), Color::Named(NamedColor::Gray))]
        );
    }

    #[test]
    fn test_flash_writes_rejected_text_in_alert() {
        let settings = settings();
        let painter = ListPainter::new("? ", &FRUIT, &settings);
        let mut screen = MemoryBackend::new(20, 8);
        painter
            .apply(
                &mut screen,
                Paint::Flash {
                    index: 0,
                    typed: 2,
                    ch: 'x',
                },
            )
            .unwrap();

        assert_eq!(screen.row_text(0), "  Apx");
        assert_eq!(
            screen.cell(2, 0).map(|cell| cell.fg),
            Some(Color::Named(NamedColor::Red))
        );
    }

    #[test]
    fn test_cursor_follows_term() {
        let settings = settings();
        let painter = ListPainter::new("Fruit: ", &FRUIT, &settings);
        let mut screen = MemoryBackend::new(40, 8);
        painter.place_cursor(&mut screen, "apr").unwrap();
        assert_eq!(screen.cursor(), (10, 0));
    }
}
