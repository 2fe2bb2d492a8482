//! Color roles used by the selectors.

use crate::color::{Color, NamedColor};
use serde::{Deserialize, Serialize};

/// The role a piece of text plays on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Plain text: titles, rules, unselected options, typed header text.
    Default,
    /// The typed prefix of the highlighted option.
    Highlight,
    /// The untyped remainder of the highlighted option.
    MutedHighlight,
    /// The untyped remainder of the match echoed in the header.
    Muted,
    /// A rejected keystroke.
    Alert,
}

/// Maps each [`Tone`] to a concrete color.
///
/// Defaults reproduce the classic console look: gray text, green selection,
/// dark green remainder, dark gray echo and red rejections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    /// Color for [`Tone::Default`].
    pub default: Color,
    /// Color for [`Tone::Highlight`].
    pub highlight: Color,
    /// Color for [`Tone::MutedHighlight`].
    pub muted_highlight: Color,
    /// Color for [`Tone::Muted`].
    pub muted: Color,
    /// Color for [`Tone::Alert`].
    pub alert: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            default: Color::Named(NamedColor::Gray),
            highlight: Color::Named(NamedColor::Green),
            muted_highlight: Color::Named(NamedColor::DarkGreen),
            muted: Color::Named(NamedColor::DarkGray),
            alert: Color::Named(NamedColor::Red),
        }
    }
}

impl Palette {
    /// Returns the color assigned to `tone`.
    pub fn color(&self, tone: Tone) -> Color {
        match tone {
            Tone::Default => self.default,
            Tone::Highlight => self.highlight,
            Tone::MutedHighlight => self.muted_highlight,
            Tone::Muted => self.muted,
            Tone::Alert => self.alert,
        }
    }
}
