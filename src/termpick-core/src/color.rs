//! Terminal color representation.
//!
//! A [`Color`] is what a terminal can actually be told to draw with: the
//! terminal default, one of the sixteen console colors, an entry of the 256
//! color palette, or a 24-bit RGB triple. Colors that a terminal cannot show
//! are downgraded with [`Color::to_ansi_256`] and [`Color::to_named`].
//!
//! # Supported text forms
//!
//! - `reset` / `default`
//! - Console color names: `gray`, `dark-green`, `red`, ...
//! - Palette indices: `ansi:0` through `ansi:255`
//! - Hex strings: `#RGB`, `#RRGGBB` (the `#` is optional)
//!
//! # Examples
//!
//! ```
//! use termpick_core::color::{Color, NamedColor};
//!
//! let green: Color = "dark-green".parse().unwrap();
//! assert_eq!(green, Color::Named(NamedColor::DarkGreen));
//!
//! let orange = Color::from_hex("#FF8000").unwrap();
//! assert_eq!(orange, Color::Rgb(255, 128, 0));
//! ```

use crate::error::ColorParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The sixteen classic console colors.
///
/// Names follow the console convention where the low-intensity variants are
/// "dark" and `Gray` is the usual default foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    /// Black (ANSI 0).
    Black,
    /// Dark red (ANSI 1).
    DarkRed,
    /// Dark green (ANSI 2).
    DarkGreen,
    /// Dark yellow (ANSI 3).
    DarkYellow,
    /// Dark blue (ANSI 4).
    DarkBlue,
    /// Dark magenta (ANSI 5).
    DarkMagenta,
    /// Dark cyan (ANSI 6).
    DarkCyan,
    /// Gray (ANSI 7).
    Gray,
    /// Dark gray (ANSI 8).
    DarkGray,
    /// Red (ANSI 9).
    Red,
    /// Green (ANSI 10).
    Green,
    /// Yellow (ANSI 11).
    Yellow,
    /// Blue (ANSI 12).
    Blue,
    /// Magenta (ANSI 13).
    Magenta,
    /// Cyan (ANSI 14).
    Cyan,
    /// White (ANSI 15).
    White,
}

impl NamedColor {
    /// All sixteen colors in palette order.
    pub const ALL: [Self; 16] = [
        Self::Black,
        Self::DarkRed,
        Self::DarkGreen,
        Self::DarkYellow,
        Self::DarkBlue,
        Self::DarkMagenta,
        Self::DarkCyan,
        Self::Gray,
        Self::DarkGray,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    /// Returns the ANSI palette index (0-15).
    pub const fn ansi_index(self) -> u8 {
        match self {
            Self::Black => 0,
            Self::DarkRed => 1,
            Self::DarkGreen => 2,
            Self::DarkYellow => 3,
            Self::DarkBlue => 4,
            Self::DarkMagenta => 5,
            Self::DarkCyan => 6,
            Self::Gray => 7,
            Self::DarkGray => 8,
            Self::Red => 9,
            Self::Green => 10,
            Self::Yellow => 11,
            Self::Blue => 12,
            Self::Magenta => 13,
            Self::Cyan => 14,
            Self::White => 15,
        }
    }

    /// Converts from an ANSI palette index (0-15 only).
    pub fn from_ansi_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Returns the canonical kebab-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::DarkRed => "dark-red",
            Self::DarkGreen => "dark-green",
            Self::DarkYellow => "dark-yellow",
            Self::DarkBlue => "dark-blue",
            Self::DarkMagenta => "dark-magenta",
            Self::DarkCyan => "dark-cyan",
            Self::Gray => "gray",
            Self::DarkGray => "dark-gray",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }

    /// Looks a color up by name.
    ///
    /// Case-insensitive; `-`, `_` and spaces are interchangeable and `grey`
    /// is accepted for `gray`.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        let normalized = normalized.replace("grey", "gray");
        Self::ALL
            .into_iter()
            .find(|color| color.name().replace('-', "") == normalized)
    }

    /// Approximate RGB value, using the xterm defaults.
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Black => (0, 0, 0),
            Self::DarkRed => (128, 0, 0),
            Self::DarkGreen => (0, 128, 0),
            Self::DarkYellow => (128, 128, 0),
            Self::DarkBlue => (0, 0, 128),
            Self::DarkMagenta => (128, 0, 128),
            Self::DarkCyan => (0, 128, 128),
            Self::Gray => (192, 192, 192),
            Self::DarkGray => (128, 128, 128),
            Self::Red => (255, 0, 0),
            Self::Green => (0, 255, 0),
            Self::Yellow => (255, 255, 0),
            Self::Blue => (0, 0, 255),
            Self::Magenta => (255, 0, 255),
            Self::Cyan => (0, 255, 255),
            Self::White => (255, 255, 255),
        }
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A foreground color as understood by the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    /// The terminal's own default color.
    #[default]
    Reset,
    /// One of the sixteen console colors.
    Named(NamedColor),
    /// An entry of the 256 color palette.
    Indexed(u8),
    /// A 24-bit color.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parses a color from a hex string (`#RGB` or `#RRGGBB`, `#` optional).
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.is_empty() {
            return Err(ColorParseError::EmptyInput);
        }
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHexChar);
        }

        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            len => return Err(ColorParseError::InvalidLength(len)),
        };

        let parse_component = |s: &str| -> Result<u8, ColorParseError> {
            u8::from_str_radix(s, 16).map_err(|_| ColorParseError::InvalidHexChar)
        };

        Ok(Self::Rgb(
            parse_component(&expanded[0..2])?,
            parse_component(&expanded[2..4])?,
            parse_component(&expanded[4..6])?,
        ))
    }

    /// Parses any of the supported text forms.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::EmptyInput);
        }

        let lower = trimmed.to_lowercase();
        if lower == "reset" || lower == "default" {
            return Ok(Self::Reset);
        }

        if let Some(index) = lower.strip_prefix("ansi:") {
            return index
                .parse::<u8>()
                .map(Self::Indexed)
                .map_err(|_| ColorParseError::InvalidIndex(index.to_string()));
        }

        if let Some(named) = NamedColor::from_name(&lower) {
            return Ok(Self::Named(named));
        }

        if trimmed.starts_with('#') || trimmed.chars().all(|c| c.is_ascii_hexdigit()) {
            return Self::from_hex(trimmed);
        }

        Err(ColorParseError::UnknownColor(trimmed.to_string()))
    }

    /// Returns the RGB value this color is expected to render as.
    ///
    /// `Reset` has no fixed value and yields `None`.
    pub fn to_rgb(&self) -> Option<(u8, u8, u8)> {
        match *self {
            Self::Reset => None,
            Self::Named(named) => Some(named.to_rgb()),
            Self::Indexed(index) => Some(indexed_to_rgb(index)),
            Self::Rgb(r, g, b) => Some((r, g, b)),
        }
    }

    /// Converts to the nearest 256 color palette index.
    pub fn to_ansi_256(&self) -> Option<u8> {
        match *self {
            Self::Reset => None,
            Self::Named(named) => Some(named.ansi_index()),
            Self::Indexed(index) => Some(index),
            Self::Rgb(r, g, b) => Some(rgb_to_ansi_256(r, g, b)),
        }
    }

    /// Converts to the nearest of the sixteen console colors.
    pub fn to_named(&self) -> Option<NamedColor> {
        match *self {
            Self::Reset => None,
            Self::Named(named) => Some(named),
            Self::Indexed(index) => NamedColor::from_ansi_index(index).or_else(|| {
                let (r, g, b) = indexed_to_rgb(index);
                Some(rgb_to_named(r, g, b))
            }),
            Self::Rgb(r, g, b) => Some(rgb_to_named(r, g, b)),
        }
    }
}

/// Expands a 256 palette index into RGB (standard colors, 6x6x6 cube, gray ramp).
fn indexed_to_rgb(index: u8) -> (u8, u8, u8) {
    match index {
        0..=15 => NamedColor::ALL[index as usize].to_rgb(),
        16..=231 => {
            let idx = index - 16;
            let to_value = |n: u8| if n == 0 { 0 } else { 55 + n * 40 };
            (to_value(idx / 36), to_value((idx % 36) / 6), to_value(idx % 6))
        }
        232..=255 => {
            let gray = 8 + (index - 232) * 10;
            (gray, gray, gray)
        }
    }
}

fn rgb_to_ansi_256(r: u8, g: u8, b: u8) -> u8 {
    let avg = ((r as u16 + g as u16 + b as u16) / 3) as u8;
    let max_diff = r.abs_diff(avg).max(g.abs_diff(avg)).max(b.abs_diff(avg));

    if max_diff < 10 {
        // Near gray: use the ramp, with the cube corners for the extremes.
        if avg < 8 {
            16
        } else if avg > 248 {
            231
        } else {
            232 + ((avg - 8) / 10)
        }
    } else {
        16 + 36 * cube_index(r) + 6 * cube_index(g) + cube_index(b)
    }
}

fn cube_index(val: u8) -> u8 {
    // Cube levels: 0, 95, 135, 175, 215, 255
    match val {
        0..=47 => 0,
        48..=114 => 1,
        115..=154 => 2,
        155..=194 => 3,
        195..=234 => 4,
        _ => 5,
    }
}

fn rgb_to_named(r: u8, g: u8, b: u8) -> NamedColor {
    let luma = (r as f32 * 0.299 + g as f32 * 0.587 + b as f32 * 0.114) / 255.0;
    let max_val = r.max(g).max(b);
    let bright = max_val >= 192;

    let threshold = (max_val as f32 * 0.7) as u8;
    let has_r = r >= threshold && r > 30;
    let has_g = g >= threshold && g > 30;
    let has_b = b >= threshold && b > 30;

    match (has_r, has_g, has_b, bright) {
        (false, false, false, false) => NamedColor::Black,
        (false, false, false, true) => NamedColor::DarkGray,
        (true, false, false, false) => NamedColor::DarkRed,
        (true, false, false, true) => NamedColor::Red,
        (false, true, false, false) => NamedColor::DarkGreen,
        (false, true, false, true) => NamedColor::Green,
        (true, true, false, false) => NamedColor::DarkYellow,
        (true, true, false, true) => NamedColor::Yellow,
        (false, false, true, false) => NamedColor::DarkBlue,
        (false, false, true, true) => NamedColor::Blue,
        (true, false, true, false) => NamedColor::DarkMagenta,
        (true, false, true, true) => NamedColor::Magenta,
        (false, true, true, false) => NamedColor::DarkCyan,
        (false, true, true, true) => NamedColor::Cyan,
        (true, true, true, false) => NamedColor::DarkGray,
        (true, true, true, true) => {
            if luma > 0.9 {
                NamedColor::White
            } else {
                NamedColor::Gray
            }
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reset => f.write_str("reset"),
            Self::Named(named) => write!(f, "{named}"),
            Self::Indexed(index) => write!(f, "ansi:{index}"),
            Self::Rgb(r, g, b) => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        Self::Named(named)
    }
}
