//! Terminal color capability detection.
//!
//! Detects how many colors the terminal can show from `NO_COLOR`,
//! `COLORTERM`, `TERM` and a few terminal-specific variables.

use std::env;

/// Color support mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// No color support.
    None,
    /// Basic 16 colors.
    Basic,
    /// 256 color palette.
    Extended,
    /// 24-bit true color (16.7M colors).
    #[default]
    TrueColor,
}

/// What the attached terminal can display.
#[derive(Clone, Debug, Default)]
pub struct Capabilities {
    /// Color support level.
    pub color_mode: ColorMode,
    /// Terminal name/identifier.
    pub term_name: String,
    /// Terminal program (from TERM_PROGRAM).
    pub term_program: Option<String>,
}

impl Capabilities {
    /// Detects terminal capabilities from the process environment.
    pub fn detect() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Detects capabilities through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let term_name = lookup("TERM").unwrap_or_else(|| String::from("xterm"));
        let term_program = lookup("TERM_PROGRAM");
        let color_mode = Self::detect_color_mode(&lookup);

        Self {
            color_mode,
            term_name,
            term_program,
        }
    }

    /// Returns true if any color output is possible.
    #[must_use]
    pub fn has_color(&self) -> bool {
        self.color_mode != ColorMode::None
    }

    fn detect_color_mode<F>(lookup: &F) -> ColorMode
    where
        F: Fn(&str) -> Option<String>,
    {
        // https://no-color.org: any non-empty value disables color
        if lookup("NO_COLOR").is_some_and(|value| !value.is_empty()) {
            return ColorMode::None;
        }

        if let Some(colorterm) = lookup("COLORTERM") {
            if matches!(colorterm.as_str(), "truecolor" | "24bit") {
                return ColorMode::TrueColor;
            }
        }

        // Windows Terminal
        if lookup("WT_SESSION").is_some() {
            return ColorMode::TrueColor;
        }

        if let Some(term) = lookup("TERM") {
            let term_lower = term.to_lowercase();

            if term_lower == "dumb" {
                return ColorMode::None;
            }

            if term_lower.contains("truecolor")
                || term_lower.contains("24bit")
                || term_lower.contains("direct")
            {
                return ColorMode::TrueColor;
            }

            if term_lower.contains("256") {
                return ColorMode::Extended;
            }

            if term_lower.contains("color")
                || term_lower.starts_with("xterm")
                || term_lower.starts_with("screen")
                || term_lower.starts_with("tmux")
                || term_lower.starts_with("rxvt")
                || term_lower.starts_with("linux")
            {
                return ColorMode::Basic;
            }
        }

        ColorMode::TrueColor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn detect(vars: &[(&str, &str)]) -> Capabilities {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Capabilities::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_no_color_wins() {
        let caps = detect(&[("NO_COLOR", "1"), ("COLORTERM", "truecolor")]);
        assert_eq!(caps.color_mode, ColorMode::None);
        assert!(!caps.has_color());
    }

    #[test]
    fn test_empty_no_color_is_ignored() {
        let caps = detect(&[("NO_COLOR", ""), ("TERM", "xterm-256color")]);
        assert_eq!(caps.color_mode, ColorMode::Extended);
    }

    #[test]
    fn test_colorterm_truecolor() {
        let caps = detect(&[("COLORTERM", "24bit"), ("TERM", "xterm")]);
        assert_eq!(caps.color_mode, ColorMode::TrueColor);
    }

    #[test]
    fn test_term_hints() {
        assert_eq!(detect(&[("TERM", "screen")]).color_mode, ColorMode::Basic);
        assert_eq!(detect(&[("TERM", "dumb")]).color_mode, ColorMode::None);
        assert_eq!(
            detect(&[("TERM", "xterm-direct")]).color_mode,
            ColorMode::TrueColor
        );
    }

    #[test]
    fn test_defaults_without_term() {
        let caps = detect(&[]);
        assert_eq!(caps.term_name, "xterm");
        assert_eq!(caps.term_program, None);
        assert_eq!(caps.color_mode, ColorMode::TrueColor);
    }
}
