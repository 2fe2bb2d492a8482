//! Selector settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use termpick_core::Palette;

/// Default pause after a rejected keystroke is flashed.
pub const DEFAULT_FLASH: Duration = Duration::from_millis(50);

/// Default rule line drawn around the option list.
pub const DEFAULT_RULE: &str = "-------------------";

/// Appearance and timing shared by both selectors.
///
/// Deserializes from a table like:
///
/// ```toml
/// flash_ms = 80
/// rule = "==========="
///
/// [palette]
/// highlight = "cyan"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectorOptions {
    /// Colors for each text role.
    pub palette: Palette,
    /// How long a rejected keystroke stays flashed in the header.
    #[serde(rename = "flash_ms", with = "duration_ms")]
    pub flash: Duration,
    /// Rule line drawn above and below the options.
    pub rule: String,
}

impl Default for SelectorOptions {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            flash: DEFAULT_FLASH,
            rule: DEFAULT_RULE.to_string(),
        }
    }
}

impl SelectorOptions {
    /// Replaces the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Replaces the flash duration.
    #[must_use]
    pub fn with_flash(mut self, flash: Duration) -> Self {
        self.flash = flash;
        self
    }
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(value.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
