//! The persisted settings record and its value types.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{FONT_SIZE_DEFAULT, FONT_SIZE_MAX, FONT_SIZE_MIN, FONT_SIZE_STEP};
use crate::error::StoreError;

/// Colour theme keyed off by the page stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Theme matching a `prefers-color-scheme` reading.
    #[must_use]
    pub const fn from_dark_preference(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line and letter spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    #[default]
    Normal,
    Increased,
}

impl Spacing {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Increased => "increased",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Increased,
            Self::Increased => Self::Normal,
        }
    }

    #[must_use]
    pub const fn is_increased(self) -> bool {
        matches!(self, Self::Increased)
    }
}

/// Link emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStyle {
    #[default]
    Normal,
    Highlighted,
}

impl LinkStyle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Highlighted => "highlighted",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Highlighted,
            Self::Highlighted => Self::Normal,
        }
    }

    #[must_use]
    pub const fn is_highlighted(self) -> bool {
        matches!(self, Self::Highlighted)
    }
}

/// Text scale in percent, always within 80..=150 and a multiple of 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct FontSize(u16);

impl FontSize {
    pub const MIN: Self = Self(FONT_SIZE_MIN);
    pub const MAX: Self = Self(FONT_SIZE_MAX);
    pub const DEFAULT: Self = Self(FONT_SIZE_DEFAULT);

    /// Validate a percentage.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidFontSize`] when the value is out of range or off-step.
    pub fn new(percent: u16) -> Result<Self, StoreError> {
        if percent < FONT_SIZE_MIN || percent > FONT_SIZE_MAX || percent % FONT_SIZE_STEP != 0 {
            return Err(StoreError::InvalidFontSize(percent));
        }
        Ok(Self(percent))
    }

    #[must_use]
    pub const fn percent(self) -> u16 {
        self.0
    }

    /// One step larger, or unchanged at the upper bound.
    #[must_use]
    pub const fn increased(self) -> Self {
        if self.0 + FONT_SIZE_STEP > FONT_SIZE_MAX {
            self
        } else {
            Self(self.0 + FONT_SIZE_STEP)
        }
    }

    /// One step smaller, or unchanged at the lower bound.
    #[must_use]
    pub const fn decreased(self) -> Self {
        if self.0 < FONT_SIZE_MIN + FONT_SIZE_STEP {
            self
        } else {
            Self(self.0 - FONT_SIZE_STEP)
        }
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u16> for FontSize {
    type Error = StoreError;

    fn try_from(percent: u16) -> Result<Self, Self::Error> {
        Self::new(percent)
    }
}

impl From<FontSize> for u16 {
    fn from(size: FontSize) -> Self {
        size.0
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// The four user-chosen presentation preferences.
///
/// Fields are only writable inside the crate; outside code mutates a record through
/// [`crate::SettingsStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Settings {
    pub(crate) theme: Theme,
    pub(crate) font_size: FontSize,
    pub(crate) spacing: Spacing,
    pub(crate) links: LinkStyle,
}

impl Settings {
    #[must_use]
    pub const fn new(theme: Theme, font_size: FontSize, spacing: Spacing, links: LinkStyle) -> Self {
        Self {
            theme,
            font_size,
            spacing,
            links,
        }
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub const fn font_size(&self) -> FontSize {
        self.font_size
    }

    #[must_use]
    pub const fn spacing(&self) -> Spacing {
        self.spacing
    }

    #[must_use]
    pub const fn links(&self) -> LinkStyle {
        self.links
    }

    /// Parse a stored record. Any missing, unknown or invalid field rejects the whole record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Malformed`] when the text is not a valid record.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the full record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Malformed`] if serialization fails.
    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_visit() {
        let s = Settings::default();
        assert_eq!(s.theme(), Theme::Light);
        assert_eq!(s.font_size().percent(), 100);
        assert_eq!(s.spacing(), Spacing::Normal);
        assert_eq!(s.links(), LinkStyle::Normal);
    }

    #[test]
    fn font_size_rejects_out_of_domain_values() {
        assert!(FontSize::new(70).is_err());
        assert!(FontSize::new(160).is_err());
        assert!(FontSize::new(105).is_err());
        assert_eq!(FontSize::new(80).unwrap(), FontSize::MIN);
        assert_eq!(FontSize::new(150).unwrap(), FontSize::MAX);
    }

    #[test]
    fn font_size_saturates_at_bounds() {
        assert_eq!(FontSize::MAX.increased(), FontSize::MAX);
        assert_eq!(FontSize::MIN.decreased(), FontSize::MIN);
        assert_eq!(FontSize::DEFAULT.increased().percent(), 110);
        assert_eq!(FontSize::DEFAULT.decreased().percent(), 90);
    }

    #[test]
    fn font_size_steps_never_leave_range() {
        let mut size = FontSize::MIN;
        for _ in 0..20 {
            size = size.increased();
            assert!((80..=150).contains(&size.percent()));
        }
        assert_eq!(size, FontSize::MAX);
        for _ in 0..20 {
            size = size.decreased();
            assert!((80..=150).contains(&size.percent()));
        }
        assert_eq!(size, FontSize::MIN);
    }

    #[test]
    fn record_uses_wire_field_names() {
        let json = Settings::default().to_json().unwrap();
        assert_eq!(
            json,
            r#"{"theme":"light","fontSize":100,"spacing":"normal","links":"normal"}"#
        );
    }

    #[test]
    fn parses_a_stored_record() {
        let parsed = Settings::from_json(
            r#"{"theme":"dark","fontSize":130,"spacing":"increased","links":"highlighted"}"#,
        )
        .unwrap();
        assert_eq!(parsed.theme(), Theme::Dark);
        assert_eq!(parsed.font_size().percent(), 130);
        assert!(parsed.spacing().is_increased());
        assert!(parsed.links().is_highlighted());
    }

    #[test]
    fn rejects_partial_or_foreign_records() {
        for bad in [
            "",
            "not json",
            "null",
            r#"{"theme":"dark"}"#,
            r#"{"theme":"sepia","fontSize":100,"spacing":"normal","links":"normal"}"#,
            r#"{"theme":"dark","fontSize":200,"spacing":"normal","links":"normal"}"#,
            r#"{"theme":"dark","fontSize":"100","spacing":"normal","links":"normal"}"#,
            r#"{"theme":"dark","fontSize":100,"spacing":"normal","links":"normal","contrast":"high"}"#,
        ] {
            assert!(
                matches!(Settings::from_json(bad), Err(StoreError::Malformed(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn binary_fields_toggle_back() {
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Spacing::Normal.toggled(), Spacing::Increased);
        assert_eq!(LinkStyle::Highlighted.toggled(), LinkStyle::Normal);
        assert_eq!(Theme::from_dark_preference(true), Theme::Dark);
        assert_eq!(FontSize::new(120).unwrap().to_string(), "120%");
    }
}
