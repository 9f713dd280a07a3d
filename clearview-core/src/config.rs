//! Panel configuration: DOM contract ids, timings and startup options.
use serde::{Deserialize, Serialize};

use crate::constants::{ANNOUNCE_MS, FOCUS_DELAY_MS, STORAGE_KEY};

const DEFAULT_PANEL_CONFIG: &str = include_str!("../../clearview-web/static/config/panel.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub storage_key: String,
    pub ids: ControlIds,
    pub timing: Timing,
    pub skip_link: SkipLinkConfig,
    /// Render the panel markup into the page when no panel element exists.
    pub inject_markup: bool,
    pub log_level: String,
}

/// Element ids of the DOM contract. Every element is optional on a given page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlIds {
    pub trigger: String,
    pub panel: String,
    pub theme_light: String,
    pub theme_dark: String,
    pub font_display: String,
    pub font_increase: String,
    pub font_decrease: String,
    pub spacing_toggle: String,
    pub links_toggle: String,
    pub reset: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    pub focus_delay_ms: u32,
    pub announce_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkipLinkConfig {
    pub label: String,
    pub target_id: String,
    pub main_selector: String,
}

impl PanelConfig {
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_PANEL_CONFIG).unwrap_or_else(|err| {
            log::warn!("Bundled panel config unreadable, using defaults: {err}");
            Self::default()
        })
    }

    /// Parse a config document; absent fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON for this shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            ids: ControlIds::default(),
            timing: Timing::default(),
            skip_link: SkipLinkConfig::default(),
            inject_markup: false,
            log_level: "info".to_string(),
        }
    }
}

impl Default for ControlIds {
    fn default() -> Self {
        Self {
            trigger: "accessibility-toggle".to_string(),
            panel: "accessibility-panel".to_string(),
            theme_light: "theme-light".to_string(),
            theme_dark: "theme-dark".to_string(),
            font_display: "font-display".to_string(),
            font_increase: "font-increase".to_string(),
            font_decrease: "font-decrease".to_string(),
            spacing_toggle: "spacing-toggle".to_string(),
            links_toggle: "links-toggle".to_string(),
            reset: "reset-settings".to_string(),
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            focus_delay_ms: FOCUS_DELAY_MS,
            announce_ms: ANNOUNCE_MS,
        }
    }
}

impl Default for SkipLinkConfig {
    fn default() -> Self {
        Self {
            label: "Skip to main content".to_string(),
            target_id: "main-content".to_string(),
            main_selector: ".main-content, main".to_string(),
        }
    }
}
