//! User-facing strings: announcements, prompts and trigger labels.
use crate::settings::{FontSize, Theme};

pub const OPEN_PANEL_LABEL: &str = "Open accessibility settings menu";
pub const CLOSE_PANEL_LABEL: &str = "Close accessibility settings menu";

pub const CONFIRM_RESET: &str = "Are you sure you want to reset all accessibility settings?";
pub const CONFIRM_SYSTEM_THEME: &str =
    "Your system theme has changed. Would you like to update the website theme?";

pub const SETTINGS_RESET: &str = "Accessibility settings reset to defaults";

pub const TOGGLE_ON: &str = "On";
pub const TOGGLE_OFF: &str = "Off";

#[must_use]
pub fn theme_changed(theme: Theme) -> String {
    format!("Theme changed to {theme} mode")
}

#[must_use]
pub fn font_increased(size: FontSize) -> String {
    format!("Font size increased to {size}")
}

#[must_use]
pub fn font_decreased(size: FontSize) -> String {
    format!("Font size decreased to {size}")
}

/// Keyboard shortcut reference, logged once at startup.
pub const SHORTCUTS: &[(&str, &str)] = &[
    ("Alt + A", "Toggle accessibility menu"),
    ("Alt + T", "Toggle dark/light theme"),
    ("Alt + +", "Increase font size"),
    ("Alt + -", "Decrease font size"),
    ("Escape", "Close accessibility menu"),
];

#[must_use]
pub fn shortcut_table() -> String {
    let mut out = String::from("Accessibility keyboard shortcuts:");
    for (keys, action) in SHORTCUTS {
        out.push_str(&format!("\n  {keys:<8} {action}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announcements_name_the_new_value() {
        assert_eq!(theme_changed(Theme::Dark), "Theme changed to dark mode");
        assert_eq!(
            font_increased(FontSize::new(110).unwrap()),
            "Font size increased to 110%"
        );
        assert_eq!(
            font_decreased(FontSize::MIN),
            "Font size decreased to 80%"
        );
    }

    #[test]
    fn shortcut_table_lists_every_binding() {
        let table = shortcut_table();
        for (keys, _) in SHORTCUTS {
            assert!(table.contains(keys));
        }
    }
}
