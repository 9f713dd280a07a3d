//! Pure projection of a settings record onto presentation state.
use crate::messages::{TOGGLE_OFF, TOGGLE_ON};
use crate::settings::{Settings, Theme};

pub const ATTR_THEME: &str = "data-theme";
pub const ATTR_FONT_SIZE: &str = "data-font-size";
pub const ATTR_SPACING: &str = "data-spacing";
pub const ATTR_LINKS: &str = "data-links";

/// A presentation attribute written on the document root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootAttribute {
    pub name: &'static str,
    pub value: String,
}

/// On/off affordance of a binary toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleView {
    pub pressed: bool,
    pub status: &'static str,
}

impl ToggleView {
    #[must_use]
    pub const fn new(pressed: bool) -> Self {
        Self {
            pressed,
            status: if pressed { TOGGLE_ON } else { TOGGLE_OFF },
        }
    }

    #[must_use]
    pub const fn aria_pressed(&self) -> &'static str {
        aria_bool(self.pressed)
    }
}

/// Everything the document shows for one settings record.
///
/// Built only from the record it is given; applying the same view twice yields the same document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub attributes: [RootAttribute; 4],
    pub light_pressed: bool,
    pub dark_pressed: bool,
    pub font_display: String,
    pub spacing: ToggleView,
    pub links: ToggleView,
}

impl Presentation {
    #[must_use]
    pub fn of(settings: &Settings) -> Self {
        let font = settings.font_size();
        Self {
            attributes: [
                RootAttribute {
                    name: ATTR_THEME,
                    value: settings.theme().as_str().to_string(),
                },
                RootAttribute {
                    name: ATTR_FONT_SIZE,
                    value: font.percent().to_string(),
                },
                RootAttribute {
                    name: ATTR_SPACING,
                    value: settings.spacing().as_str().to_string(),
                },
                RootAttribute {
                    name: ATTR_LINKS,
                    value: settings.links().as_str().to_string(),
                },
            ],
            light_pressed: settings.theme() == Theme::Light,
            dark_pressed: settings.theme() == Theme::Dark,
            font_display: font.to_string(),
            spacing: ToggleView::new(settings.spacing().is_increased()),
            links: ToggleView::new(settings.links().is_highlighted()),
        }
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }
}

#[must_use]
pub const fn aria_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{FontSize, LinkStyle, Spacing};

    #[test]
    fn defaults_project_to_light_unpressed_toggles() {
        let view = Presentation::of(&Settings::default());
        assert_eq!(view.attribute(ATTR_THEME), Some("light"));
        assert_eq!(view.attribute(ATTR_FONT_SIZE), Some("100"));
        assert_eq!(view.attribute(ATTR_SPACING), Some("normal"));
        assert_eq!(view.attribute(ATTR_LINKS), Some("normal"));
        assert!(view.light_pressed && !view.dark_pressed);
        assert_eq!(view.font_display, "100%");
        assert_eq!(view.spacing.status, "Off");
        assert_eq!(view.links.aria_pressed(), "false");
    }

    #[test]
    fn customised_record_projects_every_field() {
        let settings = Settings::new(
            Theme::Dark,
            FontSize::new(140).unwrap(),
            Spacing::Increased,
            LinkStyle::Highlighted,
        );
        let view = Presentation::of(&settings);
        assert_eq!(view.attribute(ATTR_THEME), Some("dark"));
        assert_eq!(view.attribute(ATTR_FONT_SIZE), Some("140"));
        assert_eq!(view.attribute(ATTR_LINKS), Some("highlighted"));
        assert!(view.dark_pressed && !view.light_pressed);
        assert_eq!(view.spacing, ToggleView::new(true));
        assert_eq!(view.links.status, "On");
        assert_eq!(view, Presentation::of(&settings));
    }
}
