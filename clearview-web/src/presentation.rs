//! Writes presentation views onto the live document.
use clearview_core::presentation::aria_bool;
use clearview_core::{ControlIds, PanelState, Presentation, ToggleView};
use web_sys::{Document, Element};

use crate::dom;

const ACTIVE_CLASS: &str = "active";
const OPEN_CLASS: &str = "open";
const TOGGLE_STATUS_SELECTOR: &str = ".toggle-status";

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("Element #{0} not present")]
    MissingTarget(String),
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(dom::js_error_message(&value))
    }
}

/// Projects [`Presentation`] and [`PanelState`] onto the document.
///
/// Only absolute writes are made, so applying the same view twice leaves the same document.
/// Each step runs independently: an absent element skips that step and nothing else.
pub struct PresentationApplier<'a> {
    document: &'a Document,
    ids: &'a ControlIds,
}

impl<'a> PresentationApplier<'a> {
    #[must_use]
    pub const fn new(document: &'a Document, ids: &'a ControlIds) -> Self {
        Self { document, ids }
    }

    pub fn apply(&self, view: &Presentation) {
        report(self.apply_root(view));
        report(self.apply_pressed(&self.ids.theme_light, view.light_pressed));
        report(self.apply_pressed(&self.ids.theme_dark, view.dark_pressed));
        report(self.apply_font_display(&view.font_display));
        report(self.apply_toggle(&self.ids.spacing_toggle, view.spacing));
        report(self.apply_toggle(&self.ids.links_toggle, view.links));
    }

    pub fn apply_panel(&self, state: PanelState) {
        report(self.apply_panel_visibility(state));
        report(self.apply_trigger(state));
    }

    fn element(&self, id: &str) -> Result<Element, DomError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| DomError::MissingTarget(id.to_string()))
    }

    fn apply_root(&self, view: &Presentation) -> Result<(), DomError> {
        let root = self
            .document
            .document_element()
            .ok_or_else(|| DomError::MissingTarget("html".to_string()))?;
        for attr in &view.attributes {
            root.set_attribute(attr.name, &attr.value)?;
        }
        Ok(())
    }

    fn apply_pressed(&self, id: &str, pressed: bool) -> Result<(), DomError> {
        let button = self.element(id)?;
        set_pressed(&button, pressed)
    }

    fn apply_font_display(&self, text: &str) -> Result<(), DomError> {
        self.element(&self.ids.font_display)?
            .set_text_content(Some(text));
        Ok(())
    }

    fn apply_toggle(&self, id: &str, toggle: ToggleView) -> Result<(), DomError> {
        let button = self.element(id)?;
        set_pressed(&button, toggle.pressed)?;
        if let Some(status) = button.query_selector(TOGGLE_STATUS_SELECTOR)? {
            status.set_text_content(Some(toggle.status));
        }
        Ok(())
    }

    fn apply_panel_visibility(&self, state: PanelState) -> Result<(), DomError> {
        let panel = self.element(&self.ids.panel)?;
        if state.is_open() {
            panel.class_list().add_1(OPEN_CLASS)?;
            panel.remove_attribute("hidden")?;
        } else {
            panel.class_list().remove_1(OPEN_CLASS)?;
            panel.set_attribute("hidden", "")?;
        }
        Ok(())
    }

    fn apply_trigger(&self, state: PanelState) -> Result<(), DomError> {
        let trigger = self.element(&self.ids.trigger)?;
        let view = state.trigger_view();
        trigger.set_attribute("aria-expanded", view.aria_expanded())?;
        trigger.set_attribute("aria-label", view.label)?;
        Ok(())
    }
}

fn set_pressed(element: &Element, pressed: bool) -> Result<(), DomError> {
    if pressed {
        element.class_list().add_1(ACTIVE_CLASS)?;
    } else {
        element.class_list().remove_1(ACTIVE_CLASS)?;
    }
    element.set_attribute("aria-pressed", aria_bool(pressed))?;
    Ok(())
}

fn report(result: Result<(), DomError>) {
    if let Err(err) = result {
        log::debug!("Skipped presentation step: {err}");
    }
}

/// Whether the panel element currently carries its `open` class.
#[must_use]
pub fn panel_has_open_class(document: &Document, ids: &ControlIds) -> bool {
    document
        .get_element_by_id(&ids.panel)
        .is_some_and(|panel| panel.class_list().contains(OPEN_CLASS))
}
