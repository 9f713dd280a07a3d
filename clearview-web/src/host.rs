//! Browser implementation of the controller's document side.
use clearview_core::constants::FOCUSABLE_QUERY;
use clearview_core::{
    ActiveFocus, ControlIds, FocusRing, PanelHost, PanelState, Presentation, Timing,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, NodeList};

use crate::a11y;
use crate::dom;
use crate::presentation::PresentationApplier;

#[derive(Debug, Clone)]
pub struct DomHost {
    document: Document,
    ids: ControlIds,
    timing: Timing,
}

impl DomHost {
    #[must_use]
    pub fn new(document: Document, ids: ControlIds, timing: Timing) -> Self {
        Self {
            document,
            ids,
            timing,
        }
    }

    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub const fn ids(&self) -> &ControlIds {
        &self.ids
    }

    fn panel(&self) -> Option<Element> {
        self.document.get_element_by_id(&self.ids.panel)
    }

    fn focusables(&self) -> Option<NodeList> {
        self.panel()?.query_selector_all(FOCUSABLE_QUERY).ok()
    }
}

fn nth_element(nodes: &NodeList, index: u32) -> Option<Element> {
    nodes.get(index)?.dyn_into::<Element>().ok()
}

impl PanelHost for DomHost {
    fn render(&self, view: &Presentation) {
        PresentationApplier::new(&self.document, &self.ids).apply(view);
    }

    fn has_panel(&self) -> bool {
        self.panel().is_some() && self.document.get_element_by_id(&self.ids.trigger).is_some()
    }

    fn render_panel(&self, state: PanelState) {
        PresentationApplier::new(&self.document, &self.ids).apply_panel(state);
    }

    fn focus_first_control(&self, delay_ms: u32) {
        let host = self.clone();
        dom::defer(delay_ms, move || {
            if let Some(first) = host.focusables().and_then(|nodes| nth_element(&nodes, 0)) {
                dom::focus_element(&first);
            }
        });
    }

    fn focus_trigger(&self) {
        if let Some(trigger) = self.document.get_element_by_id(&self.ids.trigger) {
            dom::focus_element(&trigger);
        }
    }

    fn focus_ring(&self) -> FocusRing {
        let Some(nodes) = self.focusables() else {
            return FocusRing::new(0, ActiveFocus::Outside);
        };
        let len = nodes.length();
        let active = self.document.active_element().and_then(|active| {
            (0..len).find(|&i| nth_element(&nodes, i).is_some_and(|el| el == active))
        });
        FocusRing::new(
            len as usize,
            active.map_or(ActiveFocus::Outside, |i| ActiveFocus::At(i as usize)),
        )
    }

    fn focus_control_at(&self, index: usize) {
        let Ok(index) = u32::try_from(index) else {
            return;
        };
        if let Some(el) = self.focusables().and_then(|nodes| nth_element(&nodes, index)) {
            dom::focus_element(&el);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        let Some(win) = dom::window() else {
            return false;
        };
        win.confirm_with_message(message).unwrap_or_else(|err| {
            log::warn!("Confirmation prompt failed: {}", dom::js_error_message(&err));
            false
        })
    }

    fn announce(&self, message: &str) {
        a11y::announce(&self.document, message, self.timing.announce_ms);
    }
}
