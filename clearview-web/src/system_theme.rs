//! Operating-system colour scheme detection.
use wasm_bindgen::JsValue;
use web_sys::{MediaQueryList, MediaQueryListEvent, Window};

use crate::dom;

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// The dark-scheme media query, when the browser supports `matchMedia`.
#[must_use]
pub fn dark_scheme_query(window: &Window) -> Option<MediaQueryList> {
    match window.match_media(DARK_SCHEME_QUERY) {
        Ok(query) => query,
        Err(err) => {
            log::debug!("matchMedia unavailable: {}", dom::js_error_message(&err));
            None
        }
    }
}

/// Call `on_change` with the new dark preference whenever the system scheme flips.
///
/// # Errors
/// Returns an error if the listener cannot be attached.
pub fn watch(query: &MediaQueryList, mut on_change: impl FnMut(bool) + 'static) -> Result<(), JsValue> {
    dom::listen(query, "change", move |event: MediaQueryListEvent| {
        on_change(event.matches());
    })
}
