#![forbid(unsafe_code)]
//! Browser side of the Clearview accessibility panel.
//!
//! Binds [`clearview_core::InteractionController`] to the live document: DOM listeners,
//! the presentation applier, `localStorage`, live-region announcements and the skip link.
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod bootstrap;
pub mod components;
pub mod dom;
pub mod host;
pub mod logging;
pub mod presentation;
pub mod skip_link;
pub mod storage;
pub mod system_theme;
pub mod wiring;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    bootstrap::start();
}
