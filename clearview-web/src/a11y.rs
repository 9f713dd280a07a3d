// Accessibility helpers

use web_sys::Document;

use crate::dom;

/// Inline style keeping a node readable by assistive technology but off screen.
pub const SR_ONLY_STYLE: &str =
    "position:absolute;left:-10000px;width:1px;height:1px;overflow:hidden;";

/// Get CSS for visible focus indicators and screen reader utilities
///
/// Pages that ship no stylesheet of their own for the panel can inject this early.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus{outline:3px solid #00D9C0;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Announce a message to screen readers through a transient live region
///
/// Each call creates its own assertive region and removes it after `clear_after_ms`,
/// so overlapping announcements never cut each other short.
pub fn announce(document: &Document, message: &str, clear_after_ms: u32) {
    let Some(body) = document.body() else {
        log::debug!("No <body> for announcement: {message}");
        return;
    };
    let region = match document.create_element("div") {
        Ok(region) => region,
        Err(err) => {
            log::warn!("Announcement node not created: {}", dom::js_error_message(&err));
            return;
        }
    };
    for (name, value) in [
        ("role", "status"),
        ("aria-live", "assertive"),
        ("aria-atomic", "true"),
        ("class", "sr-only"),
        ("style", SR_ONLY_STYLE),
    ] {
        dom::set_attribute(&region, name, value);
    }
    region.set_text_content(Some(message));
    if let Err(err) = body.append_child(&region) {
        log::warn!("Announcement not inserted: {}", dom::js_error_message(&err));
        return;
    }
    dom::defer(clear_after_ms, move || region.remove());
}
