//! "Skip to main content" link for keyboard users.
use clearview_core::SkipLinkConfig;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement};

use crate::dom;

pub const SKIP_LINK_CLASS: &str = "skip-link";
const HIDDEN_TOP: &str = "-40px";
const SKIP_LINK_STYLE: &str = "position:absolute;top:-40px;left:0;background:var(--accent);\
color:var(--bg-primary);padding:8px 16px;text-decoration:none;z-index:10000;font-weight:600;";

/// Insert the skip link as the first element of `<body>`.
///
/// Does nothing when a skip link is already present, and inserts nothing when the page has no
/// main content region to jump to. Returns the link that is in place.
pub fn inject_skip_link(document: &Document, cfg: &SkipLinkConfig) -> Option<HtmlElement> {
    if let Ok(Some(existing)) = document.query_selector(&format!("a.{SKIP_LINK_CLASS}")) {
        return existing.dyn_into::<HtmlElement>().ok();
    }
    let body = document.body()?;
    let target = resolve_target(document, cfg)?;

    let link = document
        .create_element("a")
        .ok()?
        .dyn_into::<HtmlElement>()
        .ok()?;
    dom::set_attribute(&link, "href", &format!("#{target}"));
    link.set_class_name(SKIP_LINK_CLASS);
    link.set_text_content(Some(&cfg.label));
    dom::set_attribute(&link, "style", SKIP_LINK_STYLE);

    let shown = link.clone();
    if let Err(err) = dom::listen(&link, "focus", move |_: Event| {
        dom::set_style(&shown, "top", "0");
    }) {
        log::debug!("Skip link focus listener: {}", dom::js_error_message(&err));
    }
    let hidden = link.clone();
    if let Err(err) = dom::listen(&link, "blur", move |_: Event| {
        dom::set_style(&hidden, "top", HIDDEN_TOP);
    }) {
        log::debug!("Skip link blur listener: {}", dom::js_error_message(&err));
    }

    let first = body.first_child();
    if let Err(err) = body.insert_before(&link, first.as_ref()) {
        log::warn!("Skip link not inserted: {}", dom::js_error_message(&err));
        return None;
    }
    Some(link)
}

/// Id the skip link should point at, tagging the main region when it has none.
fn resolve_target(document: &Document, cfg: &SkipLinkConfig) -> Option<String> {
    if document.get_element_by_id(&cfg.target_id).is_some() {
        return Some(cfg.target_id.clone());
    }
    let Ok(Some(main)) = document.query_selector(&cfg.main_selector) else {
        log::warn!(
            "No #{} or {} on this page, skip link not inserted",
            cfg.target_id,
            cfg.main_selector
        );
        return None;
    };
    let id = main.id();
    if !id.is_empty() {
        return Some(id);
    }
    main.set_id(&cfg.target_id);
    dom::set_attribute(&main, "tabindex", "-1");
    Some(cfg.target_id.clone())
}
