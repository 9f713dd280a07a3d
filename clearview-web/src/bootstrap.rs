//! Page startup: configuration, logging, optional markup injection and wiring.
use std::cell::RefCell;
use std::rc::Rc;

use clearview_core::{InteractionController, PanelConfig, PanelState, SettingsStorage, SettingsStore};
use wasm_bindgen::JsValue;
use web_sys::{Document, Event};
use yew::LocalServerRenderer;

use crate::components::{PanelMarkup, PanelMarkupProps};
use crate::host::DomHost;
use crate::presentation::panel_has_open_class;
use crate::storage::BrowserStorage;
use crate::wiring::{self, SharedController};
use crate::{a11y, dom, logging, skip_link, system_theme};

const MARKUP_CONTAINER_ID: &str = "clearview-root";

/// Initialise logging and mount the panel once the document has been parsed.
pub fn start() {
    let config = PanelConfig::load_from_static();
    logging::init(config.log_level_filter());

    let Some(document) = dom::document() else {
        dom::console_error("Clearview: no document, panel not started");
        return;
    };

    if document.ready_state() == "loading" {
        let ready_doc = document.clone();
        let mut pending = Some(config);
        if let Err(err) = dom::listen(&document, "DOMContentLoaded", move |_: Event| {
            if let Some(config) = pending.take() {
                launch(ready_doc.clone(), config);
            }
        }) {
            log::error!("Cannot wait for DOMContentLoaded: {}", dom::js_error_message(&err));
        }
    } else {
        launch(document, config);
    }
}

fn launch(document: Document, config: PanelConfig) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = inject_markup(&document, &config).await {
            log::warn!("Panel markup not injected: {}", dom::js_error_message(&err));
        }
        // Controllers live for the lifetime of the page through their listeners.
        let _controller = mount(&document, &config);
    });
}

/// Render the panel markup into the page when configured to and no panel exists yet.
///
/// # Errors
/// Returns an error if the container or stylesheet cannot be inserted.
#[allow(clippy::future_not_send)]
pub async fn inject_markup(document: &Document, config: &PanelConfig) -> Result<(), JsValue> {
    if !config.inject_markup || document.get_element_by_id(&config.ids.panel).is_some() {
        return Ok(());
    }
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let props = PanelMarkupProps {
        ids: config.ids.clone(),
        ..PanelMarkupProps::default()
    };
    let markup = LocalServerRenderer::<PanelMarkup>::with_props(props)
        .hydratable(false)
        .render()
        .await;

    let style = document.create_element("style")?;
    style.set_text_content(Some(a11y::visible_focus_css()));
    if let Some(head) = document.head() {
        head.append_child(&style)?;
    } else {
        body.append_child(&style)?;
    }

    let container = document.create_element("div")?;
    container.set_id(MARKUP_CONTAINER_ID);
    container.set_inner_html(&markup);
    body.append_child(&container)?;
    log::debug!("Injected panel markup into #{MARKUP_CONTAINER_ID}");
    Ok(())
}

/// Mount the panel on `document` using the browser's storage.
pub fn mount(document: &Document, config: &PanelConfig) -> SharedController<BrowserStorage> {
    mount_with(document, config, BrowserStorage::detect())
}

/// Mount the panel on `document`, persisting through `storage`.
///
/// Renders the loaded settings, follows the system colour scheme on a first visit,
/// attaches every listener and inserts the skip link.
pub fn mount_with<S: SettingsStorage + 'static>(
    document: &Document,
    config: &PanelConfig,
    storage: S,
) -> SharedController<S> {
    let store = SettingsStore::open(storage, config.storage_key.clone());
    let first_visit = !store.has_persisted();
    let panel = PanelState::from_open_class(panel_has_open_class(document, &config.ids));

    let host = Rc::new(DomHost::new(
        document.clone(),
        config.ids.clone(),
        config.timing,
    ));
    let controller: SharedController<S> = Rc::new(RefCell::new(InteractionController::new(
        store,
        panel,
        config.timing,
    )));
    controller.borrow().refresh(host.as_ref());

    if first_visit {
        follow_system_theme(&controller, &host);
    }

    wiring::wire(&controller, &host);
    if skip_link::inject_skip_link(document, &config.skip_link).is_none() {
        log::debug!("Skip link not available on this page");
    }
    log::info!("{}", clearview_core::messages::shortcut_table());
    controller
}

fn follow_system_theme<S: SettingsStorage + 'static>(
    controller: &SharedController<S>,
    host: &Rc<DomHost>,
) {
    let Some(query) = dom::window().and_then(|win| system_theme::dark_scheme_query(&win)) else {
        return;
    };
    if controller
        .borrow_mut()
        .adopt_system_theme(host.as_ref(), query.matches())
    {
        log::info!("Following the system dark colour scheme");
    }

    let ctl = Rc::clone(controller);
    let watch_host = Rc::clone(host);
    if let Err(err) = system_theme::watch(&query, move |prefers_dark| {
        wiring::with_controller(&ctl, |c| {
            c.on_system_theme_change(watch_host.as_ref(), prefers_dark);
        });
    }) {
        log::warn!("System theme changes not followed: {}", dom::js_error_message(&err));
    }
}
