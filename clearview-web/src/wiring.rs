//! DOM event listeners feeding the interaction controller.
use std::cell::RefCell;
use std::rc::Rc;

use clearview_core::{Control, ControlIds, InteractionController, KeyInput, KeyOutcome, SettingsStorage};
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent, Node};

use crate::dom;
use crate::host::DomHost;

/// The single controller instance, shared by every listener on the page.
pub type SharedController<S> = Rc<RefCell<InteractionController<S>>>;

#[must_use]
pub fn control_id(ids: &ControlIds, control: Control) -> &str {
    match control {
        Control::ThemeLight => &ids.theme_light,
        Control::ThemeDark => &ids.theme_dark,
        Control::FontIncrease => &ids.font_increase,
        Control::FontDecrease => &ids.font_decrease,
        Control::SpacingToggle => &ids.spacing_toggle,
        Control::LinksToggle => &ids.links_toggle,
        Control::Reset => &ids.reset,
    }
}

pub(crate) fn with_controller<S: SettingsStorage>(
    controller: &SharedController<S>,
    f: impl FnOnce(&mut InteractionController<S>),
) {
    match controller.try_borrow_mut() {
        Ok(mut ctl) => f(&mut ctl),
        Err(_) => log::debug!("Controller busy, event dropped"),
    }
}

fn report(what: &str, result: Result<(), wasm_bindgen::JsValue>) {
    if let Err(err) = result {
        log::warn!("{what} listener not attached: {}", dom::js_error_message(&err));
    }
}

/// Attach every listener the page supports. Elements missing from the page are skipped.
pub fn wire<S: SettingsStorage + 'static>(controller: &SharedController<S>, host: &Rc<DomHost>) {
    wire_panel(controller, host);
    wire_keyboard(controller, host);
    wire_controls(controller, host);
}

fn wire_panel<S: SettingsStorage + 'static>(controller: &SharedController<S>, host: &Rc<DomHost>) {
    let document = host.document();
    let ids = host.ids();
    let (Some(trigger), Some(panel)) = (
        document.get_element_by_id(&ids.trigger),
        document.get_element_by_id(&ids.panel),
    ) else {
        log::debug!("No #{} / #{} on this page, panel not wired", ids.trigger, ids.panel);
        return;
    };

    let ctl = Rc::clone(controller);
    let click_host = Rc::clone(host);
    report(
        "Trigger click",
        dom::listen(&trigger, "click", move |_: Event| {
            with_controller(&ctl, |c| c.on_trigger_click(click_host.as_ref()));
        }),
    );

    let ctl = Rc::clone(controller);
    let outside_host = Rc::clone(host);
    report(
        "Outside click",
        dom::listen(document, "click", move |event: Event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = target
                .as_ref()
                .is_some_and(|node| panel.contains(Some(node)) || trigger.contains(Some(node)));
            if !inside {
                with_controller(&ctl, |c| c.on_outside_click(outside_host.as_ref()));
            }
        }),
    );
}

fn wire_keyboard<S: SettingsStorage + 'static>(
    controller: &SharedController<S>,
    host: &Rc<DomHost>,
) {
    let ctl = Rc::clone(controller);
    let key_host = Rc::clone(host);
    report(
        "Keyboard",
        dom::listen(host.document(), "keydown", move |event: KeyboardEvent| {
            let key = event.key();
            let code = event.code();
            let input = KeyInput {
                key: &key,
                code: &code,
                alt: event.alt_key(),
                shift: event.shift_key(),
                ctrl: event.ctrl_key(),
                meta: event.meta_key(),
            };
            with_controller(&ctl, |c| {
                if c.on_key(key_host.as_ref(), &input) == KeyOutcome::Handled {
                    event.prevent_default();
                }
            });
        }),
    );
}

fn wire_controls<S: SettingsStorage + 'static>(
    controller: &SharedController<S>,
    host: &Rc<DomHost>,
) {
    for control in Control::ALL {
        let id = control_id(host.ids(), control);
        let Some(button) = host.document().get_element_by_id(id) else {
            log::debug!("Control #{id} absent, skipped");
            continue;
        };
        let ctl = Rc::clone(controller);
        let control_host = Rc::clone(host);
        report(
            "Control click",
            dom::listen(&button, "click", move |_: Event| {
                with_controller(&ctl, |c| c.on_control(control_host.as_ref(), control));
            }),
        );
    }
}
