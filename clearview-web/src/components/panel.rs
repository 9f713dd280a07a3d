use clearview_core::presentation::aria_bool;
use clearview_core::{ControlIds, PanelState, Presentation, Settings};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone, Default)]
pub struct PanelMarkupProps {
    #[prop_or_default]
    pub ids: ControlIds,
    #[prop_or_default]
    pub settings: Settings,
}

/// Markup of the panel's DOM contract: trigger, panel container and its controls.
///
/// Rendered to static HTML; behaviour is attached afterwards by [`crate::wiring`].
#[function_component(PanelMarkup)]
pub fn panel_markup(p: &PanelMarkupProps) -> Html {
    let ids = &p.ids;
    let id = |value: &String| AttrValue::from(value.clone());
    let view = Presentation::of(&p.settings);
    let trigger = PanelState::Closed.trigger_view();
    let pressed_class = |pressed: bool| classes!("a11y-option", pressed.then_some("active"));

    html! {
      <div class="a11y-widget">
        <button id={id(&ids.trigger)} class="a11y-toggle" type="button"
            aria-controls={id(&ids.panel)}
            aria-expanded={trigger.aria_expanded()}
            aria-label={trigger.label}>
          <span aria-hidden="true">{ "♿" }</span>
        </button>
        <div id={id(&ids.panel)} class="a11y-panel" role="dialog"
            aria-label="Accessibility settings" hidden={true}>
          <h2 class="a11y-title">{ "Accessibility" }</h2>
          <div class="a11y-group" role="group" aria-label="Theme">
            <button id={id(&ids.theme_light)} type="button" class={pressed_class(view.light_pressed)}
                aria-pressed={aria_bool(view.light_pressed)}>{ "Light" }</button>
            <button id={id(&ids.theme_dark)} type="button" class={pressed_class(view.dark_pressed)}
                aria-pressed={aria_bool(view.dark_pressed)}>{ "Dark" }</button>
          </div>
          <div class="a11y-group" role="group" aria-label="Text size">
            <button id={id(&ids.font_decrease)} type="button" aria-label="Decrease font size">{ "A-" }</button>
            <span id={id(&ids.font_display)} class="a11y-font-display">{ view.font_display.clone() }</span>
            <button id={id(&ids.font_increase)} type="button" aria-label="Increase font size">{ "A+" }</button>
          </div>
          <button id={id(&ids.spacing_toggle)} type="button" class={pressed_class(view.spacing.pressed)}
              aria-pressed={view.spacing.aria_pressed()}>
            { "Increased spacing " }<span class="toggle-status">{ view.spacing.status }</span>
          </button>
          <button id={id(&ids.links_toggle)} type="button" class={pressed_class(view.links.pressed)}
              aria-pressed={view.links.aria_pressed()}>
            { "Highlight links " }<span class="toggle-status">{ view.links.status }</span>
          </button>
          <button id={id(&ids.reset)} type="button" class="a11y-reset">{ "Reset to defaults" }</button>
        </div>
      </div>
    }
}
