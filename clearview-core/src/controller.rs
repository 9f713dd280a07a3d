//! Event-driven state machine tying user input to the store and the document.
use crate::config::Timing;
use crate::focus::{FocusRing, contain_tab};
use crate::keys::{KeyInput, Shortcut, shortcut_for};
use crate::messages;
use crate::panel::PanelState;
use crate::presentation::Presentation;
use crate::settings::{Settings, Theme};
use crate::storage::SettingsStorage;
use crate::store::SettingsStore;

/// Document side of the controller. Platform-specific implementations should provide this.
///
/// Every method must tolerate missing elements by doing nothing.
pub trait PanelHost {
    /// Render a settings projection onto the document.
    fn render(&self, view: &Presentation);

    /// Whether both the panel and its trigger exist on this page.
    fn has_panel(&self) -> bool;

    /// Render the panel's open/closed state and the trigger's accessible state.
    fn render_panel(&self, state: PanelState);

    /// Focus the first focusable control in the panel once `delay_ms` has elapsed.
    fn focus_first_control(&self, delay_ms: u32);

    fn focus_trigger(&self);

    /// Current focusable controls of the panel, computed fresh on each call.
    fn focus_ring(&self) -> FocusRing;

    fn focus_control_at(&self, index: usize);

    /// Blocking yes/no prompt.
    fn confirm(&self, message: &str) -> bool;

    /// Transient assistive-technology-only message.
    fn announce(&self, message: &str);
}

/// Buttons inside the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    ThemeLight,
    ThemeDark,
    FontIncrease,
    FontDecrease,
    SpacingToggle,
    LinksToggle,
    Reset,
}

impl Control {
    pub const ALL: [Self; 7] = [
        Self::ThemeLight,
        Self::ThemeDark,
        Self::FontIncrease,
        Self::FontDecrease,
        Self::SpacingToggle,
        Self::LinksToggle,
        Self::Reset,
    ];
}

/// Whether a key press was consumed; `Handled` means the browser default must be prevented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    Handled,
}

/// Owns the settings store and the panel state; mutates both in response to user events.
///
/// Every path that opens or closes the panel goes through [`open_panel`](Self::open_panel) and
/// [`close_panel`](Self::close_panel), so tracked state and rendered state move together.
#[derive(Debug)]
pub struct InteractionController<S: SettingsStorage> {
    store: SettingsStore<S>,
    panel: PanelState,
    timing: Timing,
}

impl<S: SettingsStorage> InteractionController<S> {
    pub const fn new(store: SettingsStore<S>, panel: PanelState, timing: Timing) -> Self {
        Self {
            store,
            panel,
            timing,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &SettingsStore<S> {
        &self.store
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        self.store.settings()
    }

    #[must_use]
    pub const fn panel_state(&self) -> PanelState {
        self.panel
    }

    /// Render the current record and panel state in full.
    pub fn refresh(&self, host: &impl PanelHost) {
        self.render(host);
        if host.has_panel() {
            host.render_panel(self.panel);
        }
    }

    fn render(&self, host: &impl PanelHost) {
        host.render(&Presentation::of(self.store.settings()));
    }

    /// Startup adoption of a dark system preference; silent, since it happens at page load.
    pub fn adopt_system_theme(&mut self, host: &impl PanelHost, prefers_dark: bool) -> bool {
        let adopted = self.store.adopt_system_theme(prefers_dark);
        if adopted {
            self.render(host);
        }
        adopted
    }

    /// A later system theme change; the user decides whether to follow it.
    pub fn on_system_theme_change(&mut self, host: &impl PanelHost, prefers_dark: bool) -> bool {
        let theme = Theme::from_dark_preference(prefers_dark);
        if theme == self.settings().theme() || !host.confirm(messages::CONFIRM_SYSTEM_THEME) {
            return false;
        }
        self.set_theme(host, theme);
        true
    }

    pub fn open_panel(&mut self, host: &impl PanelHost) {
        if !host.has_panel() {
            return;
        }
        self.panel = PanelState::Open;
        host.render_panel(self.panel);
        host.focus_first_control(self.timing.focus_delay_ms);
    }

    pub fn close_panel(&mut self, host: &impl PanelHost) {
        if !host.has_panel() {
            return;
        }
        self.panel = PanelState::Closed;
        host.render_panel(self.panel);
    }

    pub fn toggle_panel(&mut self, host: &impl PanelHost) {
        if self.panel.is_open() {
            self.close_panel(host);
        } else {
            self.open_panel(host);
        }
    }

    pub fn on_trigger_click(&mut self, host: &impl PanelHost) {
        self.toggle_panel(host);
    }

    /// A click that landed neither in the panel nor on its trigger.
    pub fn on_outside_click(&mut self, host: &impl PanelHost) {
        if self.panel.is_open() {
            self.close_panel(host);
        }
    }

    pub fn on_key(&mut self, host: &impl PanelHost, input: &KeyInput<'_>) -> KeyOutcome {
        let Some(shortcut) = shortcut_for(input) else {
            return KeyOutcome::Ignored;
        };
        match shortcut {
            Shortcut::TogglePanel => {
                if !host.has_panel() {
                    return KeyOutcome::Ignored;
                }
                self.toggle_panel(host);
            }
            Shortcut::ToggleTheme => {
                let next = self.settings().theme().toggled();
                self.set_theme(host, next);
            }
            Shortcut::IncreaseFont => {
                self.increase_font_size(host);
            }
            Shortcut::DecreaseFont => {
                self.decrease_font_size(host);
            }
            Shortcut::Close => {
                if !self.panel.is_open() {
                    return KeyOutcome::Ignored;
                }
                self.close_panel(host);
                host.focus_trigger();
            }
            Shortcut::FocusNext | Shortcut::FocusPrevious => {
                if !self.panel.is_open() {
                    return KeyOutcome::Ignored;
                }
                return Self::contain_focus(host, shortcut == Shortcut::FocusPrevious);
            }
        }
        KeyOutcome::Handled
    }

    fn contain_focus(host: &impl PanelHost, backwards: bool) -> KeyOutcome {
        match contain_tab(host.focus_ring(), backwards) {
            Some(index) => {
                host.focus_control_at(index);
                KeyOutcome::Handled
            }
            None => KeyOutcome::Ignored,
        }
    }

    pub fn on_control(&mut self, host: &impl PanelHost, control: Control) {
        match control {
            Control::ThemeLight => self.set_theme(host, Theme::Light),
            Control::ThemeDark => self.set_theme(host, Theme::Dark),
            Control::FontIncrease => {
                self.increase_font_size(host);
            }
            Control::FontDecrease => {
                self.decrease_font_size(host);
            }
            Control::SpacingToggle => self.toggle_spacing(host),
            Control::LinksToggle => self.toggle_link_highlight(host),
            Control::Reset => {
                self.reset(host);
            }
        }
    }

    pub fn set_theme(&mut self, host: &impl PanelHost, theme: Theme) {
        self.store.set_theme(theme);
        self.render(host);
        host.announce(&messages::theme_changed(theme));
    }

    /// Returns whether the size moved; only an effective change is announced.
    pub fn increase_font_size(&mut self, host: &impl PanelHost) -> bool {
        let before = self.settings().font_size();
        let after = self.store.increase_font_size();
        if after == before {
            return false;
        }
        self.render(host);
        host.announce(&messages::font_increased(after));
        true
    }

    /// Returns whether the size moved; only an effective change is announced.
    pub fn decrease_font_size(&mut self, host: &impl PanelHost) -> bool {
        let before = self.settings().font_size();
        let after = self.store.decrease_font_size();
        if after == before {
            return false;
        }
        self.render(host);
        host.announce(&messages::font_decreased(after));
        true
    }

    // Spacing and link emphasis changes are not announced.
    pub fn toggle_spacing(&mut self, host: &impl PanelHost) {
        self.store.toggle_spacing();
        self.render(host);
    }

    pub fn toggle_link_highlight(&mut self, host: &impl PanelHost) {
        self.store.toggle_link_highlight();
        self.render(host);
    }

    /// Reset after explicit confirmation. Returns whether the reset happened.
    pub fn reset(&mut self, host: &impl PanelHost) -> bool {
        if !host.confirm(messages::CONFIRM_RESET) {
            return false;
        }
        self.store.reset_to_defaults();
        self.render(host);
        host.announce(messages::SETTINGS_RESET);
        true
    }
}
