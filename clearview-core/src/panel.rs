//! Open/closed state of the settings panel.

/// Whether the settings panel is showing.
///
/// This is the source of truth; the panel's `open` class and `hidden` attribute render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

/// Accessible state of the button that opens and closes the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerView {
    pub expanded: bool,
    pub label: &'static str,
}

impl TriggerView {
    #[must_use]
    pub const fn aria_expanded(&self) -> &'static str {
        if self.expanded { "true" } else { "false" }
    }
}

impl PanelState {
    /// Reconstruct the state from the panel's rendered `open` class.
    #[must_use]
    pub const fn from_open_class(has_open_class: bool) -> Self {
        if has_open_class { Self::Open } else { Self::Closed }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    #[must_use]
    pub const fn trigger_view(self) -> TriggerView {
        match self {
            Self::Closed => TriggerView {
                expanded: false,
                label: crate::messages::OPEN_PANEL_LABEL,
            },
            Self::Open => TriggerView {
                expanded: true,
                label: crate::messages::CLOSE_PANEL_LABEL,
            },
        }
    }
}
