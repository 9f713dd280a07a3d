//! Cyclic focus containment inside the open panel.

/// Where document focus sits relative to the panel's focusable controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveFocus {
    Outside,
    At(usize),
}

/// Snapshot of the panel's focusable controls, taken on every Tab press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRing {
    pub len: usize,
    pub active: ActiveFocus,
}

impl FocusRing {
    #[must_use]
    pub const fn new(len: usize, active: ActiveFocus) -> Self {
        Self { len, active }
    }
}

/// Index focus must move to for a Tab (or Shift+Tab when `backwards`), or `None` when the
/// browser's own focus movement already stays inside the panel.
#[must_use]
pub const fn contain_tab(ring: FocusRing, backwards: bool) -> Option<usize> {
    if ring.len == 0 {
        return None;
    }
    let last = ring.len - 1;
    match ring.active {
        ActiveFocus::Outside => Some(0),
        ActiveFocus::At(0) if backwards => Some(last),
        ActiveFocus::At(idx) if !backwards && idx >= last => Some(0),
        ActiveFocus::At(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_on_last_wraps_to_first() {
        assert_eq!(contain_tab(FocusRing::new(5, ActiveFocus::At(4)), false), Some(0));
    }

    #[test]
    fn shift_tab_on_first_wraps_to_last() {
        assert_eq!(contain_tab(FocusRing::new(5, ActiveFocus::At(0)), true), Some(4));
    }

    #[test]
    fn interior_moves_are_left_to_the_browser() {
        assert_eq!(contain_tab(FocusRing::new(5, ActiveFocus::At(2)), false), None);
        assert_eq!(contain_tab(FocusRing::new(5, ActiveFocus::At(2)), true), None);
        assert_eq!(contain_tab(FocusRing::new(5, ActiveFocus::At(4)), true), None);
    }

    #[test]
    fn stray_focus_is_pulled_inside() {
        assert_eq!(contain_tab(FocusRing::new(3, ActiveFocus::Outside), true), Some(0));
    }

    #[test]
    fn single_control_keeps_focus() {
        assert_eq!(contain_tab(FocusRing::new(1, ActiveFocus::At(0)), false), Some(0));
        assert_eq!(contain_tab(FocusRing::new(1, ActiveFocus::At(0)), true), Some(0));
    }

    #[test]
    fn empty_ring_does_nothing() {
        assert_eq!(contain_tab(FocusRing::new(0, ActiveFocus::Outside), false), None);
    }
}
