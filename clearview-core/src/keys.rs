//! Centralized keyboard mapping for the panel's shortcuts.

/// The parts of a `KeyboardEvent` the panel looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyInput<'a> {
    pub key: &'a str,
    pub code: &'a str,
    pub alt: bool,
    pub shift: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl<'a> KeyInput<'a> {
    #[must_use]
    pub const fn plain(key: &'a str) -> Self {
        Self {
            key,
            code: "",
            alt: false,
            shift: false,
            ctrl: false,
            meta: false,
        }
    }

    #[must_use]
    pub const fn with_alt(key: &'a str) -> Self {
        Self {
            alt: true,
            ..Self::plain(key)
        }
    }

    #[must_use]
    pub const fn with_code(self, code: &'a str) -> Self {
        Self { code, ..self }
    }

    #[must_use]
    pub const fn with_shift(self) -> Self {
        Self {
            shift: true,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    TogglePanel,
    ToggleTheme,
    IncreaseFont,
    DecreaseFont,
    Close,
    FocusNext,
    FocusPrevious,
}

/// Map a key press to a panel shortcut.
///
/// Alt bindings match on the produced key or on the physical `code`, since some layouts compose
/// a different character while Alt is held. Ctrl or Meta alongside Alt is treated as AltGr
/// character entry and ignored.
#[must_use]
pub fn shortcut_for(input: &KeyInput<'_>) -> Option<Shortcut> {
    if input.alt {
        if input.ctrl || input.meta {
            return None;
        }
        return alt_shortcut(input.key, input.code);
    }
    match input.key {
        "Escape" => Some(Shortcut::Close),
        "Tab" if input.shift => Some(Shortcut::FocusPrevious),
        "Tab" => Some(Shortcut::FocusNext),
        _ => None,
    }
}

fn alt_shortcut(key: &str, code: &str) -> Option<Shortcut> {
    match (key, code) {
        ("a" | "A", _) | (_, "KeyA") => Some(Shortcut::TogglePanel),
        ("t" | "T", _) | (_, "KeyT") => Some(Shortcut::ToggleTheme),
        ("+" | "=", _) | (_, "NumpadAdd" | "Equal") => Some(Shortcut::IncreaseFont),
        ("-", _) | (_, "NumpadSubtract" | "Minus") => Some(Shortcut::DecreaseFont),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alt_letters_map() {
        assert_eq!(shortcut_for(&KeyInput::with_alt("a")), Some(Shortcut::TogglePanel));
        assert_eq!(shortcut_for(&KeyInput::with_alt("T")), Some(Shortcut::ToggleTheme));
        assert_eq!(shortcut_for(&KeyInput::with_alt("+")), Some(Shortcut::IncreaseFont));
        assert_eq!(shortcut_for(&KeyInput::with_alt("-")), Some(Shortcut::DecreaseFont));
        assert_eq!(shortcut_for(&KeyInput::with_alt("x")), None);
    }

    #[test]
    fn composed_characters_fall_back_to_code() {
        let mac_alt_a = KeyInput::with_alt("å").with_code("KeyA");
        assert_eq!(shortcut_for(&mac_alt_a), Some(Shortcut::TogglePanel));
        let numpad = KeyInput::with_alt("Unidentified").with_code("NumpadSubtract");
        assert_eq!(shortcut_for(&numpad), Some(Shortcut::DecreaseFont));
        let mac_alt_equal = KeyInput::with_alt("≠").with_code("Equal");
        assert_eq!(shortcut_for(&mac_alt_equal), Some(Shortcut::IncreaseFont));
        let mac_alt_minus = KeyInput::with_alt("–").with_code("Minus");
        assert_eq!(shortcut_for(&mac_alt_minus), Some(Shortcut::DecreaseFont));
    }

    #[test]
    fn plain_letters_are_not_shortcuts() {
        assert_eq!(shortcut_for(&KeyInput::plain("a").with_code("KeyA")), None);
    }

    #[test]
    fn altgr_entry_is_ignored() {
        let altgr = KeyInput {
            ctrl: true,
            ..KeyInput::with_alt("t")
        };
        assert_eq!(shortcut_for(&altgr), None);
    }

    #[test]
    fn navigation_keys_map() {
        assert_eq!(shortcut_for(&KeyInput::plain("Escape")), Some(Shortcut::Close));
        assert_eq!(shortcut_for(&KeyInput::plain("Tab")), Some(Shortcut::FocusNext));
        assert_eq!(
            shortcut_for(&KeyInput::plain("Tab").with_shift()),
            Some(Shortcut::FocusPrevious)
        );
    }
}
