//! Fixed bounds and defaults shared across the panel.

/// Smallest allowed text scale, in percent.
pub const FONT_SIZE_MIN: u16 = 80;
/// Largest allowed text scale, in percent.
pub const FONT_SIZE_MAX: u16 = 150;
/// Increment applied by a single increase/decrease step.
pub const FONT_SIZE_STEP: u16 = 10;
/// Text scale used before any preference is stored.
pub const FONT_SIZE_DEFAULT: u16 = 100;

/// Storage entry holding the serialized settings record.
pub const STORAGE_KEY: &str = "accessibilitySettings";

/// Delay before focusing the first control of a freshly opened panel.
pub const FOCUS_DELAY_MS: u32 = 100;
/// Lifetime of a live-region announcement node.
pub const ANNOUNCE_MS: u32 = 1000;

/// Selector for elements that take part in panel focus containment.
pub const FOCUSABLE_QUERY: &str =
    "button, [href], input, textarea, select, [tabindex]:not([tabindex='-1'])";
