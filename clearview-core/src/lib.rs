//! Clearview Core
//!
//! Platform-agnostic logic for the Clearview accessibility panel: the persisted settings record,
//! its store, the pure presentation projection and the interaction state machine.
//! This crate has no browser dependencies; the document is reached through [`PanelHost`] and
//! persistence through [`SettingsStorage`].

pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod focus;
pub mod keys;
pub mod messages;
pub mod panel;
pub mod presentation;
pub mod settings;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use config::{ControlIds, PanelConfig, SkipLinkConfig, Timing};
pub use controller::{Control, InteractionController, KeyOutcome, PanelHost};
pub use error::StoreError;
pub use focus::{ActiveFocus, FocusRing, contain_tab};
pub use keys::{KeyInput, Shortcut, shortcut_for};
pub use panel::{PanelState, TriggerView};
pub use presentation::{Presentation, RootAttribute, ToggleView};
pub use settings::{FontSize, LinkStyle, Settings, Spacing, Theme};
pub use storage::{MemoryStorage, MemoryStorageError, SettingsStorage};
pub use store::{LoadOutcome, SettingsStore};
