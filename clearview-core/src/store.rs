//! Owner of the settings record and its persistence.
use crate::error::StoreError;
use crate::settings::{FontSize, LinkStyle, Settings, Spacing, Theme};
use crate::storage::SettingsStorage;

/// Result of reading the persisted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A valid record replaced the in-memory one.
    Loaded,
    /// Nothing was stored; the in-memory record is unchanged.
    Missing,
    /// The stored value could not be read or parsed; the in-memory record is unchanged.
    Rejected,
}

/// Owns the one [`Settings`] record and keeps storage in step with it.
///
/// Every mutation writes the full record before returning. Storage failures are logged and
/// otherwise ignored, so the in-memory record stays authoritative for the session.
#[derive(Debug)]
pub struct SettingsStore<S: SettingsStorage> {
    settings: Settings,
    storage: S,
    key: String,
}

impl<S: SettingsStorage> SettingsStore<S> {
    /// Create a store holding the defaults. Nothing is read or written.
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            settings: Settings::default(),
            storage,
            key: key.into(),
        }
    }

    /// Create a store and immediately [`load`](Self::load) from storage.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let mut store = Self::new(storage, key);
        store.load();
        store
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether storage holds any value under the settings key, valid or not.
    #[must_use]
    pub fn has_persisted(&self) -> bool {
        matches!(self.storage.read(&self.key), Ok(Some(_)))
    }

    /// Replace the in-memory record with the stored one when it parses.
    pub fn load(&mut self) -> LoadOutcome {
        match self.read_record() {
            Ok(Some(settings)) => {
                self.settings = settings;
                LoadOutcome::Loaded
            }
            Ok(None) => LoadOutcome::Missing,
            Err(err) => {
                log::warn!("Keeping current accessibility settings: {err}");
                LoadOutcome::Rejected
            }
        }
    }

    /// Write the full record. Returns whether the write succeeded.
    pub fn save(&self) -> bool {
        match self.persist() {
            Ok(()) => true,
            Err(err) => {
                log::warn!("Accessibility settings not persisted: {err}");
                false
            }
        }
    }

    fn read_record(&self) -> Result<Option<Settings>, StoreError> {
        let raw = self
            .storage
            .read(&self.key)
            .map_err(|e| StoreError::Read(e.to_string()))?;
        raw.as_deref().map(Settings::from_json).transpose()
    }

    fn persist(&self) -> Result<(), StoreError> {
        let json = self.settings.to_json()?;
        self.storage
            .write(&self.key, &json)
            .map_err(|e| StoreError::Write(e.to_string()))
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.settings.theme = theme;
        self.save();
    }

    pub fn toggle_spacing(&mut self) -> Spacing {
        self.settings.spacing = self.settings.spacing.toggled();
        self.save();
        self.settings.spacing
    }

    pub fn toggle_link_highlight(&mut self) -> LinkStyle {
        self.settings.links = self.settings.links.toggled();
        self.save();
        self.settings.links
    }

    /// Step the text scale up. At 150% this is a no-op and nothing is written.
    pub fn increase_font_size(&mut self) -> FontSize {
        self.step_font_size(FontSize::increased)
    }

    /// Step the text scale down. At 80% this is a no-op and nothing is written.
    pub fn decrease_font_size(&mut self) -> FontSize {
        self.step_font_size(FontSize::decreased)
    }

    fn step_font_size(&mut self, step: fn(FontSize) -> FontSize) -> FontSize {
        let next = step(self.settings.font_size);
        if next != self.settings.font_size {
            self.settings.font_size = next;
            self.save();
        }
        next
    }

    pub fn reset_to_defaults(&mut self) {
        self.settings = Settings::default();
        self.save();
    }

    /// First-visit adoption of the environment's dark preference.
    ///
    /// Only applies when nothing has been persisted yet; returns whether the theme changed.
    pub fn adopt_system_theme(&mut self, prefers_dark: bool) -> bool {
        if !prefers_dark || self.has_persisted() {
            return false;
        }
        self.set_theme(Theme::Dark);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::STORAGE_KEY;
    use crate::storage::MemoryStorage;

    fn store() -> (SettingsStore<MemoryStorage>, MemoryStorage) {
        let storage = MemoryStorage::new();
        (SettingsStore::new(storage.clone(), STORAGE_KEY), storage)
    }

    #[test]
    fn every_mutation_persists_the_full_record() {
        let (mut store, storage) = store();
        store.set_theme(Theme::Dark);
        assert_eq!(storage.write_count(), 1);
        store.increase_font_size();
        store.toggle_link_highlight();
        assert_eq!(storage.write_count(), 3);
        let persisted = Settings::from_json(&storage.get(STORAGE_KEY).unwrap()).unwrap();
        assert_eq!(&persisted, store.settings());
    }

    #[test]
    fn saturated_font_steps_do_not_write() {
        let storage = MemoryStorage::with_entry(
            STORAGE_KEY,
            r#"{"theme":"light","fontSize":150,"spacing":"normal","links":"normal"}"#,
        );
        let mut store = SettingsStore::open(storage.clone(), STORAGE_KEY);
        assert_eq!(store.increase_font_size(), FontSize::MAX);
        assert_eq!(store.increase_font_size(), FontSize::MAX);
        assert_eq!(storage.write_count(), 0);
        assert_eq!(store.decrease_font_size().percent(), 140);
        assert_eq!(storage.write_count(), 1);
    }

    #[test]
    fn malformed_record_keeps_defaults() {
        let storage = MemoryStorage::with_entry(STORAGE_KEY, "{\"theme\":\"dark\"");
        let mut store = SettingsStore::new(storage, STORAGE_KEY);
        assert_eq!(store.load(), LoadOutcome::Rejected);
        assert_eq!(store.settings(), &Settings::default());
        assert!(store.has_persisted());
    }

    #[test]
    fn unreadable_storage_keeps_current_record() {
        let (mut store, storage) = store();
        store.set_theme(Theme::Dark);
        storage.set_fail_reads(true);
        assert_eq!(store.load(), LoadOutcome::Rejected);
        assert_eq!(store.settings().theme(), Theme::Dark);
        assert!(!store.has_persisted());
    }

    #[test]
    fn write_failure_keeps_memory_authoritative() {
        let (mut store, storage) = store();
        storage.set_fail_writes(true);
        store.toggle_spacing();
        assert!(store.settings().spacing().is_increased());
        assert!(!store.save());
        assert!(storage.get(STORAGE_KEY).is_none());
    }

    #[test]
    fn adopts_dark_only_without_persisted_record() {
        let (mut store, storage) = store();
        assert!(!store.adopt_system_theme(false));
        assert_eq!(storage.write_count(), 0);
        assert!(store.adopt_system_theme(true));
        assert_eq!(store.settings().theme(), Theme::Dark);

        store.set_theme(Theme::Light);
        assert!(!store.adopt_system_theme(true));
        assert_eq!(store.settings().theme(), Theme::Light);
    }
}
