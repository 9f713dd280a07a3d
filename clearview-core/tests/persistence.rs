use clearview_core::constants::STORAGE_KEY;
use clearview_core::{
    FontSize, LinkStyle, LoadOutcome, MemoryStorage, Settings, SettingsStore, Spacing, Theme,
};

fn reachable_records() -> Vec<Settings> {
    let mut records = Vec::new();
    for theme in [Theme::Light, Theme::Dark] {
        for percent in (80..=150).step_by(10) {
            for spacing in [Spacing::Normal, Spacing::Increased] {
                for links in [LinkStyle::Normal, LinkStyle::Highlighted] {
                    records.push(Settings::new(
                        theme,
                        FontSize::new(percent).unwrap(),
                        spacing,
                        links,
                    ));
                }
            }
        }
    }
    records
}

/// Drive a fresh store to `target` through its setters only.
fn store_holding(target: Settings, storage: &MemoryStorage) -> SettingsStore<MemoryStorage> {
    let mut store = SettingsStore::new(storage.clone(), STORAGE_KEY);
    store.set_theme(target.theme());
    while store.settings().font_size() < target.font_size() {
        store.increase_font_size();
    }
    while store.settings().font_size() > target.font_size() {
        store.decrease_font_size();
    }
    if store.settings().spacing() != target.spacing() {
        store.toggle_spacing();
    }
    if store.settings().links() != target.links() {
        store.toggle_link_highlight();
    }
    store
}

#[test]
fn save_then_load_reproduces_every_reachable_record() {
    for target in reachable_records() {
        let storage = MemoryStorage::new();
        let store = store_holding(target, &storage);
        assert_eq!(store.settings(), &target);
        assert!(store.save());

        let mut reopened = SettingsStore::new(storage.clone(), STORAGE_KEY);
        assert_eq!(reopened.load(), LoadOutcome::Loaded);
        assert_eq!(reopened.settings(), &target);
    }
}

#[test]
fn reset_then_load_yields_defaults() {
    let storage = MemoryStorage::new();
    let target = Settings::new(
        Theme::Dark,
        FontSize::MAX,
        Spacing::Increased,
        LinkStyle::Highlighted,
    );
    let mut store = store_holding(target, &storage);
    store.reset_to_defaults();

    let mut reopened = SettingsStore::new(storage.clone(), STORAGE_KEY);
    assert_eq!(reopened.load(), LoadOutcome::Loaded);
    assert_eq!(
        reopened.settings(),
        &Settings::new(Theme::Light, FontSize::DEFAULT, Spacing::Normal, LinkStyle::Normal)
    );
    assert_eq!(
        storage.get(STORAGE_KEY).as_deref(),
        Some(r#"{"theme":"light","fontSize":100,"spacing":"normal","links":"normal"}"#)
    );
}

#[test]
fn toggling_spacing_twice_restores_it_with_two_writes() {
    let storage = MemoryStorage::new();
    let mut store = SettingsStore::new(storage.clone(), STORAGE_KEY);
    let original = store.settings().spacing();
    store.toggle_spacing();
    store.toggle_spacing();
    assert_eq!(store.settings().spacing(), original);
    assert_eq!(storage.write_count(), 2);
}

#[test]
fn boundary_steps_are_idempotent() {
    let storage = MemoryStorage::new();
    let mut store = SettingsStore::new(storage.clone(), STORAGE_KEY);
    for _ in 0..10 {
        store.increase_font_size();
    }
    assert_eq!(store.settings().font_size(), FontSize::MAX);
    let writes = storage.write_count();
    store.increase_font_size();
    assert_eq!(storage.write_count(), writes);

    for _ in 0..10 {
        store.decrease_font_size();
    }
    assert_eq!(store.settings().font_size(), FontSize::MIN);
    let writes = storage.write_count();
    store.decrease_font_size();
    assert_eq!(storage.write_count(), writes);
}

#[test]
fn records_from_other_schema_versions_fall_back_to_defaults() {
    for stored in [
        r#"{"theme":"dark","fontSize":120}"#,
        r#"{"theme":"dark","fontSize":120,"spacing":"normal","links":"normal","version":2}"#,
        r#"{"theme":"high-contrast","fontSize":120,"spacing":"normal","links":"normal"}"#,
    ] {
        let storage = MemoryStorage::with_entry(STORAGE_KEY, stored);
        let store = SettingsStore::open(storage, STORAGE_KEY);
        assert_eq!(store.settings(), &Settings::default(), "accepted {stored}");
    }
}

#[test]
fn missing_record_reports_missing() {
    let mut store = SettingsStore::new(MemoryStorage::new(), STORAGE_KEY);
    assert_eq!(store.load(), LoadOutcome::Missing);
    assert!(!store.has_persisted());
}
