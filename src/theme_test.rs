use std::cell::RefCell;
use std::collections::HashMap;

use super::*;

// =============================================================
// Fakes
// =============================================================

#[derive(Default)]
struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    broken: bool,
}

impl MemoryStore {
    fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    fn broken() -> Self {
        Self { broken: true, ..Self::default() }
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        if self.broken {
            return None;
        }
        self.get(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), EnhanceError> {
        if self.broken {
            return Err(EnhanceError::StorageUnavailable);
        }
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[derive(Default)]
struct RootMarker(RefCell<Option<String>>);

impl ThemeTarget for RootMarker {
    fn marker(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn set_marker(&self, theme: Theme) {
        *self.0.borrow_mut() = Some(theme.as_str().to_owned());
    }
}

fn manager(store: MemoryStore) -> ThemePreferenceManager<MemoryStore, RootMarker> {
    ThemePreferenceManager::new(store, RootMarker::default(), &ThemeConfig::default())
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn ambient_dark_without_persisted_value_resolves_dark() {
    assert_eq!(resolve(None, true), Theme::Dark);
}

#[test]
fn ambient_light_without_persisted_value_resolves_light() {
    assert_eq!(resolve(None, false), Theme::Light);
}

#[test]
fn persisted_value_overrides_ambient_signal() {
    assert_eq!(resolve(Some("light"), true), Theme::Light);
    assert_eq!(resolve(Some("dark"), false), Theme::Dark);
}

#[test]
fn unrecognized_persisted_value_is_light() {
    assert_eq!(resolve(Some("sepia"), true), Theme::Light);
}

#[test]
fn empty_persisted_value_counts_as_absent() {
    assert_eq!(resolve(Some(""), true), Theme::Dark);
}

#[test]
fn theme_toggled_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Dark.to_string(), "dark");
}

// =============================================================
// Manager
// =============================================================

#[test]
fn init_applies_resolved_theme_to_marker() {
    let themes = manager(MemoryStore::with("theme", "dark"));
    assert_eq!(themes.init(false), Theme::Dark);
    assert_eq!(themes.target().marker().as_deref(), Some("dark"));
}

#[test]
fn init_uses_ambient_signal_when_nothing_stored() {
    let themes = manager(MemoryStore::default());
    assert_eq!(themes.init(true), Theme::Dark);
    assert_eq!(themes.store().get("theme"), None);
}

#[test]
fn toggle_persists_the_new_marker() {
    let themes = manager(MemoryStore::default());
    themes.init(false);
    assert_eq!(themes.toggle(), Theme::Dark);
    assert_eq!(themes.store().get("theme").as_deref(), Some("dark"));
    assert_eq!(themes.target().marker().as_deref(), Some("dark"));
}

#[test]
fn double_toggle_returns_to_original_and_storage_matches_marker() {
    let themes = manager(MemoryStore::default());
    let original = themes.init(true);
    themes.toggle();
    let last = themes.toggle();
    assert_eq!(last, original);
    assert_eq!(themes.current(), original);
    assert_eq!(themes.store().get("theme"), themes.target().marker());
}

#[test]
fn toggle_reads_marker_not_storage() {
    let themes = manager(MemoryStore::with("theme", "dark"));
    themes.init(false);
    themes.target().set_marker(Theme::Light);
    assert_eq!(themes.toggle(), Theme::Dark);
}

#[test]
fn missing_marker_counts_as_light() {
    let themes = manager(MemoryStore::default());
    assert_eq!(themes.current(), Theme::Light);
    assert_eq!(themes.toggle(), Theme::Dark);
}

#[test]
fn toggle_still_works_without_storage() {
    let themes = manager(MemoryStore::broken());
    assert_eq!(themes.init(false), Theme::Light);
    assert_eq!(themes.toggle(), Theme::Dark);
    assert_eq!(themes.toggle(), Theme::Light);
    assert_eq!(themes.target().marker().as_deref(), Some("light"));
}
