//! Light/dark theme resolution, application, and persistence.
//!
//! The document marker (the `data-theme` attribute on `<html>`) is the
//! source of truth once the page is running. Storage only seeds the first
//! resolution and records the latest toggle.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a failed write is logged and the toggle still
//! takes effect for the session.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use crate::config::ThemeConfig;
use crate::error::EnhanceError;

/// Class played on the toggle control while it rotates.
pub const ROTATING_CLASS: &str = "rotating";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Read a marker or stored value. Only `"dark"` is dark.
    pub fn from_marker(value: &str) -> Self {
        if value == "dark" { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the initial theme.
///
/// A non-empty persisted value always wins; otherwise the ambient
/// `prefers-color-scheme` signal decides.
pub fn resolve(persisted: Option<&str>, ambient_dark: bool) -> Theme {
    match persisted.filter(|v| !v.is_empty()) {
        Some(value) => Theme::from_marker(value),
        None if ambient_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Durable key-value storage for the theme preference.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`EnhanceError::StorageUnavailable`] when the value could not
    /// be written.
    fn save(&self, key: &str, value: &str) -> Result<(), EnhanceError>;
}

/// Where the effective theme is written for presentation rules to read.
pub trait ThemeTarget {
    fn marker(&self) -> Option<String>;
    fn set_marker(&self, theme: Theme);
}

/// Ties a preference store to the document marker.
pub struct ThemePreferenceManager<S, T> {
    store: S,
    target: T,
    storage_key: String,
}

impl<S: PreferenceStore, T: ThemeTarget> ThemePreferenceManager<S, T> {
    pub fn new(store: S, target: T, config: &ThemeConfig) -> Self {
        Self { store, target, storage_key: config.storage_key.clone() }
    }

    /// Resolve the starting theme and write it to the document marker.
    pub fn init(&self, ambient_dark: bool) -> Theme {
        let persisted = self.store.load(&self.storage_key);
        let theme = resolve(persisted.as_deref(), ambient_dark);
        self.target.set_marker(theme);
        log::debug!("theme resolved to {theme} (persisted: {persisted:?}, ambient dark: {ambient_dark})");
        theme
    }

    /// Theme currently shown, read from the document marker.
    pub fn current(&self) -> Theme {
        self.target.marker().map_or(Theme::Light, |m| Theme::from_marker(&m))
    }

    /// Flip the effective theme, write the marker, and persist it.
    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        self.target.set_marker(next);
        if let Err(e) = self.store.save(&self.storage_key, next.as_str()) {
            log::warn!("theme preference not persisted: {e}");
        }
        next
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn target(&self) -> &T {
        &self.target
    }
}
