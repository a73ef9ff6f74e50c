//! Dark/light theme switching with a saved preference.
//!
//! The manager owns the preference store and a shared [`ThemeHandle`]. The
//! background animator holds a clone of the handle and reads it on every
//! render, so a toggle is visible on the next frame.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use vitrine_background::ThemeSource;
use vitrine_ui::ThemeMode;

/// Key-value storage for user preferences (`localStorage` in the browser).
pub trait PreferenceStore {
    /// Reads a value.
    fn get(&self, key: &str) -> Option<String>;

    /// Writes a value. Failures are swallowed; the page keeps working.
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory [`PreferenceStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding one value.
    #[must_use]
    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.set(key, value);
        store
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Shared, cheaply cloned view of the current theme.
#[derive(Debug, Clone, Default)]
pub struct ThemeHandle(Rc<Cell<ThemeMode>>);

impl ThemeHandle {
    /// Creates a handle set to `mode`.
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        Self(Rc::new(Cell::new(mode)))
    }

    /// Current mode.
    #[must_use]
    pub fn get(&self) -> ThemeMode {
        self.0.get()
    }

    fn set(&self, mode: ThemeMode) {
        self.0.set(mode);
    }
}

impl ThemeSource for ThemeHandle {
    fn mode(&self) -> ThemeMode {
        self.get()
    }
}

/// Which toggle icon is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconVisibility {
    /// Sun icon, shown on dark (click for light).
    pub sun: bool,
    /// Moon icon, shown on light (click for dark).
    pub moon: bool,
}

/// Owns the theme flag and keeps the saved preference in sync.
#[derive(Debug)]
pub struct ThemeManager<P: PreferenceStore> {
    store: P,
    handle: ThemeHandle,
}

impl<P: PreferenceStore> ThemeManager<P> {
    /// Preference key.
    pub const STORAGE_KEY: &'static str = "theme";

    /// Loads the saved theme, falling back to `fallback` when it is missing
    /// or unrecognised, and applies it.
    pub fn new(store: P, fallback: ThemeMode) -> Self {
        let mode = match store.get(Self::STORAGE_KEY) {
            Some(saved) => ThemeMode::parse(&saved).unwrap_or_else(|| {
                tracing::debug!(saved = %saved, "unrecognised saved theme, using fallback");
                fallback
            }),
            None => fallback,
        };

        let mut manager = Self {
            store,
            handle: ThemeHandle::new(mode),
        };
        manager.set_theme(mode);
        manager
    }

    /// Applies `mode` and saves it.
    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.handle.set(mode);
        self.store.set(Self::STORAGE_KEY, mode.as_str());
        tracing::debug!(theme = %mode, "theme applied");
    }

    /// Switches to the other mode and returns it.
    pub fn toggle(&mut self) -> ThemeMode {
        let next = self.current().toggled();
        self.set_theme(next);
        next
    }

    /// Current mode.
    #[must_use]
    pub fn current(&self) -> ThemeMode {
        self.handle.get()
    }

    /// A handle that follows every change.
    #[must_use]
    pub fn handle(&self) -> ThemeHandle {
        self.handle.clone()
    }

    /// Icon state for the current mode.
    #[must_use]
    pub fn icons(&self) -> IconVisibility {
        let dark = self.current().is_dark();
        IconVisibility {
            sun: dark,
            moon: !dark,
        }
    }

    /// The preference store.
    #[must_use]
    pub fn store(&self) -> &P {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Manager = ThemeManager<MemoryPreferences>;

    #[test]
    fn test_defaults_to_dark() {
        let manager = Manager::new(MemoryPreferences::new(), ThemeMode::Dark);
        assert_eq!(manager.current(), ThemeMode::Dark);
        assert_eq!(manager.store().get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_restores_saved() {
        let manager = Manager::new(MemoryPreferences::with("theme", "light"), ThemeMode::Dark);
        assert_eq!(manager.current(), ThemeMode::Light);
        assert_eq!(
            manager.icons(),
            IconVisibility {
                sun: false,
                moon: true
            }
        );
    }

    #[test]
    fn test_unknown_saved_value_falls_back() {
        let manager = Manager::new(MemoryPreferences::with("theme", "sepia"), ThemeMode::Dark);
        assert_eq!(manager.current(), ThemeMode::Dark);
        assert_eq!(manager.store().get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_toggle_updates_handle_and_store() {
        let mut manager = Manager::new(MemoryPreferences::new(), ThemeMode::Dark);
        let handle = manager.handle();

        assert_eq!(manager.toggle(), ThemeMode::Light);
        assert_eq!(handle.mode(), ThemeMode::Light);
        assert_eq!(manager.store().get("theme").as_deref(), Some("light"));

        manager.toggle();
        assert_eq!(handle.mode(), ThemeMode::Dark);
        assert!(manager.icons().sun);
    }
}
