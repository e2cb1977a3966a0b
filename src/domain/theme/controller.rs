//! Theme state synced to persistent storage and the system color scheme.

use std::sync::Arc;
use tokio::sync::watch;

use super::preference::{resolve_theme, ThemeName, ThemePreference, THEME_STORAGE_KEY};
use crate::ports::{PreferenceStorage, StorageError};

/// Holds the reader's theme preference and publishes the resolved theme.
///
/// `System` is persisted as the absence of a stored value. Subscribers
/// receive every change of the resolved theme.
pub struct ThemeController {
    storage: Arc<dyn PreferenceStorage>,
    preference: ThemePreference,
    system_prefers_dark: bool,
    resolved: watch::Sender<ThemeName>,
}

impl ThemeController {
    /// Loads the stored preference and applies it. Unknown values and
    /// unreadable storage fall back to `System`.
    pub fn init(
        storage: Arc<dyn PreferenceStorage>,
        system_prefers_dark: bool,
    ) -> Result<Self, StorageError> {
        let stored = storage.get(THEME_STORAGE_KEY).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Could not read theme preference");
            None
        });
        let preference = stored
            .and_then(|value| value.parse().ok())
            .unwrap_or_default();

        let (resolved, _) = watch::channel(resolve_theme(preference, system_prefers_dark));
        let controller = Self {
            storage,
            preference,
            system_prefers_dark,
            resolved,
        };
        controller.persist()?;
        Ok(controller)
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn current_theme(&self) -> ThemeName {
        *self.resolved.borrow()
    }

    /// Receiver that observes the resolved theme.
    pub fn subscribe(&self) -> watch::Receiver<ThemeName> {
        self.resolved.subscribe()
    }

    /// Stores a new preference and re-resolves.
    pub fn set_preference(&mut self, preference: ThemePreference) -> Result<ThemeName, StorageError> {
        self.preference = preference;
        self.persist()?;
        Ok(self.publish())
    }

    /// Flips the concrete theme currently shown and stores it as an
    /// explicit preference.
    pub fn toggle(&mut self) -> Result<ThemeName, StorageError> {
        let current = resolve_theme(self.preference, self.system_prefers_dark);
        self.set_preference(current.opposite().into())
    }

    /// Reacts to a change of the system color scheme. Only affects the
    /// resolved theme while the preference is `System`.
    pub fn on_system_change(&mut self, prefers_dark: bool) -> ThemeName {
        self.system_prefers_dark = prefers_dark;
        if self.preference == ThemePreference::System {
            self.publish()
        } else {
            self.current_theme()
        }
    }

    fn persist(&self) -> Result<(), StorageError> {
        match self.preference {
            ThemePreference::System => self.storage.remove(THEME_STORAGE_KEY),
            explicit => self.storage.set(THEME_STORAGE_KEY, explicit.as_str()),
        }
    }

    fn publish(&self) -> ThemeName {
        let theme = resolve_theme(self.preference, self.system_prefers_dark);
        self.resolved.send_if_modified(|current| {
            if *current == theme {
                false
            } else {
                *current = theme;
                true
            }
        });
        tracing::debug!(preference = self.preference.as_str(), theme = %theme, "Theme resolved");
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::theme::{InMemoryPreferenceStorage, JsonFilePreferenceStorage};

    fn storage_with(value: Option<&str>) -> Arc<InMemoryPreferenceStorage> {
        let storage = Arc::new(InMemoryPreferenceStorage::new());
        if let Some(value) = value {
            storage.set(THEME_STORAGE_KEY, value).unwrap();
        }
        storage
    }

    #[test]
    fn init_without_stored_value_follows_system() {
        let controller = ThemeController::init(storage_with(None), true).unwrap();
        assert_eq!(controller.preference(), ThemePreference::System);
        assert_eq!(controller.current_theme(), ThemeName::Dark);
    }

    #[test]
    fn init_reads_stored_preference() {
        let controller = ThemeController::init(storage_with(Some("light")), true).unwrap();
        assert_eq!(controller.preference(), ThemePreference::Light);
        assert_eq!(controller.current_theme(), ThemeName::Light);
    }

    #[test]
    fn init_ignores_garbage_and_clears_it() {
        let storage = storage_with(Some("purple"));
        let controller = ThemeController::init(storage.clone(), false).unwrap();
        assert_eq!(controller.preference(), ThemePreference::System);
        assert_eq!(storage.get(THEME_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn init_recovers_from_truncated_preference_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"theme-preference": "#).unwrap();
        let storage = Arc::new(JsonFilePreferenceStorage::new(path.clone()));

        let controller = ThemeController::init(storage.clone(), true).unwrap();
        assert_eq!(controller.preference(), ThemePreference::System);
        assert_eq!(controller.current_theme(), ThemeName::Dark);
        assert_eq!(storage.get(THEME_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn set_preference_persists_explicit_values() {
        let storage = storage_with(None);
        let mut controller = ThemeController::init(storage.clone(), false).unwrap();

        assert_eq!(controller.set_preference(ThemePreference::Dark).unwrap(), ThemeName::Dark);
        assert_eq!(storage.get(THEME_STORAGE_KEY).unwrap().as_deref(), Some("dark"));

        controller.set_preference(ThemePreference::System).unwrap();
        assert_eq!(storage.get(THEME_STORAGE_KEY).unwrap(), None);
        assert_eq!(controller.current_theme(), ThemeName::Light);
    }

    #[test]
    fn toggle_from_system_flips_resolved_theme() {
        let mut controller = ThemeController::init(storage_with(None), true).unwrap();
        assert_eq!(controller.toggle().unwrap(), ThemeName::Light);
        assert_eq!(controller.preference(), ThemePreference::Light);
        assert_eq!(controller.toggle().unwrap(), ThemeName::Dark);
        assert_eq!(controller.preference(), ThemePreference::Dark);
    }

    #[test]
    fn system_change_only_applies_to_system_preference() {
        let mut controller = ThemeController::init(storage_with(None), false).unwrap();
        assert_eq!(controller.on_system_change(true), ThemeName::Dark);

        controller.set_preference(ThemePreference::Light).unwrap();
        assert_eq!(controller.on_system_change(true), ThemeName::Light);
        assert_eq!(controller.on_system_change(false), ThemeName::Light);
    }

    #[test]
    fn subscribers_observe_changes() {
        let mut controller = ThemeController::init(storage_with(None), false).unwrap();
        let mut rx = controller.subscribe();
        assert!(!rx.has_changed().unwrap());

        controller.on_system_change(true);
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), ThemeName::Dark);

        controller.on_system_change(true);
        assert!(!rx.has_changed().unwrap());
    }
}
