//! Preference storage persisted as a flat JSON object on disk.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::ports::{PreferenceStorage, StorageError};

/// Stores preferences in a JSON file such as `{"theme-preference": "dark"}`.
///
/// Every write rewrites the whole file through a temp file and rename.
/// A missing file reads as empty. Reads of a corrupt file fail, but the
/// next write replaces it.
pub struct JsonFilePreferenceStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFilePreferenceStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|e| StorageError::Corrupt(e.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::Corrupt(e.to_string()))?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn update<F>(&self, change: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut entries = match self.read_all() {
            Err(StorageError::Corrupt(reason)) => {
                tracing::warn!(path = %self.path.display(), %reason, "Overwriting corrupt preference file");
                BTreeMap::new()
            }
            other => other?,
        };
        change(&mut entries);
        self.write_all(&entries)
    }
}

impl PreferenceStorage for JsonFilePreferenceStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.update(|entries| {
            entries.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage(dir: &TempDir) -> JsonFilePreferenceStorage {
        JsonFilePreferenceStorage::new(dir.path().join("prefs").join("settings.json"))
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        assert_eq!(storage(&dir).get("theme-preference").unwrap(), None);
    }

    #[test]
    fn values_survive_a_new_instance() {
        let dir = TempDir::new().unwrap();
        storage(&dir).set("theme-preference", "dark").unwrap();
        storage(&dir).set("other", "x").unwrap();

        let reopened = storage(&dir);
        assert_eq!(reopened.get("theme-preference").unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn remove_deletes_only_that_key() {
        let dir = TempDir::new().unwrap();
        let s = storage(&dir);
        s.set("theme-preference", "light").unwrap();
        s.set("other", "x").unwrap();
        s.remove("theme-preference").unwrap();

        assert_eq!(s.get("theme-preference").unwrap(), None);
        assert_eq!(s.get("other").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let s = storage(&dir);
        fs::create_dir_all(s.path().parent().unwrap()).unwrap();
        fs::write(s.path(), "not json").unwrap();

        assert!(matches!(s.get("theme-preference"), Err(StorageError::Corrupt(_))));
    }

    #[test]
    fn write_replaces_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let s = storage(&dir);
        fs::create_dir_all(s.path().parent().unwrap()).unwrap();
        fs::write(s.path(), r#"{"theme-preference": "#).unwrap();

        s.set("theme-preference", "dark").unwrap();
        assert_eq!(s.get("theme-preference").unwrap().as_deref(), Some("dark"));
    }
}
