//! In-memory preference storage, for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::ports::{PreferenceStorage, StorageError};

#[derive(Debug, Default)]
pub struct InMemoryPreferenceStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryPreferenceStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl PreferenceStorage for InMemoryPreferenceStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock().remove(key);
        Ok(())
    }
}
