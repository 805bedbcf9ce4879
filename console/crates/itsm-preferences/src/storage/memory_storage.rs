use crate::{PreferenceStorage, PreferencesError, PreferencesResult};

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// In-process storage. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> PreferencesResult<MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|e| PreferencesError::poisoned(e.to_string()))
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> PreferencesResult<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> PreferencesResult<()> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> PreferencesResult<()> {
        self.entries()?.remove(key);
        Ok(())
    }
}
