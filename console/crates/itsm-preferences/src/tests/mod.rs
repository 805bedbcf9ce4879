mod store;

use crate::{PreferenceStorage, PreferencesError, PreferencesResult};

use std::sync::atomic::{AtomicUsize, Ordering};

/// Storage whose every operation fails, counting write attempts.
#[derive(Default)]
pub(crate) struct FailingStorage {
    pub(crate) writes: AtomicUsize,
}

impl PreferenceStorage for FailingStorage {
    fn read(&self, _key: &str) -> PreferencesResult<Option<String>> {
        Err(PreferencesError::file_read(
            "/unreadable".into(),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        ))
    }

    fn write(&self, _key: &str, _value: &str) -> PreferencesResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Err(PreferencesError::file_write(
            "/unwritable".into(),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        ))
    }

    fn remove(&self, _key: &str) -> PreferencesResult<()> {
        Ok(())
    }
}
