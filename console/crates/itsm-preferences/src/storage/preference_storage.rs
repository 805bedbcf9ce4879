use crate::PreferencesResult;

/// Synchronous string key-value medium the store persists into.
pub trait PreferenceStorage: Send + Sync {
    /// Returns `Ok(None)` when nothing is stored under `key`.
    fn read(&self, key: &str) -> PreferencesResult<Option<String>>;

    /// Replaces whatever is stored under `key`.
    fn write(&self, key: &str, value: &str) -> PreferencesResult<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> PreferencesResult<()>;
}
