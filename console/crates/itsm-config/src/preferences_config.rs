use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORAGE_DIR, StorageKind};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PreferencesConfig {
    pub storage: StorageKind,
    /// Relative to the config directory.
    pub dir: String,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            storage: StorageKind::default(),
            dir: String::from(DEFAULT_STORAGE_DIR),
        }
    }
}

impl PreferencesConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let dir = std::path::Path::new(&self.dir);
        if self.dir.is_empty() || dir.is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::preferences(
                "preferences.dir must be a non-empty relative path and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
