
use std::env;

use tempfile::TempDir;

/// Restores the config-dir environment variable on drop.
pub(crate) struct ConfigDirGuard {
    original: Option<String>,
}

impl Drop for ConfigDirGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(itsm_config::CONFIG_DIR_ENV, val),
                None => env::remove_var(itsm_config::CONFIG_DIR_ENV),
            }
        }
    }
}

/// Point the console at a fresh temp config directory
pub(crate) fn setup_config_dir() -> (TempDir, ConfigDirGuard) {
    let temp = TempDir::new().unwrap();
    let original = env::var(itsm_config::CONFIG_DIR_ENV).ok();
    unsafe {
        env::set_var(itsm_config::CONFIG_DIR_ENV, temp.path());
    }
    (temp, ConfigDirGuard { original })
}
