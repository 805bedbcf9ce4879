use crate::{PreferenceStorage, PreferencesError, PreferencesResult};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;

/// Distinguishes temp files of concurrent writes within one process.
static WRITE_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go through a temp file, fsync, then an atomic rename, so a crash
/// mid-write leaves the previous value in place.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl PreferenceStorage for FileStorage {
    fn read(&self, key: &str) -> PreferencesResult<Option<String>> {
        let path = self.path_for(key);

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PreferencesError::file_read(path, e)),
        }
    }

    fn write(&self, key: &str, value: &str) -> PreferencesResult<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| PreferencesError::dir_creation(self.dir.clone(), e))?;

        let final_path = self.path_for(key);
        let temp_path = self.dir.join(format!(
            "{key}.json.tmp.{}.{}",
            std::process::id(),
            WRITE_SEQUENCE.fetch_add(1, Ordering::Relaxed)
        ));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| PreferencesError::file_write(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .map_err(|e| PreferencesError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| PreferencesError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            PreferencesError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        debug!("Wrote {} bytes to {}", value.len(), final_path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> PreferencesResult<()> {
        let path = self.path_for(key);

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PreferencesError::file_write(path, e)),
        }
    }
}
