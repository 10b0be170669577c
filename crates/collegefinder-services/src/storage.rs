//! Key-value storage backends.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use collegefinder_core::error::StorageError;
use collegefinder_core::traits::KeyValueStorage;

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Use `dir` as the storage directory. It is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let io_err = |source| StorageError::Io {
            key: key.to_string(),
            source,
        };
        std::fs::create_dir_all(&self.dir).map_err(io_err)?;
        std::fs::write(self.path_for(key), value).map_err(io_err)?;
        tracing::debug!(key, dir = %self.dir.display(), "stored value");
        Ok(())
    }
}

/// Process-local storage, lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collegefinder_core::bookmarks::{Bookmarks, BOOKMARKS_KEY};
    use std::sync::Arc;

    #[test]
    fn file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested"));
        assert_eq!(storage.get("k").unwrap(), None);

        storage.set("k", "[\"1\"]").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("[\"1\"]"));
        assert!(dir.path().join("nested").join("k.json").exists());
    }

    #[test]
    fn file_storage_reports_unwritable_dir() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "not a directory").unwrap();

        let storage = FileStorage::new(&blocker);
        let err = storage.set("k", "v").unwrap_err();
        assert!(err.to_string().contains("key k"));
    }

    #[test]
    fn memory_storage_overwrites() {
        let storage = MemoryStorage::new();
        storage.set("k", "a").unwrap();
        storage.set("k", "b").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("b"));
        assert_eq!(storage.get("other").unwrap(), None);
    }

    #[test]
    fn bookmarks_survive_reload_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let storage: Arc<dyn KeyValueStorage> = Arc::new(FileStorage::new(dir.path()));

        let mut bookmarks = Bookmarks::load(storage.clone());
        bookmarks.toggle("3");
        bookmarks.toggle("8");
        bookmarks.toggle("3");

        let reloaded = Bookmarks::load(storage);
        assert_eq!(reloaded.set().ids(), ["8"]);
        assert!(dir.path().join(format!("{BOOKMARKS_KEY}.json")).exists());
    }

    #[test]
    fn corrupt_file_loads_empty_bookmarks() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(format!("{BOOKMARKS_KEY}.json")), "][").unwrap();
        let bookmarks = Bookmarks::load(Arc::new(FileStorage::new(dir.path())));
        assert!(bookmarks.set().is_empty());
    }
}
