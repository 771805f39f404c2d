//! String key/value storage backing the persisted session.
//!
//! [`FileStorage`] keeps a single JSON object on disk with owner-only
//! permissions; [`MemoryStorage`] is for tests and throwaway sessions.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use realty_config::StorageConfig;

use crate::error::AuthError;

const STORAGE_FILE_NAME: &str = "storage.json";

pub trait KeyValueStorage: Send + Sync {
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, AuthError>;

    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), AuthError>;

    /// Store every entry in one write; either all land or none do.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the backing store cannot be written.
    fn set_many(&self, pairs: &[(&str, &str)]) -> Result<(), AuthError>;

    /// Remove `key`; removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the backing store cannot be written.
    fn remove(&self, key: &str) -> Result<(), AuthError>;
}

type Entries = BTreeMap<String, String>;

/// JSON map persisted at `<dir>/storage.json`.
///
/// The directory is created `0700` and the file written `0600` on Unix.
/// Each call reads and rewrites the whole file under an in-process lock.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(STORAGE_FILE_NAME),
            lock: Mutex::new(()),
        }
    }

    /// Storage in the configured directory.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if no data directory can be determined.
    pub fn from_config(config: &StorageConfig) -> Result<Self, AuthError> {
        config
            .resolve_dir()
            .map(|dir| Self::in_dir(&dir))
            .ok_or_else(|| {
                AuthError::Storage("data directory not found; set storage.dir".into())
            })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries, AuthError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => {
                return Err(AuthError::Storage(format!(
                    "read {}: {e}",
                    self.path.display()
                )));
            }
        };
        if raw.trim().is_empty() {
            return Ok(Entries::new());
        }
        serde_json::from_str(&raw).or_else(|e| {
            tracing::warn!(path = %self.path.display(), %e, "storage file is corrupt; starting empty");
            Ok(Entries::new())
        })
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AuthError::Storage(format!("mkdir {}: {e}", parent.display())))?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }
        let body = serde_json::to_string_pretty(entries)
            .map_err(|e| AuthError::Storage(format!("encode: {e}")))?;
        fs::write(&self.path, body)
            .map_err(|e| AuthError::Storage(format!("write {}: {e}", self.path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                AuthError::Storage(format!("chmod {}: {e}", self.path.display()))
            })?;
        }
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn set_many(&self, pairs: &[(&str, &str)]) -> Result<(), AuthError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.read_entries()?;
        for (key, value) in pairs {
            entries.insert((*key).to_string(), (*value).to_string());
        }
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.write_entries(&entries)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<Entries>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every stored entry.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        Ok(self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn set_many(&self, pairs: &[(&str, &str)]) -> Result<(), AuthError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        for (key, value) in pairs {
            entries.insert((*key).to_string(), (*value).to_string());
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_storage_set_get_remove_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let storage = FileStorage::in_dir(&tmp.path().join("realty"));

        assert_eq!(storage.get("user").unwrap(), None);
        storage.set("user", "{\"id\":1}").unwrap();
        storage.set("userId", "1").unwrap();
        assert_eq!(storage.get("userId").unwrap().as_deref(), Some("1"));

        // A second handle sees the same data.
        let other = FileStorage::in_dir(&tmp.path().join("realty"));
        assert_eq!(other.get("user").unwrap().as_deref(), Some("{\"id\":1}"));

        storage.remove("userId").unwrap();
        storage.remove("userId").unwrap();
        assert_eq!(storage.get("userId").unwrap(), None);
    }

    #[test]
    fn set_many_lands_in_one_file() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let storage = FileStorage::in_dir(tmp.path());
        storage.set("keep", "x").unwrap();
        storage.set_many(&[("user", "{\"id\":4}"), ("userId", "4"), ("keep", "y")]).unwrap();

        let on_disk: Entries =
            serde_json::from_str(&fs::read_to_string(storage.path()).unwrap()).unwrap();
        assert_eq!(on_disk.len(), 3);
        assert_eq!(on_disk["userId"], "4");
        assert_eq!(on_disk["keep"], "y");
    }

    #[cfg(unix)]
    #[test]
    fn set_many_failure_writes_nothing() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let storage = FileStorage::in_dir(tmp.path());
        storage.set("userId", "1").unwrap();
        fs::set_permissions(storage.path(), fs::Permissions::from_mode(0o400)).unwrap();
        if fs::OpenOptions::new().write(true).open(storage.path()).is_ok() {
            // Running as root; permissions are not enforced.
            return;
        }

        assert!(storage.set_many(&[("user", "{}"), ("userId", "2")]).is_err());
        assert_eq!(storage.get("userId").unwrap().as_deref(), Some("1"));
        assert_eq!(storage.get("user").unwrap(), None);
    }

    #[cfg(unix)]
    #[test]
    fn file_storage_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let storage = FileStorage::in_dir(&tmp.path().join("realty"));
        storage.set("userId", "7").unwrap();

        let mode = fs::metadata(storage.path()).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600, "storage file should be 0600");
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let storage = FileStorage::in_dir(tmp.path());
        fs::write(storage.path(), "{ not json").unwrap();

        assert_eq!(storage.get("user").unwrap(), None);
        storage.set("userId", "3").unwrap();
        assert_eq!(storage.get("userId").unwrap().as_deref(), Some("3"));
    }

    #[test]
    fn memory_storage_snapshot() {
        let storage = MemoryStorage::new();
        storage.set("a", "1").unwrap();
        storage.remove("missing").unwrap();
        assert_eq!(storage.snapshot().len(), 1);
    }
}
