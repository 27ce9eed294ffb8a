//! Durable key-value storage backends.
//!
//! The state core treats durable storage as a synchronous local key-value
//! medium. Keys are the partition keys derived in [`super`]; values are the
//! serialized item lists. Backends use interior mutability so a single
//! instance can be shared behind an `Arc`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::error::StorageError;

/// Synchronous key-value storage.
///
/// `read` returns `Ok(None)` for an absent key. `write` is an unconditional
/// full overwrite of whatever was stored under the key before.
pub trait Storage: Send + Sync {
    /// Read the raw record stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read at all; an
    /// absent key is `Ok(None)`, not an error.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the record under `key` with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write did not land (I/O failure,
    /// quota). Callers surface this; nothing downstream retries.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

// =============================================================================
// MemoryStorage
// =============================================================================

/// In-memory storage backed by a `HashMap`.
///
/// Clone-friendly via `Arc`; clones share the same underlying map. Used in
/// tests and anywhere durable state is not wanted.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// =============================================================================
// DiskStorage
// =============================================================================

/// File-backed storage: one JSON document per key at `<dir>/<key>.json`.
///
/// Writes go through a temp file and an atomic rename, so a reader never
/// observes a partially written record even if the process dies mid-write.
pub struct DiskStorage {
    dir: PathBuf,
}

impl DiskStorage {
    /// Open (creating if needed) a storage directory.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory cannot be created.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for DiskStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.record_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.record_path(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_absent_key_is_none() {
        let storage = MemoryStorage::new();
        assert!(storage.read("cart_guest").expect("read").is_none());
    }

    #[test]
    fn test_memory_write_overwrites() {
        let storage = MemoryStorage::new();
        storage.write("cart_guest", "[1]").expect("write");
        storage.write("cart_guest", "[2]").expect("write");
        assert_eq!(storage.read("cart_guest").expect("read").as_deref(), Some("[2]"));
    }

    #[test]
    fn test_memory_clones_share_state() {
        let storage = MemoryStorage::new();
        let clone = storage.clone();
        storage.write("wishlist_guest", "[]").expect("write");
        assert!(clone.read("wishlist_guest").expect("read").is_some());
    }

    #[test]
    fn test_disk_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = DiskStorage::open(dir.path()).expect("open");

        assert!(storage.read("cart_user_7").expect("read").is_none());
        storage.write("cart_user_7", "[{\"id\":1}]").expect("write");
        assert_eq!(
            storage.read("cart_user_7").expect("read").as_deref(),
            Some("[{\"id\":1}]")
        );

        // no temp file left behind
        assert!(!dir.path().join("cart_user_7.json.tmp").exists());
    }

    #[test]
    fn test_disk_open_creates_nested_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("state").join("shop");
        let storage = DiskStorage::open(&nested).expect("open");
        storage.write("cart_guest", "[]").expect("write");
        assert!(nested.join("cart_guest.json").exists());
    }
}
