//! # Durable Client Storage
//!
//! Two keys survive restarts: the serialized [`shared::Session`] and the bearer
//! token. [`FileStore`] keeps one file per key under the console data
//! directory; [`MemoryStore`] is the in-process equivalent.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::RwLock;

use crate::core::error::{ApiError, Result};
use crate::core::service::KeyValueStore;

/// Storage key of the serialized session record.
pub const SESSION_KEY: &str = "auth_user";
/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "auth_token";

/// One file per key inside `dir`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create the store, creating `dir` if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            ApiError::Storage(format!("Failed to create {}: {}", dir.display(), e))
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == IoErrorKind::NotFound => Ok(None),
            Err(e) => Err(ApiError::Storage(format!("Failed to read {}: {}", key, e))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        // Readers see either the old record or the new one, never a partial write.
        let tmp = self.path(&format!(".{}.tmp", key));
        fs::write(&tmp, value)
            .and_then(|_| fs::rename(&tmp, self.path(key)))
            .map_err(|e| ApiError::Storage(format!("Failed to write {}: {}", key, e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == IoErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApiError::Storage(format!("Failed to remove {}: {}", key, e))),
        }
    }
}

/// In-memory store. Counts mutations that actually changed something.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of effective `set`/`remove` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        if self.entries.write().remove(key).is_some() {
            self.writes.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_round_trip_and_idempotent_remove() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let store = FileStore::new(dir.path().join("nested")).unwrap();

        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
        store.set(TOKEN_KEY, "tok-123").unwrap();
        assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some("tok-123"));

        store.remove(TOKEN_KEY).unwrap();
        store.remove(TOKEN_KEY).unwrap();
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_store_overwrites() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let store = FileStore::new(dir.path()).unwrap();
        store.set(SESSION_KEY, "{\"a\":1}").unwrap();
        store.set(SESSION_KEY, "{\"a\":2}").unwrap();
        assert_eq!(store.get(SESSION_KEY).unwrap().as_deref(), Some("{\"a\":2}"));
    }

    #[test]
    fn test_memory_store_counts_only_effective_writes() {
        let store = MemoryStore::new();
        store.remove(TOKEN_KEY).unwrap();
        assert_eq!(store.write_count(), 0);

        store.set(TOKEN_KEY, "t").unwrap();
        store.remove(TOKEN_KEY).unwrap();
        store.remove(TOKEN_KEY).unwrap();
        assert_eq!(store.write_count(), 2);
        assert!(!store.contains(TOKEN_KEY));
    }
}
