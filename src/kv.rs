//! Durable key-value storage.
//!
//! The blog handle registry persists its state through this interface so
//! that handles recorded in one run remain resolvable in later runs.
//! [`FileKv`] keeps one JSON file per key under the configured cache
//! directory; [`MemoryKv`] backs unit tests.

use std::{fs, io, path::PathBuf};
use thiserror::Error;

#[cfg(test)]
use parking_lot::RwLock;
#[cfg(test)]
use std::collections::HashMap;

/// Storage-related errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read key `{0}`")]
    Read(String, #[source] io::Error),

    #[error("failed to write key `{0}`")]
    Write(String, #[source] io::Error),
}

/// Durable key-value store.
///
/// `get` returns `None` for keys that have never been written. Values are
/// opaque strings; callers own the serialization format.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

// ============================================================================
// File-backed store
// ============================================================================

/// File-backed store: one `<key>.json` file per key under a cache directory.
///
/// The directory is created lazily on first write, so a run that never
/// records anything leaves no cache behind.
#[derive(Debug, Clone)]
pub struct FileKv {
    dir: PathBuf,
}

impl FileKv {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvStore for FileKv {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Read(key.to_owned(), err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|err| StoreError::Write(key.to_owned(), err))?;
        fs::write(self.key_path(key), value)
            .map_err(|err| StoreError::Write(key.to_owned(), err))
    }
}

// ============================================================================
// In-memory store
// ============================================================================

/// In-memory store for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryKv {
    entries: RwLock<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl KvStore for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.write().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
