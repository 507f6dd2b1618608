//! In-memory storage implementation for testing.
//!
//! Provides [`MemoryStore`] for unit testing without filesystem access.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::storage::{KeyValueStore, StorageError, StorageErrorKind, validate_key};

/// Backend identifier for error messages.
const BACKEND: &str = "Memory";

/// In-memory key-value store for testing.
///
/// Stores values in a map. Use the builder methods to seed values and to
/// inject read or write failures.
///
/// # Example
///
/// ```ignore
/// use cw_storage::{KeyValueStore, MemoryStore, StorageErrorKind};
///
/// let store = MemoryStore::new()
///     .with_value("campus-website-data", r#"{"collegeName":"X"}"#)
///     .with_write_failure(StorageErrorKind::QuotaExceeded);
///
/// assert!(store.set("campus-website-data", "{}").is_err());
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
    read_failure: RwLock<Option<StorageErrorKind>>,
    write_failure: RwLock<Option<StorageErrorKind>>,
    writes: RwLock<usize>,
}

impl MemoryStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_value(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values
            .write()
            .unwrap()
            .insert(key.into(), value.into());
        self
    }

    /// Make every `get` fail with `kind`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_read_failure(self, kind: StorageErrorKind) -> Self {
        *self.read_failure.write().unwrap() = Some(kind);
        self
    }

    /// Make every `set` and `remove` fail with `kind`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_write_failure(self, kind: StorageErrorKind) -> Self {
        self.set_write_failure(Some(kind));
        self
    }

    /// Change write failure injection after construction.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn set_write_failure(&self, kind: Option<StorageErrorKind>) {
        *self.write_failure.write().unwrap() = kind;
    }

    /// Raw stored value, bypassing failure injection.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.values.read().unwrap().get(key).cloned()
    }

    /// Number of successful `set` and `remove` calls.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn writes(&self) -> usize {
        *self.writes.read().unwrap()
    }

    fn check_write(&self, key: &str) -> Result<(), StorageError> {
        validate_key(key).map_err(|e| e.with_backend(BACKEND))?;
        if let Some(kind) = *self.write_failure.read().unwrap() {
            return Err(StorageError::new(kind).with_key(key).with_backend(BACKEND));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key).map_err(|e| e.with_backend(BACKEND))?;
        if let Some(kind) = *self.read_failure.read().unwrap() {
            return Err(StorageError::new(kind).with_key(key).with_backend(BACKEND));
        }
        Ok(self.values.read().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_write(key)?;
        self.values
            .write()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());
        *self.writes.write().unwrap() += 1;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.check_write(key)?;
        self.values.write().unwrap().remove(key);
        *self.writes.write().unwrap() += 1;
        Ok(())
    }
}
