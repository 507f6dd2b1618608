//! Filesystem storage implementation.
//!
//! Provides [`FsStore`], which keeps each key as a JSON file inside a
//! project directory:
//!
//! ```text
//! {root}/
//! +-- campus-website-data.json
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::storage::{KeyValueStore, StorageError, validate_key};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// File extension appended to every key.
const EXTENSION: &str = "json";

/// Filesystem key-value store.
///
/// Writes go to a temporary sibling file first and are renamed into place,
/// so a crash mid-write never leaves a truncated value behind.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use cw_storage::{FsStore, KeyValueStore};
///
/// let store = FsStore::new(PathBuf::from(".cw"));
/// let value = store.get("campus-website-data")?;
/// ```
#[derive(Debug, Clone)]
pub struct FsStore {
    /// Directory holding one file per key.
    root: PathBuf,
}

impl FsStore {
    /// Create a store rooted at `root`.
    ///
    /// The directory is created lazily on the first write.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Directory holding the stored values.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a key to its file path, validating the key first.
    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key).map_err(|e| e.with_backend(BACKEND))?;
        Ok(self.root.join(format!("{key}.{EXTENSION}")))
    }

    fn io_error(err: std::io::Error, key: &str) -> StorageError {
        StorageError::io(err, Some(key)).with_backend(BACKEND)
    }
}

impl KeyValueStore for FsStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_error(e, key)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root).map_err(|e| Self::io_error(e, key))?;

        let tmp_path = self.root.join(format!(".{key}.{EXTENSION}.tmp"));
        fs::write(&tmp_path, value).map_err(|e| Self::io_error(e, key))?;
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(Self::io_error(e, key));
        }

        tracing::debug!(key, path = %path.display(), bytes = value.len(), "Stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(key, path = %path.display(), "Removed value");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_error(e, key)),
        }
    }
}
