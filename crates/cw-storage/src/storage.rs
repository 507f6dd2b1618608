//! Key-value store trait and error types.
//!
//! Provides the core [`KeyValueStore`] trait for the persisted content slot,
//! along with [`StorageError`] for unified error handling across backends.
//!
//! # Key Convention
//!
//! Keys are flat identifiers such as `"campus-website-data"`. They must be
//! non-empty, must not start with a dot, and must not contain path separators,
//! so that every backend can map a key onto its own namespace without escaping.

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// Invalid key.
    InvalidKey,
    /// Permission denied.
    PermissionDenied,
    /// Backend has no room left for the value.
    QuotaExceeded,
    /// Stored bytes are not valid UTF-8 text.
    Corrupt,
    /// Backend is temporarily unavailable.
    Unavailable,
    /// Other/unknown error category.
    Other,
}

/// Storage error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StorageError {
    kind: StorageErrorKind,
    key: Option<String>,
    backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    /// Create a new storage error.
    #[must_use]
    pub fn new(kind: StorageErrorKind) -> Self {
        Self {
            kind,
            key: None,
            backend: None,
            source: None,
        }
    }

    /// Attach key context.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Semantic error category.
    #[must_use]
    pub fn kind(&self) -> StorageErrorKind {
        self.kind
    }

    /// Key the failed operation addressed, if known.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Backend identifier (e.g., "Fs", "Memory").
    #[must_use]
    pub fn backend(&self) -> Option<&'static str> {
        self.backend
    }

    /// Create a storage error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, key: Option<&str>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::PermissionDenied | std::io::ErrorKind::ReadOnlyFilesystem => {
                StorageErrorKind::PermissionDenied
            }
            std::io::ErrorKind::StorageFull | std::io::ErrorKind::FileTooLarge => {
                StorageErrorKind::QuotaExceeded
            }
            std::io::ErrorKind::InvalidData => StorageErrorKind::Corrupt,
            std::io::ErrorKind::TimedOut | std::io::ErrorKind::ResourceBusy => {
                StorageErrorKind::Unavailable
            }
            _ => StorageErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(k) = key {
            error = error.with_key(k);
        }
        error
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (key: foo)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StorageErrorKind::InvalidKey => "Invalid key",
            StorageErrorKind::PermissionDenied => "Permission denied",
            StorageErrorKind::QuotaExceeded => "Quota exceeded",
            StorageErrorKind::Corrupt => "Corrupt value",
            StorageErrorKind::Unavailable => "Unavailable",
            StorageErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(key) = &self.key {
            write!(f, " (key: {key})")?;
        }

        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Check that a key can be used with every backend.
///
/// # Errors
///
/// Returns [`StorageErrorKind::InvalidKey`] for empty keys, keys starting
/// with `.`, and keys containing `/` or `\`.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    if key.is_empty() || key.starts_with('.') || key.contains(['/', '\\']) {
        return Err(StorageError::new(StorageErrorKind::InvalidKey).with_key(key));
    }
    Ok(())
}

/// Synchronous key-value store holding persisted editor state.
///
/// Mirrors the browser local-storage contract: a missing key is not an
/// error, writes replace the previous value, and removing a missing key
/// succeeds.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the key is invalid or the backend fails.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the key is invalid or the write fails
    /// (e.g., quota exceeded, permission denied).
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the key is invalid or the backend fails.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
