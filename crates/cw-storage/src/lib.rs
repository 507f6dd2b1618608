//! Key-value persistence for the campus website editor.
//!
//! This crate provides a [`KeyValueStore`] trait for the single slot the
//! content document is persisted under. Keeping the store behind a trait
//! enables:
//!
//! - **Unit testing** without touching the real filesystem
//! - **Backend flexibility** (local directory today, anything keyed tomorrow)
//! - **Clean separation** between the content store and I/O operations
//!
//! # Architecture
//!
//! The crate provides:
//! - [`KeyValueStore`] trait with `get()`, `set()`, and `remove()` methods
//! - [`FsStore`] implementation that keeps one JSON file per key
//! - [`MemoryStore`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use cw_storage::{FsStore, KeyValueStore};
//!
//! let store = FsStore::new(PathBuf::from(".cw"));
//! store.set("campus-website-data", "{}")?;
//! assert_eq!(store.get("campus-website-data")?, Some("{}".to_owned()));
//! ```

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod storage;

pub use fs::FsStore;
#[cfg(feature = "mock")]
pub use mock::MemoryStore;
pub use storage::{KeyValueStore, StorageError, StorageErrorKind, validate_key};
