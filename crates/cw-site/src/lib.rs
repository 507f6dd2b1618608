//! Content store and editor session for the campus website editor.
//!
//! This crate provides:
//! - [`ContentStore`]: the in-memory document mirrored to a key-value slot
//! - [`EditorSession`]: the editing target, sidebar tab and navigation UI
//!   state of one user, on top of a store
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! use cw_content::{FieldUpdate, SectionId};
//! use cw_site::{ContentStore, DEFAULT_KEY, EditorSession, SaveNotice};
//! use cw_storage::FsStore;
//!
//! let storage = Arc::new(FsStore::new(PathBuf::from(".cw")));
//! let mut session = EditorSession::open(ContentStore::new(storage, DEFAULT_KEY), None);
//!
//! session.request_edit(SectionId::Hero);
//! session.update(FieldUpdate::HeroTitle("Welcome".to_owned()));
//! assert_eq!(session.save(), SaveNotice::Saved);
//! ```

mod session;
mod store;

pub use session::{EditorSession, SaveNotice};
pub use store::{ContentStore, DEFAULT_KEY, StoreError};
