//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::{Mutex, MutexGuard, PoisonError};

use cw_site::EditorSession;

/// Application state shared across all handlers.
///
/// Every request locks the session, runs to completion (including the
/// storage write) and releases it before responding. The lock is never
/// held across an `.await`.
pub(crate) struct AppState {
    session: Mutex<EditorSession>,
}

impl AppState {
    pub(crate) fn new(session: EditorSession) -> Self {
        Self {
            session: Mutex::new(session),
        }
    }

    /// Lock the editing session.
    ///
    /// A panic in another handler leaves the session consistent, since each
    /// operation replaces whole fields, so a poisoned lock is recovered.
    pub(crate) fn session(&self) -> MutexGuard<'_, EditorSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
