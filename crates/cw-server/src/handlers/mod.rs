//! HTTP request handlers.

pub(crate) mod content;
pub(crate) mod editor;
pub(crate) mod navigation;
pub(crate) mod preview;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use cw_site::{ContentStore, DEFAULT_KEY, EditorSession};
    use cw_storage::{KeyValueStore, MemoryStore};

    use crate::state::AppState;

    /// State over a fresh in-memory store, plus the store for inspection.
    pub(crate) fn state() -> (Arc<AppState>, Arc<MemoryStore>) {
        state_with(MemoryStore::new())
    }

    pub(crate) fn state_with(memory: MemoryStore) -> (Arc<AppState>, Arc<MemoryStore>) {
        let memory = Arc::new(memory);
        let store = ContentStore::new(Arc::clone(&memory) as Arc<dyn KeyValueStore>, DEFAULT_KEY);
        let session = EditorSession::open(store, None);
        (Arc::new(AppState::new(session)), memory)
    }
}
