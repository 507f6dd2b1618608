//! Persistent holder of the content document.
//!
//! [`ContentStore`] owns the in-memory [`ContentDocument`] and mirrors it to a
//! single key of a [`KeyValueStore`]. Reads are lenient: whatever part of the
//! stored value still parses survives, everything else falls back to the
//! default document. Writes are best-effort except for [`ContentStore::save`].

use std::sync::Arc;

use cw_content::{ContentDocument, Field, FieldUpdate};
use cw_storage::{KeyValueStore, StorageError};
use serde_json::Value;

/// Storage key the document is persisted under unless configured otherwise.
pub const DEFAULT_KEY: &str = "campus-website-data";

/// Error returned by an explicit save.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The document could not be encoded.
    #[error("failed to encode content: {0}")]
    Encode(#[from] serde_json::Error),
    /// The storage backend rejected the write.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// In-memory content document backed by a key-value slot.
pub struct ContentStore {
    storage: Arc<dyn KeyValueStore>,
    key: String,
    document: ContentDocument,
}

impl ContentStore {
    /// Create a store for `key` holding the default document.
    ///
    /// Nothing is read until [`load`](Self::load) is called.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            document: ContentDocument::default(),
        }
    }

    /// Storage key of this store.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current document.
    #[must_use]
    pub fn document(&self) -> &ContentDocument {
        &self.document
    }

    /// Read the persisted document and make it current.
    ///
    /// Missing or unreadable data yields the default document. A stored
    /// object is merged field by field over the defaults, so one malformed
    /// field does not discard the rest. Never writes to storage.
    pub fn load(&mut self) -> &ContentDocument {
        self.document = match self.storage.get(&self.key) {
            Ok(Some(raw)) => backfill(&self.key, &raw),
            Ok(None) => {
                tracing::debug!(key = %self.key, "no stored content, using defaults");
                ContentDocument::default()
            }
            Err(e) => {
                tracing::warn!(key = %self.key, "failed to read stored content: {e}");
                ContentDocument::default()
            }
        };
        &self.document
    }

    /// Replace one top-level field and persist the document.
    ///
    /// A failed write is logged; the in-memory change is kept either way.
    pub fn update(&mut self, update: FieldUpdate) -> &ContentDocument {
        let field = update.field();
        self.document.apply(update);
        if let Err(e) = self.persist() {
            tracing::warn!(key = %self.key, %field, "failed to persist content: {e}");
        }
        &self.document
    }

    /// Replace one top-level field in memory only.
    pub fn apply_transient(&mut self, update: FieldUpdate) {
        self.document.apply(update);
    }

    /// Write the current document, reporting failure to the caller.
    pub fn save(&self) -> Result<(), StoreError> {
        self.persist()?;
        tracing::info!(key = %self.key, "content saved");
        Ok(())
    }

    /// Forget the persisted document and restore the defaults.
    ///
    /// A failed removal is logged; the in-memory document is reset either way.
    pub fn reset(&mut self) -> &ContentDocument {
        if let Err(e) = self.clear() {
            tracing::warn!(key = %self.key, "failed to remove stored content: {e}");
        }
        &self.document
    }

    /// Restore the defaults and remove the persisted document, reporting
    /// a failed removal to the caller.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.document = ContentDocument::default();
        self.storage.remove(&self.key)?;
        Ok(())
    }

    fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.document)?;
        self.storage.set(&self.key, &json)?;
        Ok(())
    }
}

/// Merge a stored JSON value over the default document.
fn backfill(key: &str, raw: &str) -> ContentDocument {
    let mut document = ContentDocument::default();

    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, "stored content is not valid JSON, using defaults: {e}");
            return document;
        }
    };
    let Value::Object(fields) = value else {
        tracing::warn!(key, "stored content is not an object, using defaults");
        return document;
    };

    for (name, value) in fields {
        let Ok(field) = name.parse::<Field>() else {
            tracing::debug!(key, field = %name, "ignoring unknown stored field");
            continue;
        };
        match FieldUpdate::for_field(field, value) {
            Ok(update) => document.apply(update),
            Err(e) => tracing::warn!(key, %field, "discarding malformed stored field: {e}"),
        }
    }

    document
}

#[cfg(test)]
mod tests {
    use cw_content::navigation::{self, NavTemplate};
    use cw_storage::{MemoryStore, StorageErrorKind};
    use pretty_assertions::assert_eq;

    use super::*;

    fn store_with(memory: &Arc<MemoryStore>) -> ContentStore {
        ContentStore::new(Arc::clone(memory) as Arc<dyn KeyValueStore>, DEFAULT_KEY)
    }

    #[test]
    fn test_load_empty_returns_default_without_writing() {
        let memory = Arc::new(MemoryStore::new());
        let mut store = store_with(&memory);

        assert_eq!(store.load(), &ContentDocument::default());
        assert_eq!(store.load(), &ContentDocument::default());
        assert_eq!(memory.writes(), 0);
        assert_eq!(memory.peek(DEFAULT_KEY), None);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let memory = Arc::new(MemoryStore::new());
        let mut store = store_with(&memory);
        store.update(FieldUpdate::HeroTitle("Welcome".to_owned()));
        let saved = store.document().clone();

        let mut reopened = store_with(&memory);

        assert_eq!(reopened.load(), &saved);
    }

    #[test]
    fn test_update_persists_immediately() {
        let memory = Arc::new(MemoryStore::new());
        let mut store = store_with(&memory);

        store.update(FieldUpdate::Tagline("Learn".to_owned()));

        assert_eq!(memory.writes(), 1);
        let stored: Value = serde_json::from_str(&memory.peek(DEFAULT_KEY).unwrap()).unwrap();
        assert_eq!(stored["tagline"], "Learn");
    }

    #[test]
    fn test_partial_object_backfills_defaults() {
        let memory =
            Arc::new(MemoryStore::new().with_value(DEFAULT_KEY, r#"{"collegeName":"X"}"#));
        let mut store = store_with(&memory);

        let expected = ContentDocument {
            college_name: "X".to_owned(),
            ..ContentDocument::default()
        };
        assert_eq!(store.load(), &expected);
    }

    #[test]
    fn test_nested_footer_backfill() {
        let raw = r#"{"footerData":{"contactInfo":{"phone":"555"}}}"#;
        let memory = Arc::new(MemoryStore::new().with_value(DEFAULT_KEY, raw));
        let mut store = store_with(&memory);

        let doc = store.load();

        let defaults = ContentDocument::default();
        assert_eq!(doc.footer_data.contact_info.phone, "555");
        assert_eq!(
            doc.footer_data.contact_info.email,
            defaults.footer_data.contact_info.email
        );
        assert_eq!(doc.footer_data.quick_links, defaults.footer_data.quick_links);
    }

    #[test]
    fn test_malformed_field_is_dropped_individually() {
        let raw = r#"{"collegeName":"X","navigationItems":"oops","tagline":42}"#;
        let memory = Arc::new(MemoryStore::new().with_value(DEFAULT_KEY, raw));
        let mut store = store_with(&memory);

        let doc = store.load();

        let defaults = ContentDocument::default();
        assert_eq!(doc.college_name, "X");
        assert_eq!(doc.navigation_items, defaults.navigation_items);
        assert_eq!(doc.tagline, defaults.tagline);
    }

    #[test]
    fn test_navigation_entry_missing_href_keeps_stored_list() {
        let raw = r#"{"navigationItems":[
            {"id":"a","label":"Alpha","href":"/a","type":"internal"},
            {"id":"b","label":"Beta","type":"internal"}
        ]}"#;
        let memory = Arc::new(MemoryStore::new().with_value(DEFAULT_KEY, raw));
        let mut store = store_with(&memory);

        let items = &store.load().navigation_items;

        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(items[1].href, "");
    }

    #[test]
    fn test_corrupt_json_yields_default() {
        let memory = Arc::new(MemoryStore::new().with_value(DEFAULT_KEY, "{not json"));
        let mut store = store_with(&memory);

        assert_eq!(store.load(), &ContentDocument::default());
        assert_eq!(memory.writes(), 0);
    }

    #[test]
    fn test_non_object_yields_default() {
        let memory = Arc::new(MemoryStore::new().with_value(DEFAULT_KEY, "[1, 2, 3]"));
        let mut store = store_with(&memory);

        assert_eq!(store.load(), &ContentDocument::default());
    }

    #[test]
    fn test_read_failure_yields_default() {
        let memory = Arc::new(MemoryStore::new().with_read_failure(StorageErrorKind::Unavailable));
        let mut store = store_with(&memory);

        assert_eq!(store.load(), &ContentDocument::default());
    }

    #[test]
    fn test_write_failure_keeps_in_memory_change() {
        let memory =
            Arc::new(MemoryStore::new().with_write_failure(StorageErrorKind::QuotaExceeded));
        let mut store = store_with(&memory);

        let doc = store.update(FieldUpdate::CollegeName("Y".to_owned()));

        assert_eq!(doc.college_name, "Y");
        assert_eq!(memory.peek(DEFAULT_KEY), None);
    }

    #[test]
    fn test_save_reports_failure() {
        let memory =
            Arc::new(MemoryStore::new().with_write_failure(StorageErrorKind::PermissionDenied));
        let store = store_with(&memory);

        let err = store.save().unwrap_err();

        assert!(matches!(err, StoreError::Storage(e) if e.kind() == StorageErrorKind::PermissionDenied));
    }

    #[test]
    fn test_reset_removes_stored_value() {
        let memory = Arc::new(MemoryStore::new());
        let mut store = store_with(&memory);
        store.update(FieldUpdate::CollegeName("Y".to_owned()));

        let doc = store.reset().clone();

        assert_eq!(doc, ContentDocument::default());
        assert_eq!(memory.peek(DEFAULT_KEY), None);
    }

    #[test]
    fn test_clear_reports_failure_and_still_resets() {
        let memory = Arc::new(MemoryStore::new());
        let mut store = store_with(&memory);
        store.update(FieldUpdate::CollegeName("Y".to_owned()));
        memory.set_write_failure(Some(StorageErrorKind::PermissionDenied));

        let result = store.clear();

        assert!(matches!(result, Err(StoreError::Storage(_))));
        assert_eq!(store.document(), &ContentDocument::default());
        assert!(memory.peek(DEFAULT_KEY).is_some());
    }

    #[test]
    fn test_apply_transient_does_not_write() {
        let memory = Arc::new(MemoryStore::new());
        let mut store = store_with(&memory);

        store.apply_transient(FieldUpdate::CollegeName("Host".to_owned()));

        assert_eq!(store.document().college_name, "Host");
        assert_eq!(memory.writes(), 0);
    }

    #[test]
    fn test_add_research_scenario() {
        let memory = Arc::new(MemoryStore::new());
        let mut store = store_with(&memory);
        store.load();

        let items = navigation::add_item(
            &store.document().navigation_items,
            Some(NavTemplate::new(
                "Research",
                "/research",
                navigation::NavKind::Internal,
            )),
        );
        store.update(FieldUpdate::NavigationItems(items));

        let mut reopened = store_with(&memory);
        let labels: Vec<&str> = reopened
            .load()
            .navigation_items
            .iter()
            .map(|i| i.label.as_str())
            .collect();
        assert_eq!(
            labels,
            vec!["Home", "Departments", "Admissions", "About", "Contact", "Research"]
        );
    }
}
