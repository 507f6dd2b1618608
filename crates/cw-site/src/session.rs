//! One editing session over a content store.

use std::fmt;

use cw_content::lists::KeyedList;
use cw_content::navigation::{DragState, MenuState, NavigationItem};
use cw_content::{ContentDocument, EditorTab, FieldUpdate, SectionId};
use serde::Serialize;

use crate::store::ContentStore;

/// Outcome of an explicit save, shown to the user once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum SaveNotice {
    Saved,
    Failed(String),
}

impl fmt::Display for SaveNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Saved => f.write_str("Changes saved"),
            Self::Failed(message) => write!(f, "Save failed: {message}"),
        }
    }
}

/// Editor state for one user: the document, which section is being
/// edited, the active sidebar tab, and transient navigation UI state.
///
/// The document is loaded once when the session opens. Every edit goes
/// through [`ContentStore::update`] so it is persisted as it happens.
pub struct EditorSession {
    store: ContentStore,
    host_college_name: Option<String>,
    target: Option<SectionId>,
    tab: EditorTab,
    drag: DragState,
    menu: MenuState,
}

impl EditorSession {
    /// Load the document from `store` and start a session.
    ///
    /// A college name supplied by the host replaces the stored one for the
    /// lifetime of the session without being written back on its own.
    pub fn open(mut store: ContentStore, host_college_name: Option<String>) -> Self {
        store.load();
        let mut session = Self {
            store,
            host_college_name,
            target: None,
            tab: EditorTab::default(),
            drag: DragState::new(),
            menu: MenuState::new(),
        };
        session.apply_host_overrides();
        session
    }

    /// Current document.
    #[must_use]
    pub fn document(&self) -> &ContentDocument {
        self.store.document()
    }

    /// Section currently open in the editor.
    #[must_use]
    pub fn target(&self) -> Option<SectionId> {
        self.target
    }

    /// Active sidebar tab.
    #[must_use]
    pub fn tab(&self) -> EditorTab {
        self.tab
    }

    /// Dropdown state of the preview.
    #[must_use]
    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    /// Drag gesture state of the navigation editor.
    #[must_use]
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// Open the editor on `section` with the Content tab active.
    pub fn request_edit(&mut self, section: SectionId) {
        tracing::debug!(%section, "editing section");
        self.target = Some(section);
        self.tab = EditorTab::Content;
    }

    /// Close the editor panel.
    pub fn close_editor(&mut self) {
        self.target = None;
    }

    /// Switch the sidebar tab.
    pub fn set_tab(&mut self, tab: EditorTab) {
        self.tab = tab;
    }

    /// Replace one field and persist.
    ///
    /// A new navigation list closes the open dropdown and abandons the
    /// drag if the item either refers to is gone.
    pub fn update(&mut self, update: FieldUpdate) -> &ContentDocument {
        if let FieldUpdate::NavigationItems(items) = &update {
            self.forget_missing_navigation(items);
        }
        self.store.update(update)
    }

    /// Apply a navigation edit and persist the resulting list.
    pub fn edit_navigation<F>(&mut self, edit: F) -> &[NavigationItem]
    where
        F: FnOnce(&[NavigationItem]) -> Vec<NavigationItem>,
    {
        let items = edit(&self.document().navigation_items);
        &self.update(FieldUpdate::NavigationItems(items)).navigation_items
    }

    fn forget_missing_navigation(&mut self, items: &[NavigationItem]) {
        let present = |id: &str| items.iter().any(|item| item.id == id);
        if self.menu.open_id().is_some_and(|open| !present(open)) {
            self.menu.close();
        }
        if self.drag.source().is_some_and(|source| !present(source)) {
            self.drag.cancel();
        }
    }

    /// Append a placeholder to a keyed list and persist.
    pub fn add_list_item(&mut self, list: KeyedList) -> &ContentDocument {
        let update = list.append(self.document());
        self.update(update)
    }

    /// Remove an element from a keyed list and persist.
    pub fn remove_list_item(&mut self, list: KeyedList, id: &str) -> &ContentDocument {
        let update = list.remove(self.document(), id);
        self.update(update)
    }

    /// Begin dragging the navigation item at `index`.
    ///
    /// Returns false if there is no item at `index`.
    pub fn drag_start(&mut self, index: usize) -> bool {
        self.drag.start(&self.store.document().navigation_items, index)
    }

    /// Drop the dragged navigation item on `index`.
    ///
    /// Returns true if the order changed.
    pub fn drag_drop(&mut self, index: usize) -> bool {
        match self.drag.drop(&self.store.document().navigation_items, index) {
            Some(items) => {
                self.update(FieldUpdate::NavigationItems(items));
                true
            }
            None => false,
        }
    }

    /// Abandon the current drag.
    pub fn drag_cancel(&mut self) {
        self.drag.cancel();
    }

    /// Activate the dropdown trigger for `id`.
    pub fn toggle_menu(&mut self, id: &str) {
        self.menu.toggle(id);
    }

    /// Close any open dropdown.
    pub fn close_menu(&mut self) {
        self.menu.close();
    }

    /// Write the document and report the outcome.
    pub fn save(&self) -> SaveNotice {
        match self.store.save() {
            Ok(()) => SaveNotice::Saved,
            Err(e) => {
                tracing::warn!("save failed: {e}");
                SaveNotice::Failed(e.to_string())
            }
        }
    }

    /// Restore the default document and forget the stored one.
    pub fn reset(&mut self) -> &ContentDocument {
        self.store.reset();
        self.menu.close();
        self.apply_host_overrides();
        self.store.document()
    }

    /// Re-read the document from storage, discarding unsaved state.
    pub fn reload(&mut self) -> &ContentDocument {
        self.store.load();
        self.menu.close();
        self.drag.cancel();
        self.apply_host_overrides();
        self.store.document()
    }

    fn apply_host_overrides(&mut self) {
        if let Some(name) = &self.host_college_name {
            self.store
                .apply_transient(FieldUpdate::CollegeName(name.clone()));
        }
    }
}
