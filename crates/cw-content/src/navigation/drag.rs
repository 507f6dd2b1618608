//! Drag-and-drop reorder protocol.

use super::{NavigationItem, reorder};

/// Transient state of a drag gesture over the navigation list.
///
/// `start` captures the id of the item under the pointer, `over` answers
/// whether a position is a valid drop target without touching anything,
/// and `drop` resolves the id against the list as it is at drop time and
/// commits a single [`reorder`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DragState {
    source: Option<String>,
}

impl DragState {
    /// Create an idle drag state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin dragging the element at `index` of `items`.
    ///
    /// Returns false, leaving the state idle, when `index` is out of range.
    pub fn start(&mut self, items: &[NavigationItem], index: usize) -> bool {
        self.source = items.get(index).map(|item| item.id.clone());
        self.source.is_some()
    }

    /// Id of the item being dragged, if any.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// True while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.source.is_some()
    }

    /// Whether dropping on `index` would be accepted.
    ///
    /// Any position is a valid target while a drag is in progress;
    /// dropping onto the source itself is accepted and does nothing.
    #[must_use]
    pub fn over(&self, index: usize, len: usize) -> bool {
        self.source.is_some() && index < len
    }

    /// Finish the drag on `target`.
    ///
    /// Returns the reordered list, or `None` when the order would not
    /// change: nothing was being dragged, the dragged item no longer
    /// exists, `target` is out of range, or the item was dropped onto
    /// itself. The source is cleared either way.
    pub fn drop(&mut self, items: &[NavigationItem], target: usize) -> Option<Vec<NavigationItem>> {
        let id = self.source.take()?;
        let source = items.iter().position(|item| item.id == id)?;
        if source == target || target >= items.len() {
            return None;
        }
        Some(reorder(items, source, target))
    }

    /// Abandon the drag without reordering.
    pub fn cancel(&mut self) {
        self.source = None;
    }
}
