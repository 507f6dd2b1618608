//! Pure editing operations on the navigation list.
//!
//! Every operation takes the current list and returns a new one. Requests
//! naming an id or index that does not exist return the input unchanged:
//! they are the normal outcome of an edit racing a delete within one
//! session, not errors.

use super::{NavChild, NavPatch, NavTemplate, NavigationItem};
use crate::id::new_id;

/// Append a new top-level item with a fresh id.
///
/// Uses `template` for the visible fields, or "New Item" / `#` / internal.
#[must_use]
pub fn add_item(items: &[NavigationItem], template: Option<NavTemplate>) -> Vec<NavigationItem> {
    let template = template.unwrap_or_default();
    let mut updated = items.to_vec();
    updated.push(NavigationItem {
        id: new_id("nav"),
        label: template.label,
        href: template.href,
        kind: template.kind,
        children: Vec::new(),
    });
    updated
}

/// Apply `patch` to the top-level item with `id`.
///
/// Changing the kind away from dropdown keeps the children.
#[must_use]
pub fn update_item(items: &[NavigationItem], id: &str, patch: &NavPatch) -> Vec<NavigationItem> {
    items
        .iter()
        .map(|item| {
            if item.id != id {
                return item.clone();
            }
            let mut item = item.clone();
            if let Some(label) = &patch.label {
                item.label.clone_from(label);
            }
            if let Some(href) = &patch.href {
                item.href.clone_from(href);
            }
            if let Some(kind) = patch.kind {
                item.kind = kind;
            }
            item
        })
        .collect()
}

/// Remove the top-level item with `id`, children included.
#[must_use]
pub fn remove_item(items: &[NavigationItem], id: &str) -> Vec<NavigationItem> {
    items.iter().filter(|item| item.id != id).cloned().collect()
}

/// Move the element at `from` to position `to`.
///
/// Elements between the two positions shift by one. Equal or out-of-range
/// indices return the input unchanged.
#[must_use]
pub fn reorder(items: &[NavigationItem], from: usize, to: usize) -> Vec<NavigationItem> {
    move_element(items, from, to)
}

/// Append a new child to the item with `parent_id`.
///
/// Uses `template` for the visible fields, or "New Child" / `#` / internal.
#[must_use]
pub fn add_child(
    items: &[NavigationItem],
    parent_id: &str,
    template: Option<NavTemplate>,
) -> Vec<NavigationItem> {
    let template = template.unwrap_or_else(NavTemplate::child);
    with_children(items, parent_id, |children| {
        children.push(NavChild {
            id: new_id("child"),
            label: template.label.clone(),
            href: template.href.clone(),
            kind: template.kind,
        });
    })
}

/// Apply `patch` to one child of the item with `parent_id`.
#[must_use]
pub fn update_child(
    items: &[NavigationItem],
    parent_id: &str,
    child_id: &str,
    patch: &NavPatch,
) -> Vec<NavigationItem> {
    with_children(items, parent_id, |children| {
        for child in children.iter_mut().filter(|c| c.id == child_id) {
            if let Some(label) = &patch.label {
                child.label.clone_from(label);
            }
            if let Some(href) = &patch.href {
                child.href.clone_from(href);
            }
            if let Some(kind) = patch.kind {
                child.kind = kind;
            }
        }
    })
}

/// Remove one child of the item with `parent_id`. The parent is untouched.
#[must_use]
pub fn remove_child(
    items: &[NavigationItem],
    parent_id: &str,
    child_id: &str,
) -> Vec<NavigationItem> {
    with_children(items, parent_id, |children| {
        children.retain(|c| c.id != child_id);
    })
}

/// Move a child within the dropdown of `parent_id`.
///
/// Same rules as [`reorder`], applied to one parent's children.
#[must_use]
pub fn reorder_children(
    items: &[NavigationItem],
    parent_id: &str,
    from: usize,
    to: usize,
) -> Vec<NavigationItem> {
    with_children(items, parent_id, |children| {
        *children = move_element(children, from, to);
    })
}

/// Clone `items`, running `edit` on the children of the matching parent.
fn with_children<F>(items: &[NavigationItem], parent_id: &str, mut edit: F) -> Vec<NavigationItem>
where
    F: FnMut(&mut Vec<NavChild>),
{
    items
        .iter()
        .map(|item| {
            let mut item = item.clone();
            if item.id == parent_id {
                edit(&mut item.children);
            }
            item
        })
        .collect()
}

fn move_element<T: Clone>(list: &[T], from: usize, to: usize) -> Vec<T> {
    let mut updated = list.to_vec();
    if from == to || from >= list.len() || to >= list.len() {
        return updated;
    }
    let element = updated.remove(from);
    updated.insert(to, element);
    updated
}
