//! Navigation menu model and editing operations.
//!
//! The menu is an ordered list of [`NavigationItem`]s. A dropdown item owns
//! an ordered list of [`NavChild`]ren; children carry no children of their
//! own, so the menu is exactly two levels deep by construction. Nested
//! children found in stored JSON below a child are ignored on load.
//!
//! All editing operations in [`ops`] are pure: they take the current list
//! and return a new one. The caller commits the result through
//! `FieldUpdate::NavigationItems`.
//!
//! Rendering goes through [`NavigationItem::link`], which folds kind and
//! children into a closed [`NavLink`] so that a dropdown without children
//! is handled once, here, as a plain internal link.

mod drag;
mod menu;
pub mod ops;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::ContentError;
use crate::id::new_id;

pub use drag::DragState;
pub use menu::MenuState;
pub use ops::{
    add_child, add_item, remove_child, remove_item, reorder, reorder_children, update_child,
    update_item,
};

/// Label used when a top-level item is added without a template.
pub const DEFAULT_ITEM_LABEL: &str = "New Item";
/// Label used when a child is added without a template.
pub const DEFAULT_CHILD_LABEL: &str = "New Child";
/// Link target used when an item is added without a template.
pub const DEFAULT_HREF: &str = "#";

/// How a navigation entry links.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavKind {
    /// Link within the site.
    #[default]
    Internal,
    /// Link to another site, opened in a new tab.
    External,
    /// Trigger for a list of child links.
    Dropdown,
}

impl NavKind {
    /// Wire name of the kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::External => "external",
            Self::Dropdown => "dropdown",
        }
    }
}

impl fmt::Display for NavKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NavKind {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "internal" => Ok(Self::Internal),
            "external" => Ok(Self::External),
            "dropdown" => Ok(Self::Dropdown),
            other => Err(ContentError::UnknownKind(other.to_owned())),
        }
    }
}

/// Top-level navigation menu entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    /// Stable identifier, assigned at creation.
    #[serde(default = "fresh_item_id")]
    pub id: String,
    /// Display label.
    #[serde(default)]
    pub label: String,
    /// Link target (ignored for dropdowns that have children).
    #[serde(default)]
    pub href: String,
    /// Link kind.
    #[serde(rename = "type", default)]
    pub kind: NavKind,
    /// Dropdown entries.
    ///
    /// Kept when the kind changes away from dropdown so switching back
    /// restores them; only rendered while the kind is dropdown.
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<NavChild>,
}

/// Entry inside a dropdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavChild {
    /// Stable identifier, assigned at creation.
    #[serde(default = "fresh_child_id")]
    pub id: String,
    /// Display label.
    #[serde(default)]
    pub label: String,
    /// Link target.
    #[serde(default)]
    pub href: String,
    /// Link kind. A child marked `dropdown` renders as an internal link.
    #[serde(rename = "type", default)]
    pub kind: NavKind,
}

/// Resolved rendering form of a navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavLink<'a> {
    /// Same-site link.
    Internal { href: &'a str },
    /// Off-site link.
    External { href: &'a str },
    /// Expandable trigger with at least one child.
    Dropdown { children: &'a [NavChild] },
}

impl NavigationItem {
    /// Resolve how this item renders.
    ///
    /// A dropdown with no children degrades to an internal link to `href`.
    #[must_use]
    pub fn link(&self) -> NavLink<'_> {
        match self.kind {
            NavKind::Internal => NavLink::Internal { href: &self.href },
            NavKind::External => NavLink::External { href: &self.href },
            NavKind::Dropdown if self.children.is_empty() => NavLink::Internal { href: &self.href },
            NavKind::Dropdown => NavLink::Dropdown {
                children: &self.children,
            },
        }
    }
}

impl NavChild {
    /// Resolve how this child renders. Never a dropdown.
    #[must_use]
    pub fn link(&self) -> NavLink<'_> {
        match self.kind {
            NavKind::External => NavLink::External { href: &self.href },
            NavKind::Internal | NavKind::Dropdown => NavLink::Internal { href: &self.href },
        }
    }
}

/// Field values for a newly created entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavTemplate {
    pub label: String,
    pub href: String,
    #[serde(rename = "type")]
    pub kind: NavKind,
}

impl NavTemplate {
    /// Create a template.
    #[must_use]
    pub fn new(label: impl Into<String>, href: impl Into<String>, kind: NavKind) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            kind,
        }
    }

    /// Default template for a new child entry.
    #[must_use]
    pub fn child() -> Self {
        Self::new(DEFAULT_CHILD_LABEL, DEFAULT_HREF, NavKind::Internal)
    }
}

impl Default for NavTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_ITEM_LABEL, DEFAULT_HREF, NavKind::Internal)
    }
}

/// Partial update for an entry. `None` fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavPatch {
    pub label: Option<String>,
    pub href: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<NavKind>,
}

impl NavPatch {
    /// Patch that only changes the label.
    #[must_use]
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Patch that only changes the link target.
    #[must_use]
    pub fn href(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::default()
        }
    }

    /// Patch that only changes the kind.
    #[must_use]
    pub fn kind(kind: NavKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    /// True if the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.href.is_none() && self.kind.is_none()
    }
}

/// Accept `"children": null` from older documents as an empty list.
// Stored entries written without an id get a fresh one on load.
fn fresh_item_id() -> String {
    new_id("nav")
}

fn fresh_child_id() -> String {
    new_id("child")
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<NavChild>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<NavChild>>::deserialize(deserializer)?.unwrap_or_default())
}
