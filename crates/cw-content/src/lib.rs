//! Content model for the campus website editor.
//!
//! The whole editable website lives in one [`ContentDocument`]: flat text
//! fields (college name, hero, about, academics), keyed lists (news,
//! departments, professional bodies), the footer record, and the navigation
//! menu. The document is replaced one top-level field at a time through
//! [`FieldUpdate`].
//!
//! The [`navigation`] module holds the only part with structural rules: an
//! ordered two-level menu with pure editing operations, a drag-and-drop
//! reorder protocol, and click-toggle dropdown state.
//!
//! # Example
//!
//! ```
//! use cw_content::navigation::{self, NavKind, NavTemplate};
//! use cw_content::{ContentDocument, FieldUpdate};
//!
//! let mut doc = ContentDocument::default();
//! let items = navigation::add_item(
//!     &doc.navigation_items,
//!     Some(NavTemplate::new("Research", "/research", NavKind::Internal)),
//! );
//! doc.apply(FieldUpdate::NavigationItems(items));
//! assert_eq!(doc.navigation_items.last().unwrap().label, "Research");
//! ```

mod document;
mod error;
mod field;
mod id;
pub mod lists;
pub mod navigation;
mod section;

pub use document::{
    ContactInfo, ContentDocument, Department, FooterData, FooterLink, NewsItem, ProfessionalBody,
    SocialLink,
};
pub use error::ContentError;
pub use field::{Field, FieldUpdate};
pub use id::new_id;
pub use section::{DESIGN_FIELDS, EditorTab, SectionId};
