//! HTML preview rendering for the campus website editor.
//!
//! This crate turns a [`ContentDocument`](cw_content::ContentDocument) into
//! the page preview shown next to the editor, and decides which fields the
//! editor panel binds for the current target section and tab.
//!
//! # Example
//!
//! ```
//! use cw_content::{ContentDocument, SectionId};
//! use cw_renderer::render;
//!
//! let html = render(&ContentDocument::default(), Some(SectionId::Hero));
//! assert!(html.contains(r#"class="cw-section editing" data-section="hero""#));
//! ```

mod escape;
mod page;
mod panel;

pub use escape::escape_html;
pub use page::{RenderState, render, render_with};
pub use panel::{EditorPanel, PanelField, editor_fields};
