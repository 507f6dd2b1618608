//! Editor panel field binding.

use cw_content::{ContentDocument, DESIGN_FIELDS, EditorTab, Field, SectionId};
use serde::Serialize;
use serde_json::Value;

/// Fields the editor panel binds for `target` on `tab`.
///
/// The Design tab always shows the colour and logo fields. The Content tab
/// shows the fields of the targeted section, or nothing when no section is
/// targeted.
#[must_use]
pub fn editor_fields(target: Option<SectionId>, tab: EditorTab) -> &'static [Field] {
    match (tab, target) {
        (EditorTab::Design, _) => &DESIGN_FIELDS,
        (EditorTab::Content, Some(section)) => section.fields(),
        (EditorTab::Content, None) => &[],
    }
}

/// One bound field with its current value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PanelField {
    /// Document key, as accepted by a field update.
    pub field: &'static str,
    pub label: &'static str,
    pub value: Value,
}

/// Contents of the editor panel for the current session state.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EditorPanel {
    pub target: Option<SectionId>,
    pub title: Option<&'static str>,
    pub tab: EditorTab,
    pub fields: Vec<PanelField>,
}

impl EditorPanel {
    /// Build the panel for `target` and `tab` from `doc`.
    #[must_use]
    pub fn new(doc: &ContentDocument, target: Option<SectionId>, tab: EditorTab) -> Self {
        let fields = editor_fields(target, tab)
            .iter()
            .map(|&field| PanelField {
                field: field.as_str(),
                label: field.label(),
                value: doc.field_value(field),
            })
            .collect();
        Self {
            target,
            title: target.map(SectionId::title),
            tab,
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_design_fields_ignore_target() {
        assert_eq!(
            editor_fields(Some(SectionId::News), EditorTab::Design),
            &[Field::PrimaryColor, Field::SecondaryColor, Field::LogoUrl]
        );
        assert_eq!(editor_fields(None, EditorTab::Design), &DESIGN_FIELDS);
    }

    #[test]
    fn test_content_fields_follow_target() {
        assert_eq!(
            editor_fields(Some(SectionId::About), EditorTab::Content),
            &[Field::AboutTitle, Field::AboutContent]
        );
        assert!(editor_fields(None, EditorTab::Content).is_empty());
    }

    #[test]
    fn test_panel_carries_current_values() {
        let doc = ContentDocument::default();

        let panel = EditorPanel::new(&doc, Some(SectionId::Hero), EditorTab::Content);

        assert_eq!(panel.title, Some("Hero Banner"));
        assert_eq!(panel.fields[0].field, "heroTitle");
        assert_eq!(panel.fields[0].value, json!("Shaping Tomorrow's Leaders"));
    }

    #[test]
    fn test_panel_serialization() {
        let doc = ContentDocument::default();

        let json = serde_json::to_value(EditorPanel::new(&doc, None, EditorTab::Design)).unwrap();

        assert_eq!(json["target"], Value::Null);
        assert_eq!(json["tab"], "design");
        assert_eq!(json["fields"][0]["field"], "primaryColor");
        assert_eq!(json["fields"][0]["value"], "#2563eb");
    }
}
