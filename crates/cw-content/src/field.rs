//! Top-level document fields and single-field replacement.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::{ContentDocument, Department, FooterData, NewsItem, ProfessionalBody};
use crate::error::ContentError;
use crate::navigation::NavigationItem;

/// Name of a top-level [`ContentDocument`] field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    CollegeName,
    Tagline,
    LogoUrl,
    PrimaryColor,
    SecondaryColor,
    HeroTitle,
    HeroSubtitle,
    CtaButtonText,
    CtaButtonLink,
    AboutTitle,
    AboutContent,
    AcademicsTitle,
    AcademicsDescription,
    Departments,
    ProfessionalBodiesTitle,
    ProfessionalBodies,
    NavigationItems,
    NewsItems,
    FooterData,
}

impl Field {
    /// Every field, in document order.
    pub const ALL: [Self; 19] = [
        Self::CollegeName,
        Self::Tagline,
        Self::LogoUrl,
        Self::PrimaryColor,
        Self::SecondaryColor,
        Self::HeroTitle,
        Self::HeroSubtitle,
        Self::CtaButtonText,
        Self::CtaButtonLink,
        Self::AboutTitle,
        Self::AboutContent,
        Self::AcademicsTitle,
        Self::AcademicsDescription,
        Self::Departments,
        Self::ProfessionalBodiesTitle,
        Self::ProfessionalBodies,
        Self::NavigationItems,
        Self::NewsItems,
        Self::FooterData,
    ];

    /// JSON key of the field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CollegeName => "collegeName",
            Self::Tagline => "tagline",
            Self::LogoUrl => "logoUrl",
            Self::PrimaryColor => "primaryColor",
            Self::SecondaryColor => "secondaryColor",
            Self::HeroTitle => "heroTitle",
            Self::HeroSubtitle => "heroSubtitle",
            Self::CtaButtonText => "ctaButtonText",
            Self::CtaButtonLink => "ctaButtonLink",
            Self::AboutTitle => "aboutTitle",
            Self::AboutContent => "aboutContent",
            Self::AcademicsTitle => "academicsTitle",
            Self::AcademicsDescription => "academicsDescription",
            Self::Departments => "departments",
            Self::ProfessionalBodiesTitle => "professionalBodiesTitle",
            Self::ProfessionalBodies => "professionalBodies",
            Self::NavigationItems => "navigationItems",
            Self::NewsItems => "newsItems",
            Self::FooterData => "footerData",
        }
    }

    /// Human-readable label for editor forms.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::CollegeName => "College Name",
            Self::Tagline => "Tagline",
            Self::LogoUrl => "Logo",
            Self::PrimaryColor => "Primary Color",
            Self::SecondaryColor => "Secondary Color",
            Self::HeroTitle => "Hero Title",
            Self::HeroSubtitle => "Hero Subtitle",
            Self::CtaButtonText => "Button Text",
            Self::CtaButtonLink => "Button Link",
            Self::AboutTitle => "About Title",
            Self::AboutContent => "About Content",
            Self::AcademicsTitle => "Academics Title",
            Self::AcademicsDescription => "Academics Description",
            Self::Departments => "Departments",
            Self::ProfessionalBodiesTitle => "Professional Bodies Title",
            Self::ProfessionalBodies => "Professional Bodies",
            Self::NavigationItems => "Navigation Menu",
            Self::NewsItems => "News Articles",
            Self::FooterData => "Footer",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ContentError::UnknownField(s.to_owned()))
    }
}

/// Replacement value for exactly one top-level field.
///
/// Composite fields are replaced whole: changing the footer phone number
/// means sending the complete [`FooterData`].
///
/// Serializes as `{"field": "<name>", "value": <value>}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldUpdate {
    CollegeName(String),
    Tagline(String),
    LogoUrl(String),
    PrimaryColor(String),
    SecondaryColor(String),
    HeroTitle(String),
    HeroSubtitle(String),
    CtaButtonText(String),
    CtaButtonLink(String),
    AboutTitle(String),
    AboutContent(String),
    AcademicsTitle(String),
    AcademicsDescription(String),
    Departments(Vec<Department>),
    ProfessionalBodiesTitle(String),
    ProfessionalBodies(Vec<ProfessionalBody>),
    NavigationItems(Vec<NavigationItem>),
    NewsItems(Vec<NewsItem>),
    FooterData(FooterData),
}

impl FieldUpdate {
    /// Build an update from a field name and a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::UnknownField`] for names that are not document
    /// fields and [`ContentError::InvalidValue`] when `value` has the wrong shape.
    pub fn from_json(field: &str, value: Value) -> Result<Self, ContentError> {
        let field: Field = field.parse()?;
        Self::for_field(field, value)
    }

    /// Build an update for a known field from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidValue`] when `value` has the wrong shape.
    pub fn for_field(field: Field, value: Value) -> Result<Self, ContentError> {
        let tagged = serde_json::json!({ "field": field.as_str(), "value": value });
        serde_json::from_value(tagged).map_err(|source| ContentError::InvalidValue {
            field: field.as_str(),
            source,
        })
    }

    /// Field this update replaces.
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::CollegeName(_) => Field::CollegeName,
            Self::Tagline(_) => Field::Tagline,
            Self::LogoUrl(_) => Field::LogoUrl,
            Self::PrimaryColor(_) => Field::PrimaryColor,
            Self::SecondaryColor(_) => Field::SecondaryColor,
            Self::HeroTitle(_) => Field::HeroTitle,
            Self::HeroSubtitle(_) => Field::HeroSubtitle,
            Self::CtaButtonText(_) => Field::CtaButtonText,
            Self::CtaButtonLink(_) => Field::CtaButtonLink,
            Self::AboutTitle(_) => Field::AboutTitle,
            Self::AboutContent(_) => Field::AboutContent,
            Self::AcademicsTitle(_) => Field::AcademicsTitle,
            Self::AcademicsDescription(_) => Field::AcademicsDescription,
            Self::Departments(_) => Field::Departments,
            Self::ProfessionalBodiesTitle(_) => Field::ProfessionalBodiesTitle,
            Self::ProfessionalBodies(_) => Field::ProfessionalBodies,
            Self::NavigationItems(_) => Field::NavigationItems,
            Self::NewsItems(_) => Field::NewsItems,
            Self::FooterData(_) => Field::FooterData,
        }
    }
}

impl ContentDocument {
    /// Replace one top-level field.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::CollegeName(v) => self.college_name = v,
            FieldUpdate::Tagline(v) => self.tagline = v,
            FieldUpdate::LogoUrl(v) => self.logo_url = v,
            FieldUpdate::PrimaryColor(v) => self.primary_color = v,
            FieldUpdate::SecondaryColor(v) => self.secondary_color = v,
            FieldUpdate::HeroTitle(v) => self.hero_title = v,
            FieldUpdate::HeroSubtitle(v) => self.hero_subtitle = v,
            FieldUpdate::CtaButtonText(v) => self.cta_button_text = v,
            FieldUpdate::CtaButtonLink(v) => self.cta_button_link = v,
            FieldUpdate::AboutTitle(v) => self.about_title = v,
            FieldUpdate::AboutContent(v) => self.about_content = v,
            FieldUpdate::AcademicsTitle(v) => self.academics_title = v,
            FieldUpdate::AcademicsDescription(v) => self.academics_description = v,
            FieldUpdate::Departments(v) => self.departments = v,
            FieldUpdate::ProfessionalBodiesTitle(v) => self.professional_bodies_title = v,
            FieldUpdate::ProfessionalBodies(v) => self.professional_bodies = v,
            FieldUpdate::NavigationItems(v) => self.navigation_items = v,
            FieldUpdate::NewsItems(v) => self.news_items = v,
            FieldUpdate::FooterData(v) => self.footer_data = v,
        }
    }

    /// Current value of one field as JSON.
    #[must_use]
    pub fn field_value(&self, field: Field) -> Value {
        let value = match field {
            Field::CollegeName => serde_json::to_value(&self.college_name),
            Field::Tagline => serde_json::to_value(&self.tagline),
            Field::LogoUrl => serde_json::to_value(&self.logo_url),
            Field::PrimaryColor => serde_json::to_value(&self.primary_color),
            Field::SecondaryColor => serde_json::to_value(&self.secondary_color),
            Field::HeroTitle => serde_json::to_value(&self.hero_title),
            Field::HeroSubtitle => serde_json::to_value(&self.hero_subtitle),
            Field::CtaButtonText => serde_json::to_value(&self.cta_button_text),
            Field::CtaButtonLink => serde_json::to_value(&self.cta_button_link),
            Field::AboutTitle => serde_json::to_value(&self.about_title),
            Field::AboutContent => serde_json::to_value(&self.about_content),
            Field::AcademicsTitle => serde_json::to_value(&self.academics_title),
            Field::AcademicsDescription => serde_json::to_value(&self.academics_description),
            Field::Departments => serde_json::to_value(&self.departments),
            Field::ProfessionalBodiesTitle => {
                serde_json::to_value(&self.professional_bodies_title)
            }
            Field::ProfessionalBodies => serde_json::to_value(&self.professional_bodies),
            Field::NavigationItems => serde_json::to_value(&self.navigation_items),
            Field::NewsItems => serde_json::to_value(&self.news_items),
            Field::FooterData => serde_json::to_value(&self.footer_data),
        };
        // Plain derived structs with string keys always serialize.
        value.unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>().unwrap(), field);
        }
    }

    #[test]
    fn test_field_names_match_document_keys() {
        let json = serde_json::to_value(ContentDocument::default()).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();

        assert_eq!(keys.len(), Field::ALL.len());
        for field in Field::ALL {
            assert!(keys.contains(&field.as_str()), "missing key {field}");
        }
    }

    #[test]
    fn test_unknown_field() {
        let err = "heroColour".parse::<Field>().unwrap_err();

        assert!(matches!(err, ContentError::UnknownField(name) if name == "heroColour"));
    }

    #[test]
    fn test_from_json_string_field() {
        let update = FieldUpdate::from_json("collegeName", json!("X")).unwrap();

        assert_eq!(update, FieldUpdate::CollegeName("X".to_owned()));
        assert_eq!(update.field(), Field::CollegeName);
    }

    #[test]
    fn test_from_json_composite_field() {
        let footer = serde_json::to_value(FooterData::default()).unwrap();

        let update = FieldUpdate::from_json("footerData", footer).unwrap();

        assert_eq!(update, FieldUpdate::FooterData(FooterData::default()));
    }

    #[test]
    fn test_from_json_wrong_shape() {
        let err = FieldUpdate::from_json("navigationItems", json!("not a list")).unwrap_err();

        assert!(matches!(
            err,
            ContentError::InvalidValue {
                field: "navigationItems",
                ..
            }
        ));
    }

    #[test]
    fn test_apply_replaces_one_field() {
        let mut doc = ContentDocument::default();

        doc.apply(FieldUpdate::HeroTitle("Welcome".to_owned()));

        let expected = ContentDocument {
            hero_title: "Welcome".to_owned(),
            ..ContentDocument::default()
        };
        assert_eq!(doc, expected);
    }

    #[test]
    fn test_apply_then_field_value() {
        let mut doc = ContentDocument::default();
        doc.apply(FieldUpdate::NewsItems(Vec::new()));

        assert_eq!(doc.field_value(Field::NewsItems), json!([]));
        assert_eq!(
            doc.field_value(Field::CollegeName),
            json!("Springfield University")
        );
    }

    #[test]
    fn test_update_serialization() {
        let json = serde_json::to_value(FieldUpdate::Tagline("Hi".to_owned())).unwrap();

        assert_eq!(json, json!({"field": "tagline", "value": "Hi"}));
    }
}
