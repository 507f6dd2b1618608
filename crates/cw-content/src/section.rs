//! Page sections and editor tabs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::field::Field;

/// Fields edited on the Design tab, independent of the targeted section.
pub const DESIGN_FIELDS: [Field; 3] = [Field::PrimaryColor, Field::SecondaryColor, Field::LogoUrl];

/// Named region of the rendered page, addressable for editing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    Header,
    Hero,
    About,
    Academics,
    ProfessionalBodies,
    News,
    Footer,
}

impl SectionId {
    /// Every section in page order.
    pub const ALL: [Self; 7] = [
        Self::Header,
        Self::Hero,
        Self::About,
        Self::Academics,
        Self::ProfessionalBodies,
        Self::News,
        Self::Footer,
    ];

    /// Section id as used in markup and URLs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Hero => "hero",
            Self::About => "about",
            Self::Academics => "academics",
            Self::ProfessionalBodies => "professional-bodies",
            Self::News => "news",
            Self::Footer => "footer",
        }
    }

    /// Display title for the editor panel heading.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Header => "Header",
            Self::Hero => "Hero Banner",
            Self::About => "About",
            Self::Academics => "Academics",
            Self::ProfessionalBodies => "Professional Bodies",
            Self::News => "News",
            Self::Footer => "Footer",
        }
    }

    /// Document fields the Content tab binds for this section.
    #[must_use]
    pub fn fields(self) -> &'static [Field] {
        match self {
            Self::Header => &[
                Field::CollegeName,
                Field::Tagline,
                Field::LogoUrl,
                Field::NavigationItems,
            ],
            Self::Hero => &[
                Field::HeroTitle,
                Field::HeroSubtitle,
                Field::CtaButtonText,
                Field::CtaButtonLink,
            ],
            Self::About => &[Field::AboutTitle, Field::AboutContent],
            Self::Academics => &[
                Field::AcademicsTitle,
                Field::AcademicsDescription,
                Field::Departments,
            ],
            Self::ProfessionalBodies => &[Field::ProfessionalBodiesTitle, Field::ProfessionalBodies],
            Self::News => &[Field::NewsItems],
            Self::Footer => &[Field::FooterData],
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| ContentError::UnknownSection(s.to_owned()))
    }
}

/// Editor sidebar tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorTab {
    /// Fields of the targeted section.
    #[default]
    Content,
    /// Colours and logo.
    Design,
}

impl EditorTab {
    /// Tab name as used in URLs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Design => "design",
        }
    }
}

impl fmt::Display for EditorTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EditorTab {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "content" => Ok(Self::Content),
            "design" => Ok(Self::Design),
            other => Err(ContentError::UnknownTab(other.to_owned())),
        }
    }
}
