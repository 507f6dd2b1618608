//! Keyed list editing for news, departments and professional bodies.
//!
//! Like the navigation operations these are pure: they take the current list
//! and return the replacement, which the caller writes back through
//! [`FieldUpdate`](crate::FieldUpdate).

use std::fmt;
use std::str::FromStr;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::document::{ContentDocument, Department, NewsItem, ProfessionalBody};
use crate::error::ContentError;
use crate::field::{Field, FieldUpdate};
use crate::id::new_id;

/// Element of a list addressed by a stable id.
pub trait Keyed {
    /// Stable identifier.
    fn id(&self) -> &str;

    /// Fresh element with placeholder content and a new id.
    fn placeholder() -> Self;
}

impl Keyed for NewsItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn placeholder() -> Self {
        Self {
            id: new_id("news"),
            title: "New Article".to_owned(),
            content: "Article content...".to_owned(),
            date: Local::now().format("%B %-d, %Y").to_string(),
            category: "News".to_owned(),
        }
    }
}

impl Keyed for Department {
    fn id(&self) -> &str {
        &self.id
    }

    fn placeholder() -> Self {
        Self {
            id: new_id("dept"),
            name: "New Department".to_owned(),
            duration: "4 Years".to_owned(),
            seats: "60".to_owned(),
            link: "#".to_owned(),
        }
    }
}

impl Keyed for ProfessionalBody {
    fn id(&self) -> &str {
        &self.id
    }

    fn placeholder() -> Self {
        Self {
            id: new_id("body"),
            name: "New Professional Body".to_owned(),
            description: String::new(),
            website: "#".to_owned(),
            logo: String::new(),
        }
    }
}

/// Append a placeholder element.
#[must_use]
pub fn append<T: Keyed + Clone>(items: &[T]) -> Vec<T> {
    let mut updated = items.to_vec();
    updated.push(T::placeholder());
    updated
}

/// Drop the element with `id`. Unknown ids leave the list unchanged.
#[must_use]
pub fn remove_by_id<T: Keyed + Clone>(items: &[T], id: &str) -> Vec<T> {
    items.iter().filter(|item| item.id() != id).cloned().collect()
}

/// Document list that supports add and remove by id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyedList {
    NewsItems,
    Departments,
    ProfessionalBodies,
}

impl KeyedList {
    /// Document field holding the list.
    #[must_use]
    pub fn field(self) -> Field {
        match self {
            Self::NewsItems => Field::NewsItems,
            Self::Departments => Field::Departments,
            Self::ProfessionalBodies => Field::ProfessionalBodies,
        }
    }

    /// Update that appends a placeholder to this list in `doc`.
    #[must_use]
    pub fn append(self, doc: &ContentDocument) -> FieldUpdate {
        match self {
            Self::NewsItems => FieldUpdate::NewsItems(append(&doc.news_items)),
            Self::Departments => FieldUpdate::Departments(append(&doc.departments)),
            Self::ProfessionalBodies => {
                FieldUpdate::ProfessionalBodies(append(&doc.professional_bodies))
            }
        }
    }

    /// Update that removes the element with `id` from this list in `doc`.
    #[must_use]
    pub fn remove(self, doc: &ContentDocument, id: &str) -> FieldUpdate {
        match self {
            Self::NewsItems => FieldUpdate::NewsItems(remove_by_id(&doc.news_items, id)),
            Self::Departments => FieldUpdate::Departments(remove_by_id(&doc.departments, id)),
            Self::ProfessionalBodies => {
                FieldUpdate::ProfessionalBodies(remove_by_id(&doc.professional_bodies, id))
            }
        }
    }
}

impl fmt::Display for KeyedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field().as_str())
    }
}

impl FromStr for KeyedList {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Field>()? {
            Field::NewsItems => Ok(Self::NewsItems),
            Field::Departments => Ok(Self::Departments),
            Field::ProfessionalBodies => Ok(Self::ProfessionalBodies),
            _ => Err(ContentError::UnknownField(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_append_news_placeholder() {
        let doc = ContentDocument::default();

        let updated = append(&doc.news_items);

        assert_eq!(updated.len(), doc.news_items.len() + 1);
        let added = updated.last().unwrap();
        assert!(added.id.starts_with("news-"));
        assert_eq!(added.title, "New Article");
        assert_eq!(added.category, "News");
        assert!(!added.date.is_empty());
    }

    #[test]
    fn test_append_then_remove_is_identity() {
        let doc = ContentDocument::default();
        let updated = append(&doc.departments);
        let added = updated.last().unwrap().id.clone();

        assert_eq!(remove_by_id(&updated, &added), doc.departments);
    }

    #[test]
    fn test_remove_unknown_id() {
        let doc = ContentDocument::default();

        assert_eq!(remove_by_id(&doc.news_items, "missing"), doc.news_items);
    }

    #[test]
    fn test_keyed_list_updates_target_field() {
        let doc = ContentDocument::default();

        let update = KeyedList::Departments.append(&doc);

        assert_eq!(update.field(), Field::Departments);
    }

    #[test]
    fn test_keyed_list_from_str() {
        assert_eq!(
            "newsItems".parse::<KeyedList>().unwrap(),
            KeyedList::NewsItems
        );
        assert!(matches!(
            "collegeName".parse::<KeyedList>(),
            Err(ContentError::UnknownField(_))
        ));
    }
}
