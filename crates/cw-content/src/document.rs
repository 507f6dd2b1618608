//! Website content document.
//!
//! [`ContentDocument`] is the entire persisted state. It serializes as
//! camelCase JSON, and every record uses `#[serde(default)]` so documents
//! saved by an older schema deserialize with missing fields taken from the
//! built-in defaults.

use serde::{Deserialize, Serialize};

use crate::navigation::{NavChild, NavKind, NavigationItem};

/// All editable website content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentDocument {
    pub college_name: String,
    pub tagline: String,
    /// Logo reference: a URL or a `data:` URL.
    pub logo_url: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub cta_button_text: String,
    pub cta_button_link: String,
    pub about_title: String,
    pub about_content: String,
    pub academics_title: String,
    pub academics_description: String,
    pub departments: Vec<Department>,
    pub professional_bodies_title: String,
    pub professional_bodies: Vec<ProfessionalBody>,
    pub navigation_items: Vec<NavigationItem>,
    pub news_items: Vec<NewsItem>,
    pub footer_data: FooterData,
}

/// Academic department card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Department {
    pub id: String,
    pub name: String,
    pub duration: String,
    pub seats: String,
    pub link: String,
}

/// Accrediting or professional body card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfessionalBody {
    pub id: String,
    pub name: String,
    pub description: String,
    pub website: String,
    pub logo: String,
}

/// News article teaser.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Display date, stored as the editor entered it.
    pub date: String,
    pub category: String,
}

/// Footer content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterData {
    pub contact_info: ContactInfo,
    pub quick_links: Vec<FooterLink>,
    pub departments: Vec<FooterLink>,
    pub social_media: Vec<SocialLink>,
}

/// Footer contact block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// Footer link.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

/// Social media profile link.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon: String,
}

impl FooterLink {
    fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_owned(),
            href: href.to_owned(),
        }
    }
}

impl SocialLink {
    fn new(platform: &str, icon: &str) -> Self {
        Self {
            platform: platform.to_owned(),
            url: "#".to_owned(),
            icon: icon.to_owned(),
        }
    }
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            address: "123 University Ave, Springfield".to_owned(),
            phone: "+1 (555) 123-4567".to_owned(),
            email: "info@springfield.edu".to_owned(),
        }
    }
}

impl Default for FooterData {
    fn default() -> Self {
        Self {
            contact_info: ContactInfo::default(),
            quick_links: vec![
                FooterLink::new("Admissions", "/admissions"),
                FooterLink::new("Academic Calendar", "/calendar"),
                FooterLink::new("Student Portal", "/portal"),
                FooterLink::new("Alumni", "/alumni"),
            ],
            departments: vec![
                FooterLink::new("Computer Science", "/departments/cs"),
                FooterLink::new("Engineering", "/departments/engineering"),
                FooterLink::new("Business", "/departments/business"),
                FooterLink::new("Liberal Arts", "/departments/liberal-arts"),
            ],
            social_media: vec![
                SocialLink::new("Facebook", "facebook"),
                SocialLink::new("Twitter", "twitter"),
                SocialLink::new("LinkedIn", "linkedin"),
            ],
        }
    }
}

fn nav(id: &str, label: &str, href: &str, kind: NavKind) -> NavigationItem {
    NavigationItem {
        id: id.to_owned(),
        label: label.to_owned(),
        href: href.to_owned(),
        kind,
        children: Vec::new(),
    }
}

fn nav_child(id: &str, label: &str, href: &str) -> NavChild {
    NavChild {
        id: id.to_owned(),
        label: label.to_owned(),
        href: href.to_owned(),
        kind: NavKind::Internal,
    }
}

fn department(id: &str, name: &str, seats: &str) -> Department {
    Department {
        id: id.to_owned(),
        name: name.to_owned(),
        duration: "4 Years".to_owned(),
        seats: seats.to_owned(),
        link: format!("/departments/{id}"),
    }
}

impl Default for ContentDocument {
    fn default() -> Self {
        let mut departments_menu = nav("departments", "Departments", "#", NavKind::Dropdown);
        departments_menu.children = vec![
            nav_child("cs", "Computer Science", "/departments/cs"),
            nav_child("ee", "Electrical Engineering", "/departments/ee"),
        ];

        Self {
            college_name: "Springfield University".to_owned(),
            tagline: "Excellence in Education".to_owned(),
            logo_url: "https://images.unsplash.com/photo-1541339907198-e08756dedf3f?w=60"
                .to_owned(),
            primary_color: "#2563eb".to_owned(),
            secondary_color: "#10b981".to_owned(),
            hero_title: "Shaping Tomorrow's Leaders".to_owned(),
            hero_subtitle: "Join Springfield University, where innovation meets excellence. \
                            Our world-class faculty and cutting-edge facilities prepare \
                            students for successful careers."
                .to_owned(),
            cta_button_text: "Apply Now".to_owned(),
            cta_button_link: "/admissions".to_owned(),
            about_title: "About Springfield University".to_owned(),
            about_content: "Established in 1985, Springfield University has been at the \
                            forefront of educational excellence, fostering innovation, \
                            research, and character development for over three decades."
                .to_owned(),
            academics_title: "Academic Programs".to_owned(),
            academics_description:
                "Explore our comprehensive range of undergraduate and graduate programs"
                    .to_owned(),
            departments: vec![
                department("cse", "Computer Science & Engineering", "120"),
                department("it", "Information Technology", "60"),
                department("ds", "Data Science", "40"),
            ],
            professional_bodies_title: "Professional Bodies".to_owned(),
            professional_bodies: vec![ProfessionalBody {
                id: "ieee".to_owned(),
                name: "IEEE".to_owned(),
                description: "Institute of Electrical and Electronics Engineers".to_owned(),
                website: "https://ieee.org".to_owned(),
                logo: String::new(),
            }],
            navigation_items: vec![
                nav("home", "Home", "/", NavKind::Internal),
                departments_menu,
                nav("admissions", "Admissions", "/admissions", NavKind::Internal),
                nav("about", "About", "/about", NavKind::Internal),
                nav("contact", "Contact", "/contact", NavKind::Internal),
            ],
            news_items: vec![
                NewsItem {
                    id: "news-1".to_owned(),
                    title: "Springfield University Ranked #1 in State".to_owned(),
                    content: "We are proud to announce our top ranking...".to_owned(),
                    date: "June 10, 2025".to_owned(),
                    category: "Achievement".to_owned(),
                },
                NewsItem {
                    id: "news-2".to_owned(),
                    title: "New AI Research Lab Inaugurated".to_owned(),
                    content: "Our state-of-the-art AI research facility...".to_owned(),
                    date: "June 8, 2025".to_owned(),
                    category: "Infrastructure".to_owned(),
                },
            ],
            footer_data: FooterData::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_is_stable() {
        assert_eq!(ContentDocument::default(), ContentDocument::default());
    }

    #[test]
    fn test_default_ids_are_unique() {
        let doc = ContentDocument::default();
        let mut ids = HashSet::new();

        for item in &doc.navigation_items {
            assert!(ids.insert(item.id.clone()), "duplicate id {}", item.id);
            for child in &item.children {
                assert!(ids.insert(child.id.clone()), "duplicate id {}", child.id);
            }
        }
        for id in doc.news_items.iter().map(|n| &n.id) {
            assert!(ids.insert(id.clone()), "duplicate id {id}");
        }
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(ContentDocument::default()).unwrap();

        assert_eq!(json["collegeName"], "Springfield University");
        assert_eq!(json["ctaButtonText"], "Apply Now");
        assert_eq!(
            json["footerData"]["contactInfo"]["email"],
            "info@springfield.edu"
        );
        assert_eq!(json["navigationItems"][1]["type"], "dropdown");
        assert_eq!(json["navigationItems"][1]["children"][0]["id"], "cs");
        assert!(json["navigationItems"][0].get("children").is_none());
    }

    #[test]
    fn test_round_trip() {
        let mut doc = ContentDocument::default();
        doc.college_name = "X".to_owned();
        doc.news_items.clear();

        let json = serde_json::to_string(&doc).unwrap();
        let parsed: ContentDocument = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let parsed: ContentDocument = serde_json::from_str(r#"{"collegeName":"X"}"#).unwrap();

        let expected = ContentDocument {
            college_name: "X".to_owned(),
            ..ContentDocument::default()
        };
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_nested_footer_fields_take_defaults() {
        let parsed: ContentDocument =
            serde_json::from_str(r#"{"footerData":{"contactInfo":{"phone":"555"}}}"#).unwrap();

        assert_eq!(parsed.footer_data.contact_info.phone, "555");
        assert_eq!(
            parsed.footer_data.contact_info.email,
            ContactInfo::default().email
        );
        assert_eq!(
            parsed.footer_data.quick_links,
            FooterData::default().quick_links
        );
    }

    #[test]
    fn test_news_item_missing_fields_are_empty() {
        let parsed: NewsItem = serde_json::from_str(r#"{"id":"n1","title":"Hello"}"#).unwrap();

        assert_eq!(parsed.title, "Hello");
        assert_eq!(parsed.category, "");
    }
}
