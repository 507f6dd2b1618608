//! Page preview rendering.
//!
//! The preview is a pure function of the document and the [`RenderState`].
//! Every section is wrapped in a `<section data-section="…">` carrying an
//! edit button; the targeted section also gets the `editing` class. Empty
//! lists render nothing rather than an empty container.

use std::fmt::Write;

use cw_content::navigation::{NavLink, NavigationItem};
use cw_content::{ContentDocument, FooterLink, SectionId};

use crate::escape::escape_html;

/// Transient view state the preview depends on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderState<'a> {
    /// Section open in the editor.
    pub target: Option<SectionId>,
    /// Id of the expanded dropdown.
    pub open_menu: Option<&'a str>,
}

/// Render the page preview with all dropdowns closed.
#[must_use]
pub fn render(doc: &ContentDocument, target: Option<SectionId>) -> String {
    render_with(
        doc,
        &RenderState {
            target,
            open_menu: None,
        },
    )
}

/// Render the page preview.
#[must_use]
pub fn render_with(doc: &ContentDocument, state: &RenderState<'_>) -> String {
    let mut out = String::with_capacity(8 * 1024);

    write!(
        out,
        r#"<div class="cw-page" style="--cw-primary:{};--cw-secondary:{}">"#,
        escape_html(&doc.primary_color),
        escape_html(&doc.secondary_color)
    )
    .unwrap();

    for section in SectionId::ALL {
        section_start(section, state.target, &mut out);
        match section {
            SectionId::Header => header(doc, state.open_menu, &mut out),
            SectionId::Hero => hero(doc, &mut out),
            SectionId::About => about(doc, &mut out),
            SectionId::Academics => academics(doc, &mut out),
            SectionId::ProfessionalBodies => professional_bodies(doc, &mut out),
            SectionId::News => news(doc, &mut out),
            SectionId::Footer => footer(doc, &mut out),
        }
        out.push_str("</section>");
    }

    out.push_str("</div>");
    out
}

fn section_start(section: SectionId, target: Option<SectionId>, out: &mut String) {
    let class = if target == Some(section) {
        "cw-section editing"
    } else {
        "cw-section"
    };
    write!(
        out,
        r#"<section id="{id}" class="{class}" data-section="{id}"><button type="button" class="edit-section" data-edit-section="{id}" aria-label="Edit {title}">Edit</button>"#,
        id = section.as_str(),
        title = section.title(),
    )
    .unwrap();
}

fn header(doc: &ContentDocument, open_menu: Option<&str>, out: &mut String) {
    out.push_str(r#"<header class="site-header"><div class="brand">"#);
    if !doc.logo_url.is_empty() {
        write!(
            out,
            r#"<img class="logo" src="{}" alt="{} logo">"#,
            escape_html(&doc.logo_url),
            escape_html(&doc.college_name)
        )
        .unwrap();
    }
    write!(
        out,
        r#"<div><span class="college-name">{}</span><span class="tagline">{}</span></div></div>"#,
        escape_html(&doc.college_name),
        escape_html(&doc.tagline)
    )
    .unwrap();
    navigation(&doc.navigation_items, open_menu, out);
    out.push_str("</header>");
}

fn navigation(items: &[NavigationItem], open_menu: Option<&str>, out: &mut String) {
    if items.is_empty() {
        return;
    }
    out.push_str(r#"<nav><ul class="nav-list">"#);
    for item in items {
        nav_entry(&item.id, &item.label, item.link(), open_menu, out);
    }
    out.push_str("</ul></nav>");
}

fn nav_entry(id: &str, label: &str, link: NavLink<'_>, open_menu: Option<&str>, out: &mut String) {
    let label = escape_html(label);
    match link {
        NavLink::Internal { href } => {
            write!(
                out,
                r#"<li class="nav-item"><a href="{}">{label}</a></li>"#,
                escape_html(href)
            )
            .unwrap();
        }
        NavLink::External { href } => {
            write!(
                out,
                r#"<li class="nav-item"><a href="{}" target="_blank" rel="noopener noreferrer">{label}</a></li>"#,
                escape_html(href)
            )
            .unwrap();
        }
        NavLink::Dropdown { children } => {
            let open = open_menu == Some(id);
            let id = escape_html(id);
            write!(
                out,
                r#"<li class="nav-item dropdown"><button type="button" class="dropdown-toggle" data-menu-toggle="{id}" aria-expanded="{open}" aria-controls="menu-{id}">{label}</button><ul id="menu-{id}" class="dropdown-menu"{}>"#,
                if open { "" } else { " hidden" }
            )
            .unwrap();
            for child in children {
                nav_entry(&child.id, &child.label, child.link(), open_menu, out);
            }
            out.push_str("</ul></li>");
        }
    }
}

fn hero(doc: &ContentDocument, out: &mut String) {
    write!(
        out,
        r#"<div class="hero"><h1>{}</h1><p>{}</p>"#,
        escape_html(&doc.hero_title),
        escape_html(&doc.hero_subtitle)
    )
    .unwrap();
    if !doc.cta_button_text.is_empty() {
        write!(
            out,
            r#"<a class="cta" href="{}">{}</a>"#,
            escape_html(&doc.cta_button_link),
            escape_html(&doc.cta_button_text)
        )
        .unwrap();
    }
    out.push_str("</div>");
}

fn about(doc: &ContentDocument, out: &mut String) {
    write!(
        out,
        "<h2>{}</h2><p>{}</p>",
        escape_html(&doc.about_title),
        escape_html(&doc.about_content)
    )
    .unwrap();
}

fn academics(doc: &ContentDocument, out: &mut String) {
    write!(
        out,
        "<h2>{}</h2><p>{}</p>",
        escape_html(&doc.academics_title),
        escape_html(&doc.academics_description)
    )
    .unwrap();
    if doc.departments.is_empty() {
        return;
    }
    out.push_str(r#"<div class="departments">"#);
    for dept in &doc.departments {
        write!(
            out,
            r#"<article class="department" data-id="{}"><h3>{}</h3><p>Duration: {}</p><p>Seats: {}</p><a href="{}">Learn more</a></article>"#,
            escape_html(&dept.id),
            escape_html(&dept.name),
            escape_html(&dept.duration),
            escape_html(&dept.seats),
            escape_html(&dept.link)
        )
        .unwrap();
    }
    out.push_str("</div>");
}

fn professional_bodies(doc: &ContentDocument, out: &mut String) {
    write!(
        out,
        "<h2>{}</h2>",
        escape_html(&doc.professional_bodies_title)
    )
    .unwrap();
    if doc.professional_bodies.is_empty() {
        return;
    }
    out.push_str(r#"<div class="professional-bodies">"#);
    for body in &doc.professional_bodies {
        write!(
            out,
            r#"<article class="professional-body" data-id="{}">"#,
            escape_html(&body.id)
        )
        .unwrap();
        if !body.logo.is_empty() {
            write!(
                out,
                r#"<img src="{}" alt="{}">"#,
                escape_html(&body.logo),
                escape_html(&body.name)
            )
            .unwrap();
        }
        write!(
            out,
            r#"<h3>{}</h3><p>{}</p><a href="{}" target="_blank" rel="noopener noreferrer">Visit website</a></article>"#,
            escape_html(&body.name),
            escape_html(&body.description),
            escape_html(&body.website)
        )
        .unwrap();
    }
    out.push_str("</div>");
}

fn news(doc: &ContentDocument, out: &mut String) {
    out.push_str("<h2>Latest News</h2>");
    if doc.news_items.is_empty() {
        return;
    }
    out.push_str(r#"<div class="news">"#);
    for item in &doc.news_items {
        write!(
            out,
            r#"<article class="news-item" data-id="{}"><span class="category">{}</span><time>{}</time><h3>{}</h3><p>{}</p></article>"#,
            escape_html(&item.id),
            escape_html(&item.category),
            escape_html(&item.date),
            escape_html(&item.title),
            escape_html(&item.content)
        )
        .unwrap();
    }
    out.push_str("</div>");
}

fn footer(doc: &ContentDocument, out: &mut String) {
    let footer = &doc.footer_data;
    let contact = &footer.contact_info;
    write!(
        out,
        r#"<footer class="site-footer"><div class="contact"><h3>Contact</h3><p>{}</p><p>{}</p><p>{}</p></div>"#,
        escape_html(&contact.address),
        escape_html(&contact.phone),
        escape_html(&contact.email)
    )
    .unwrap();
    footer_links("Quick Links", &footer.quick_links, out);
    footer_links("Departments", &footer.departments, out);
    if !footer.social_media.is_empty() {
        out.push_str(r#"<ul class="social">"#);
        for social in &footer.social_media {
            write!(
                out,
                r#"<li><a href="{}" data-icon="{}" target="_blank" rel="noopener noreferrer">{}</a></li>"#,
                escape_html(&social.url),
                escape_html(&social.icon),
                escape_html(&social.platform)
            )
            .unwrap();
        }
        out.push_str("</ul>");
    }
    write!(
        out,
        r#"<p class="copyright">&copy; {}</p></footer>"#,
        escape_html(&doc.college_name)
    )
    .unwrap();
}

fn footer_links(title: &str, links: &[FooterLink], out: &mut String) {
    if links.is_empty() {
        return;
    }
    write!(out, r#"<div class="footer-links"><h3>{title}</h3><ul>"#).unwrap();
    for link in links {
        write!(
            out,
            r#"<li><a href="{}">{}</a></li>"#,
            escape_html(&link.href),
            escape_html(&link.label)
        )
        .unwrap();
    }
    out.push_str("</ul></div>");
}

#[cfg(test)]
mod tests {
    use cw_content::navigation::{NavChild, NavKind};
    use cw_content::{FooterData, NewsItem};

    use super::*;

    fn nav_item(id: &str, kind: NavKind, children: Vec<NavChild>) -> NavigationItem {
        NavigationItem {
            id: id.to_owned(),
            label: id.to_uppercase(),
            href: format!("/{id}"),
            kind,
            children,
        }
    }

    fn child(id: &str) -> NavChild {
        NavChild {
            id: id.to_owned(),
            label: id.to_uppercase(),
            href: format!("/c/{id}"),
            kind: NavKind::Internal,
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let doc = ContentDocument::default();

        assert_eq!(
            render(&doc, Some(SectionId::About)),
            render(&doc, Some(SectionId::About))
        );
    }

    #[test]
    fn test_every_section_has_wrapper_and_edit_button() {
        let html = render(&ContentDocument::default(), None);

        for section in SectionId::ALL {
            assert!(html.contains(&format!(r#"data-section="{section}""#)));
            assert!(html.contains(&format!(r#"data-edit-section="{section}""#)));
        }
        assert!(!html.contains("editing"));
    }

    #[test]
    fn test_target_section_is_marked() {
        let html = render(&ContentDocument::default(), Some(SectionId::Hero));

        assert!(html.contains(r#"<section id="hero" class="cw-section editing""#));
        assert!(html.contains(r#"<section id="about" class="cw-section""#));
    }

    #[test]
    fn test_text_is_escaped() {
        let doc = ContentDocument {
            college_name: "<b>A & B</b>".to_owned(),
            ..ContentDocument::default()
        };

        let html = render(&doc, None);

        assert!(html.contains("&lt;b&gt;A &amp; B&lt;/b&gt;"));
        assert!(!html.contains("<b>A & B</b>"));
    }

    #[test]
    fn test_empty_lists_omit_containers() {
        let doc = ContentDocument {
            navigation_items: Vec::new(),
            news_items: Vec::new(),
            departments: Vec::new(),
            professional_bodies: Vec::new(),
            footer_data: FooterData {
                quick_links: Vec::new(),
                departments: Vec::new(),
                social_media: Vec::new(),
                ..FooterData::default()
            },
            ..ContentDocument::default()
        };

        let html = render(&doc, None);

        assert!(!html.contains("<nav>"));
        assert!(!html.contains(r#"class="news""#));
        assert!(!html.contains(r#"class="departments""#));
        assert!(!html.contains(r#"class="professional-bodies""#));
        assert!(!html.contains(r#"class="footer-links""#));
        assert!(!html.contains(r#"class="social""#));
    }

    #[test]
    fn test_external_link_opens_new_tab() {
        let doc = ContentDocument {
            navigation_items: vec![nav_item("portal", NavKind::External, Vec::new())],
            ..ContentDocument::default()
        };

        let html = render(&doc, None);

        assert!(html.contains(
            r#"<a href="/portal" target="_blank" rel="noopener noreferrer">PORTAL</a>"#
        ));
    }

    #[test]
    fn test_dropdown_without_children_renders_as_link() {
        let doc = ContentDocument {
            navigation_items: vec![nav_item("research", NavKind::Dropdown, Vec::new())],
            ..ContentDocument::default()
        };

        let html = render(&doc, None);

        assert!(html.contains(r#"<li class="nav-item"><a href="/research">RESEARCH</a></li>"#));
        assert!(!html.contains("dropdown-toggle"));
    }

    #[test]
    fn test_dropdown_hidden_until_open() {
        let doc = ContentDocument {
            navigation_items: vec![nav_item(
                "research",
                NavKind::Dropdown,
                vec![child("labs"), child("papers")],
            )],
            ..ContentDocument::default()
        };

        let closed = render(&doc, None);
        let open = render_with(
            &doc,
            &RenderState {
                target: None,
                open_menu: Some("research"),
            },
        );

        assert!(closed.contains(r#"aria-expanded="false""#));
        assert!(closed.contains(r#"class="dropdown-menu" hidden>"#));
        assert!(open.contains(r#"aria-expanded="true""#));
        assert!(open.contains(r#"class="dropdown-menu">"#));
        assert!(open.contains(r#"<a href="/c/labs">LABS</a>"#));
        assert!(open.find("LABS").unwrap() < open.find("PAPERS").unwrap());
    }

    #[test]
    fn test_news_items_in_order() {
        let doc = ContentDocument {
            news_items: vec![
                NewsItem {
                    id: "b".to_owned(),
                    title: "Zeta headline".to_owned(),
                    ..NewsItem::default()
                },
                NewsItem {
                    id: "a".to_owned(),
                    title: "Alpha headline".to_owned(),
                    ..NewsItem::default()
                },
            ],
            ..ContentDocument::default()
        };

        let html = render(&doc, None);

        assert!(html.find("Zeta headline").unwrap() < html.find("Alpha headline").unwrap());
    }

    #[test]
    fn test_colors_become_custom_properties() {
        let html = render(&ContentDocument::default(), None);

        assert!(html.starts_with(
            r#"<div class="cw-page" style="--cw-primary:#2563eb;--cw-secondary:#10b981">"#
        ));
    }
}
