//! Preloader and navigation header.

use vitrine_core::SiteInfo;

use crate::escape::escape_html;

/// Nav entries as `(section id, label)`.
const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("categories", "Collections"),
    ("contact", "Contact"),
];

/// Preloader overlay shown until the window load event.
pub fn render_preloader() -> String {
    r#"<div id="preloader" class="preloader"><div class="loader"></div></div>"#.to_string()
}

/// Site header with the mobile navigation toggle.
pub fn render_header(site: &SiteInfo) -> String {
    let links: String = NAV_LINKS
        .iter()
        .map(|(id, label)| {
            format!(
                r##"<li><a href="#{}" class="nav-link">{}</a></li>"##,
                id, label
            )
        })
        .collect();

    format!(
        r##"<header class="header" id="header">
    <nav class="nav container">
        <a href="#home" class="nav-logo">{name}</a>
        <div class="nav-menu" id="nav-menu">
            <ul class="nav-list">{links}</ul>
            <button class="nav-close" id="nav-close" aria-label="Close menu"><i class="fas fa-times"></i></button>
        </div>
        <button class="nav-toggle" id="nav-toggle" aria-label="Open menu"><i class="fas fa-bars"></i></button>
    </nav>
</header>"##,
        name = escape_html(&site.name),
        links = links
    )
}
