//! Hero section.

use vitrine_core::SiteInfo;

use crate::escape::escape_html;

pub fn render_hero(site: &SiteInfo) -> String {
    format!(
        r##"<section class="hero" id="home" data-section="hero">
    <div class="hero-text">
        <h1>{name}</h1>
        <p>{tagline}</p>
        <a href="#categories" class="btn btn-primary">Explore Collections</a>
    </div>
</section>"##,
        name = escape_html(&site.name),
        tagline = escape_html(&site.tagline)
    )
}
