//! Category section wrapping the dynamic container.

use crate::escape::escape_html;

/// Render the categories section with `cards` inside the container `container_id`.
pub fn render_categories_section(container_id: &str, cards: &str) -> String {
    format!(
        r#"<section class="categories" id="categories" data-section="categories">
    <div class="section-header">
        <h2>Our Collections</h2>
    </div>
    <div class="categories-grid" id="{id}">{cards}</div>
</section>"#,
        id = escape_html(container_id),
        cards = cards
    )
}
