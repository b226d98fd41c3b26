//! Category card templates.

use vitrine_core::SiteConfig;

use crate::category::Category;
use crate::escape::escape_html;
use crate::links::EnquiryLinks;

/// Class carried by every rendered card.
pub const CARD_CLASS: &str = "category-card";

/// Extra class for mirrored cards.
pub const REVERSE_CLASS: &str = "reverse";

/// Maps category records to card markup.
///
/// Rendering is pure: the same records always produce the same markup.
#[derive(Debug, Clone)]
pub struct CardTemplate {
    default_icon: String,
    links: EnquiryLinks,
}

impl CardTemplate {
    pub fn new(default_icon: impl Into<String>, links: EnquiryLinks) -> Self {
        Self {
            default_icon: default_icon.into(),
            links,
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(
            &config.cards.default_icon,
            EnquiryLinks::from_config(&config.contact),
        )
    }

    /// Render one card.
    pub fn render_card(&self, category: &Category) -> String {
        let class = if category.reverse {
            format!("{} {}", CARD_CLASS, REVERSE_CLASS)
        } else {
            CARD_CLASS.to_string()
        };

        let title = escape_html(&category.title);
        let features: String = category
            .features
            .iter()
            .map(|f| {
                format!(
                    r#"<li><i class="fas fa-check"></i> {}</li>"#,
                    escape_html(f)
                )
            })
            .collect();

        format!(
            r#"<div class="{class}" data-aos="fade-up">
    <div class="category-image">
        <img src="{image}" alt="{title}" loading="lazy">
        <div class="category-overlay">
            <a href="{enquire}" class="btn btn-whatsapp" target="_blank" rel="noopener">
                <i class="fab fa-whatsapp"></i> Enquire Now
            </a>
        </div>
    </div>
    <div class="category-content">
        <div class="category-icon">
            <i class="{icon}"></i>
        </div>
        <h3>{title}</h3>
        <p>{description}</p>
        <ul class="category-features">{features}</ul>
        <a href="{explore}" class="order-btn" target="_blank" rel="noopener">
            <i class="fab fa-whatsapp"></i> View Collection
        </a>
    </div>
</div>"#,
            class = class,
            image = escape_html(&category.image),
            title = title,
            enquire = escape_html(&self.links.enquire(&category.title)),
            icon = escape_html(category.icon_or(&self.default_icon)),
            description = escape_html(&category.description),
            features = features,
            explore = escape_html(&self.links.explore(&category.title)),
        )
    }

    /// Render all cards in collection order.
    pub fn render_categories(&self, categories: &[Category]) -> String {
        categories
            .iter()
            .map(|c| self.render_card(c))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for CardTemplate {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

/// Number of rendered cards in a fragment.
pub fn count_cards(html: &str) -> usize {
    html.matches(&format!(r#"<div class="{}"#, CARD_CLASS)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn silk_sarees() -> Category {
        Category::new("Silk Sarees", "d", "i.jpg").with_features(["A", "B"])
    }

    #[test]
    fn test_silk_sarees_card() {
        let html = CardTemplate::default().render_categories(&[silk_sarees()]);

        assert_eq!(count_cards(&html), 1);
        assert!(html.contains("<h3>Silk Sarees</h3>"));
        assert!(html.contains(r#"<li><i class="fas fa-check"></i> A</li>"#));
        assert!(html.contains(r#"<li><i class="fas fa-check"></i> B</li>"#));
        assert_eq!(html.matches("<li>").count(), 2);
        assert!(html.contains(r#"<i class="fas fa-star"></i>"#));
        assert!(html.contains(r#"class="category-card""#));
        assert!(!html.contains(REVERSE_CLASS));
        assert_eq!(html.matches("https://wa.me/918143113140?text=").count(), 2);
        assert_eq!(html.matches("Silk%20Sarees").count(), 2);
    }

    #[test]
    fn test_reverse_class() {
        let html = CardTemplate::default().render_card(&silk_sarees().reversed());
        assert!(html.contains(r#"class="category-card reverse""#));
    }

    #[test]
    fn test_custom_icon() {
        let html = CardTemplate::default().render_card(&silk_sarees().with_icon("fas fa-gem"));
        assert!(html.contains(r#"<i class="fas fa-gem"></i>"#));
        assert!(!html.contains("fa-star"));
    }

    #[test]
    fn test_count_and_order() {
        let cats: Vec<Category> = (0..5)
            .map(|i| Category::new(format!("Cat {}", i), "d", "i.jpg"))
            .collect();
        let html = CardTemplate::default().render_categories(&cats);

        assert_eq!(count_cards(&html), 5);
        let positions: Vec<usize> = (0..5)
            .map(|i| html.find(&format!("<h3>Cat {}</h3>", i)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_empty_collection() {
        assert_eq!(CardTemplate::default().render_categories(&[]), "");
    }

    #[test]
    fn test_interpolated_values_escaped() {
        let cat = Category::new(
            "<script>alert(1)</script>",
            "\"quoted\" & <b>",
            "x.jpg\" onerror=\"alert(1)",
        )
        .with_icon("fas\"><script>")
        .with_features(["<i>f</i>"]);
        let html = CardTemplate::default().render_card(&cat);

        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(!html.contains("<i>f</i>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains(r#"src="x.jpg&quot; onerror=&quot;alert(1)""#));
        assert!(html.contains("%3Cscript%3E"));
    }

    #[test]
    fn test_deterministic() {
        let template = CardTemplate::default();
        let cats = vec![silk_sarees(), silk_sarees().reversed()];
        assert_eq!(
            template.render_categories(&cats),
            template.render_categories(&cats)
        );
    }
}
