//! Contact section and floating chat button.

use vitrine_core::ContactConfig;

use crate::escape::escape_html;
use crate::links::EnquiryLinks;

pub fn render_contact(contact: &ContactConfig) -> String {
    let link = escape_html(
        &EnquiryLinks::from_config(contact).link("Hello! I'd like to know more about your collections."),
    );

    format!(
        r#"<section class="contact" id="contact" data-section="contact">
    <div class="contact-card">
        <h2>Get in touch</h2>
        <a href="{link}" class="btn btn-whatsapp" target="_blank" rel="noopener">
            <i class="fab fa-whatsapp"></i> Chat with us
        </a>
    </div>
</section>
<a href="{link}" class="whatsapp-float" target="_blank" rel="noopener" title="Chat with us on WhatsApp!">
    <i class="fab fa-whatsapp"></i>
</a>"#,
        link = link
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_links_escaped() {
        let html = render_contact(&ContactConfig::default());
        assert_eq!(html.matches("https://wa.me/918143113140?text=").count(), 2);
        assert!(html.contains("I%27d"));
    }
}
