//! Pre-filled messaging links.

use vitrine_core::ContactConfig;

/// Builds `{base}/{number}?text=...` links with the category title in the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnquiryLinks {
    base_url: String,
    number: String,
}

impl EnquiryLinks {
    pub fn new(base_url: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            number: number.into(),
        }
    }

    pub fn from_config(contact: &ContactConfig) -> Self {
        Self::new(&contact.messaging_base_url, &contact.whatsapp_number)
    }

    /// Link behind the image overlay button.
    pub fn enquire(&self, title: &str) -> String {
        self.link(&format!(
            "Hello! I'm interested in your {} collection. Please share more details.",
            title
        ))
    }

    /// Link behind the "View Collection" button.
    pub fn explore(&self, title: &str) -> String {
        self.link(&format!("Hi! I want to explore your {} collection.", title))
    }

    /// Link with an arbitrary pre-filled message.
    pub fn link(&self, message: &str) -> String {
        format!(
            "{}/{}?text={}",
            self.base_url.trim_end_matches('/'),
            self.number,
            urlencoding::encode(message)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links() -> EnquiryLinks {
        EnquiryLinks::new("https://wa.me/", "918143113140")
    }

    #[test]
    fn test_enquire_link() {
        assert_eq!(
            links().enquire("Silk Sarees"),
            "https://wa.me/918143113140?text=Hello%21%20I%27m%20interested%20in%20your%20Silk%20Sarees%20collection.%20Please%20share%20more%20details."
        );
    }

    #[test]
    fn test_explore_link_encodes_title() {
        let link = links().explore("Bags & <Belts>");
        assert!(link.contains("Bags%20%26%20%3CBelts%3E"));
        assert!(!link.contains('<'));
        assert!(!link.contains(' '));
    }

    #[test]
    fn test_from_config() {
        let links = EnquiryLinks::from_config(&ContactConfig::default());
        assert!(links.link("x").starts_with("https://wa.me/918143113140?text="));
    }
}
