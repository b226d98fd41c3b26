//! Render targets.

use std::collections::BTreeMap;

/// A document holding named containers.
///
/// All mutation goes through [`Surface::replace`] and [`Surface::attach_script`].
pub trait Surface {
    fn has_container(&self, id: &str) -> bool;

    fn container_html(&self, id: &str) -> Option<&str>;

    /// Replace the whole content of container `id`. Returns false if it does not exist.
    fn replace(&mut self, id: &str, html: String) -> bool;

    /// Add a client-side script to run once the page is live. Identical scripts attach once.
    fn attach_script(&mut self, script: String);
}

/// In-memory surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    containers: BTreeMap<String, String>,
    scripts: Vec<String>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a container with initial content.
    pub fn with_container(mut self, id: impl Into<String>, html: impl Into<String>) -> Self {
        self.containers.insert(id.into(), html.into());
        self
    }

    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }

    /// Container content, or an empty string if it does not exist.
    pub fn content(&self, id: &str) -> &str {
        self.container_html(id).unwrap_or_default()
    }
}

impl Surface for Page {
    fn has_container(&self, id: &str) -> bool {
        self.containers.contains_key(id)
    }

    fn container_html(&self, id: &str) -> Option<&str> {
        self.containers.get(id).map(String::as_str)
    }

    fn replace(&mut self, id: &str, html: String) -> bool {
        match self.containers.get_mut(id) {
            Some(content) => {
                *content = html;
                true
            }
            None => false,
        }
    }

    fn attach_script(&mut self, script: String) {
        if !self.scripts.contains(&script) {
            self.scripts.push(script);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_existing_only() {
        let mut page = Page::new().with_container("a", "old");
        assert!(page.replace("a", "new".to_string()));
        assert_eq!(page.content("a"), "new");
        assert!(!page.replace("b", "x".to_string()));
        assert!(!page.has_container("b"));
        assert_eq!(page.content("b"), "");
    }

    #[test]
    fn test_scripts_attach_once() {
        let mut page = Page::new();
        page.attach_script("<script>a</script>".to_string());
        page.attach_script("<script>a</script>".to_string());
        assert_eq!(page.scripts().len(), 1);
    }
}
