//! Passes that run after rendered cards are committed.

use vitrine_core::TiltSettings;
use vitrine_render::scripts::tilt_script;
use vitrine_render::CARD_CLASS;

use crate::surface::Surface;

/// Runs after a successful commit to `container_id`.
pub trait PostCommit {
    fn after_commit(&self, surface: &mut dyn Surface, container_id: &str);
}

/// Attaches the pointer tilt effect to every card on the surface.
#[derive(Debug, Clone)]
pub struct TiltAttachment {
    settings: TiltSettings,
    selector: String,
}

impl TiltAttachment {
    pub fn new(settings: TiltSettings) -> Self {
        Self {
            settings,
            selector: format!(".{}", CARD_CLASS),
        }
    }

    /// Override the card selector, e.g. to include `.feature-card`.
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }
}

impl PostCommit for TiltAttachment {
    fn after_commit(&self, surface: &mut dyn Surface, _container_id: &str) {
        surface.attach_script(tilt_script(&self.settings, &self.selector));
    }
}
