//! Public SDK for the Vitrine storefront renderer.
//!
//! ```ignore
//! use std::cell::RefCell;
//! use vitrine_sdk::prelude::*;
//!
//! let config = SiteConfig::default();
//! let page = RefCell::new(Page::new().with_container(&config.loader.container_id, ""));
//! let loader = ContentLoader::from_config(&config, SpinTransport, SystemClock);
//!
//! match loader.load(&page).await {
//!     LoadOutcome::Rendered { cards } => logger.at(LogLevel::Info, "rendered").field("cards", cards).emit(),
//!     other => logger.warn(&format!("categories not rendered: {:?}", other.phase())),
//! }
//! ```

pub use vitrine_core;
pub use vitrine_data;
pub use vitrine_loader;
pub use vitrine_observability;
pub use vitrine_render;

/// Prelude for convenient imports.
pub mod prelude {
    pub use vitrine_core::*;
    pub use vitrine_data::*;
    pub use vitrine_loader::*;
    pub use vitrine_observability::*;
    pub use vitrine_render::*;
}
