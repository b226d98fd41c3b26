//! Core types for the Vitrine storefront renderer.
//!
//! This crate provides:
//! - `SiteConfig` - Loader, contact and card configuration
//! - `RequestContext` - Request identity and timing
//! - `LifecyclePhase` - Content load lifecycle tracking
//! - `VitrineError` - Shared error type

mod config;
mod context;
mod error;
mod lifecycle;

pub use config::*;
pub use context::*;
pub use error::*;
pub use lifecycle::*;
