//! Structured logging for the Vitrine storefront renderer.
//!
//! This crate provides:
//! - `StructuredLogger` - Request-scoped structured logging
//! - `LogBuilder` - Fluent construction of entries with typed fields

mod logging;

pub use logging::*;

// Re-export RequestId from vitrine-core for convenience
pub use vitrine_core::RequestId;
