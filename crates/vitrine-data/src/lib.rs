//! Remote data access for the Vitrine storefront renderer.
//!
//! This crate provides:
//! - `Transport` - The outbound HTTP seam
//! - `FetchClient` - Single-shot cache-busted JSON fetches
//! - `Clock` - Timestamp source for cache busting
//! - `StaticTransport` - In-memory transport for previews and tests

mod cache_bust;
mod client;
mod clock;
mod static_transport;
mod transport;

pub use cache_bust::*;
pub use client::*;
pub use clock::*;
pub use static_transport::*;
pub use transport::*;
