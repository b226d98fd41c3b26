//! Fetch-render-commit content loading for Vitrine pages.
//!
//! This crate provides:
//! - `Surface` / `Page` - Target documents holding named containers
//! - `ContentLoader` - Fetches categories and commits rendered cards atomically
//! - `PostCommit` / `TiltAttachment` - Passes that run after a commit
//! - `StreamingSink` - Shell-first streaming of the finished page

mod hooks;
mod loader;
mod sink;
mod surface;

pub use hooks::*;
pub use loader::*;
pub use sink::*;
pub use surface::*;
