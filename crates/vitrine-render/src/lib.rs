//! Pure HTML rendering for Vitrine category pages.
//!
//! Everything here maps data to markup with no I/O:
//! - `Category` - One product grouping from the remote document
//! - `CardTemplate` - Category to card fragment
//! - `EnquiryLinks` - Pre-filled messaging links
//! - `Tilt` - Pointer tilt geometry
//! - `Shell` / `HeadContent` - Page shell
//! - `sections` - Static page sections around the category container
//! - `scripts` - Client-side behavior attached after render

mod card;
mod category;
mod escape;
mod links;
pub mod scripts;
pub mod sections;
mod shell;
mod tilt;

pub use card::*;
pub use category::*;
pub use escape::*;
pub use links::*;
pub use shell::*;
pub use tilt::*;
