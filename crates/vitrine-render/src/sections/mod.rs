//! Static sections of the landing page.

mod categories;
mod contact;
mod header;
mod hero;
mod styles;

pub use categories::*;
pub use contact::*;
pub use header::*;
pub use hero::*;
pub use styles::*;

use vitrine_core::SiteInfo;

use crate::scripts::{navigation_script, preloader_script};
use crate::shell::{HeadContent, Shell};

const FONT_AWESOME: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

/// Milliseconds the preloader stays up after window load.
pub const PRELOADER_DELAY_MS: u32 = 1000;

/// Shell for the landing page.
pub fn landing_shell(site: &SiteInfo) -> Shell {
    let head = HeadContent::new(format!("{} | {}", site.name, site.tagline))
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_meta("description", &site.tagline)
        .with_stylesheet(FONT_AWESOME)
        .with_style(LANDING_STYLES);

    Shell::new(head)
}

/// Scripts closing the page: navigation, preloader, then `attached` in order.
pub fn closing_scripts(attached: &[String]) -> String {
    let mut html = String::new();
    html.push_str(navigation_script());
    html.push('\n');
    html.push_str(&preloader_script(PRELOADER_DELAY_MS));
    for script in attached {
        html.push('\n');
        html.push_str(script);
    }
    html.push('\n');
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closing_scripts_order() {
        let html = closing_scripts(&["<script>tilt()</script>".to_string()]);
        let nav = html.find("nav-toggle").unwrap();
        let preloader = html.find("preloader").unwrap();
        let tilt = html.find("tilt()").unwrap();
        assert!(nav < preloader && preloader < tilt);
    }

    #[test]
    fn test_landing_shell_title() {
        let shell = landing_shell(&SiteInfo::default());
        assert!(shell
            .render_opening()
            .contains("<title>Maghuva Fashions | Elegance in Every Thread</title>"));
    }
}
