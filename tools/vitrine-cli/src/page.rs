//! Static page assembly.

use vitrine_sdk::prelude::{Page, SiteConfig};
use vitrine_sdk::vitrine_render::sections::{
    closing_scripts, landing_shell, render_categories_section, render_contact, render_header,
    render_hero, render_preloader,
};

/// Render the complete landing page around the loaded category container.
pub fn render_document(config: &SiteConfig, page: &Page) -> String {
    let shell = landing_shell(&config.site);
    let container_id = &config.loader.container_id;

    [
        shell.render_opening(),
        render_preloader(),
        render_header(&config.site),
        render_hero(&config.site),
        render_categories_section(container_id, page.content(container_id)),
        render_contact(&config.contact),
        closing_scripts(page.scripts()),
        shell.render_closing(),
    ]
    .join("\n")
}
