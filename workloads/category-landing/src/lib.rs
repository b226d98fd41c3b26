//! Category landing page served from Spin.
//!
//! The shell, header and hero are streamed immediately. The category cards are
//! fetched fresh from the remote document on every request and streamed once the
//! load settles. A failed load streams the container with its initial content.

use std::cell::RefCell;

use anyhow::{anyhow, Result};
use spin_sdk::http::{Fields, IncomingRequest, Method, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use vitrine_sdk::prelude::*;
use vitrine_sdk::vitrine_render::sections::{
    closing_scripts, landing_shell, render_categories_section, render_contact, render_header,
    render_hero, render_preloader,
};

/// Landing page handler.
#[http_component]
async fn handle_landing(req: IncomingRequest, response_out: ResponseOutparam) {
    if req.method() != Method::Get {
        if let Err(e) = respond_status(response_out, 405) {
            eprintln!("Failed to send 405: {:#}", e);
        }
        return;
    }

    let path = req.path_with_query().unwrap_or_default();
    let ctx = RequestContext::new(path.clone());
    let logger = StructuredLogger::new(ctx.request_id.clone())
        .with_component("category-landing")
        .with_route(path);

    let config = match SiteConfig::from_variables(|name| spin_sdk::variables::get(name).ok()) {
        Ok(config) => config,
        Err(e) => {
            logger.error_with("Invalid site configuration", &[("error", &e)]);
            if let Err(e) = respond_status(response_out, 500) {
                logger.error_with("Failed to send 500", &[("error", &e)]);
            }
            return;
        }
    };

    if let Err(e) = render(ctx, &config, &logger, response_out).await {
        logger.error_with("Failed to stream page", &[("error", &e)]);
    }
}

async fn render(
    ctx: RequestContext,
    config: &SiteConfig,
    logger: &StructuredLogger,
    response_out: ResponseOutparam,
) -> Result<()> {
    let header_list: Vec<(String, Vec<u8>)> = vec![
        ("content-type".to_owned(), "text/html; charset=utf-8".into()),
        ("x-request-id".to_owned(), ctx.request_id.to_string().into()),
        // Categories are fetched fresh on every request.
        ("cache-control".to_owned(), "no-store".into()),
    ];

    let headers = Fields::from_list(&header_list).map_err(|e| anyhow!("{:?}", e))?;
    let response = OutgoingResponse::new(headers);
    response
        .set_status_code(200)
        .map_err(|_| anyhow!("invalid status code"))?;

    let body = response.take_body();
    response_out.set(response);
    let mut sink = StreamingSink::new(body, ctx.timing);

    let shell = landing_shell(&config.site);
    sink.send_shell(&shell.render_opening()).await?;
    sink.send_section(
        "header",
        &format!("{}\n{}", render_preloader(), render_header(&config.site)),
    )
    .await?;
    sink.send_section("hero", &render_hero(&config.site)).await?;

    let page = RefCell::new(Page::new().with_container(&config.loader.container_id, ""));
    let loader = ContentLoader::from_config(config, SpinTransport, SystemClock)
        .with_logger(logger.clone());
    let outcome = loader.load(&page).await;

    logger
        .at(LogLevel::Info, "Category load settled")
        .field("phase", outcome.phase().name())
        .emit();
    if !outcome.is_rendered() {
        logger.warn("Serving categories container with its initial content");
    }

    let page = page.into_inner();
    sink.send_section(
        "categories",
        &render_categories_section(
            &config.loader.container_id,
            page.content(&config.loader.container_id),
        ),
    )
    .await?;
    sink.send_section("contact", &render_contact(&config.contact))
        .await?;

    let closing = format!("{}{}", closing_scripts(page.scripts()), shell.render_closing());
    sink.finish(&closing).await?;

    logger
        .at(LogLevel::Info, "Page streamed")
        .field("sections", sink.sections_sent().len())
        .duration_ms("total_ms", sink.timing().elapsed())
        .emit();

    Ok(())
}

fn respond_status(response_out: ResponseOutparam, status: u16) -> Result<()> {
    let headers = Fields::from_list(&[]).map_err(|e| anyhow!("{:?}", e))?;
    let response = OutgoingResponse::new(headers);
    response
        .set_status_code(status)
        .map_err(|_| anyhow!("invalid status code {}", status))?;
    response_out.set(response);
    Ok(())
}
