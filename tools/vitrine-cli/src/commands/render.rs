//! Fetch remote categories and render the page.

use anyhow::{bail, Result};
use chrono::Utc;
use dialoguer::Confirm;
use vitrine_sdk::prelude::LoadOutcome;

use super::{load_page, write_output, RenderArgs, RenderSummary};
use crate::context::Context;
use crate::output::format_bytes;
use crate::page::render_document;
use crate::transport::ReqwestTransport;

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let mut config = ctx.config.clone();
    if let Some(url) = args.data_url {
        config.loader.data_url = url;
    }
    config.validate()?;

    let out = ctx.resolve_path(&args.out);

    ctx.output.header("Rendering category page");
    ctx.output.kv("source", &config.loader.data_url);
    ctx.output.kv("output", &out.display().to_string());

    let overwrite = if out.exists() && !args.yes {
        if ctx.output.is_json() {
            false
        } else {
            Confirm::new()
                .with_prompt(format!("{} exists. Overwrite?", out.display()))
                .default(false)
                .interact()?
        }
    } else {
        true
    };
    if !overwrite {
        bail!("{} already exists (use --yes to overwrite)", out.display());
    }

    let spinner = ctx.output.spinner("Fetching categories...");
    let ctx = Context {
        config,
        config_path: ctx.config_path.clone(),
        output: ctx.output.clone(),
        cwd: ctx.cwd.clone(),
    };
    let (outcome, page) = load_page(&ctx, ReqwestTransport::new()).await;
    spinner.finish_and_clear();

    let summary = RenderSummary::from_outcome(&outcome, Some(out.display().to_string()));
    ctx.output.phase(&outcome.phase(), summary.cards);

    let cards = match outcome {
        LoadOutcome::Rendered { cards } => cards,
        LoadOutcome::Failed(e) => {
            if ctx.output.is_json() {
                ctx.output.json(&summary);
            }
            bail!("Error loading categories: {}", e);
        }
        other => bail!("Categories not rendered ({})", other.phase().name()),
    };

    let html = format!(
        "{}\n<!-- rendered {} -->\n",
        render_document(&ctx.config, &page),
        Utc::now().to_rfc3339()
    );
    write_output(&out, &html, true)?;

    if ctx.output.is_json() {
        ctx.output.json(&summary);
    } else {
        ctx.output.success(&format!(
            "Rendered {} categories to {} ({})",
            cards,
            out.display(),
            format_bytes(html.len() as u64)
        ));
    }

    Ok(())
}
