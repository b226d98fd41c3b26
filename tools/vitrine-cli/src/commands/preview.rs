//! Render the page from a local category file.

use std::io::Write;

use anyhow::{bail, Context as _, Result};
use vitrine_sdk::prelude::{HttpResponse, LoadOutcome, StaticTransport};

use super::{load_page, write_output, PreviewArgs, RenderSummary};
use crate::context::Context;
use crate::page::render_document;

/// Run the preview command.
pub async fn run(args: PreviewArgs, ctx: &Context) -> Result<()> {
    let data_path = ctx.resolve_path(&args.data);
    let body = std::fs::read(&data_path)
        .with_context(|| format!("Failed to read {}", data_path.display()))?;

    ctx.output.debug(&format!("Loaded {} bytes from {}", body.len(), data_path.display()));

    let (outcome, page) = load_page(ctx, StaticTransport::respond(HttpResponse::ok(body))).await;
    ctx.output.debug(&format!("categories: {}", outcome.phase().name()));

    let cards = match &outcome {
        LoadOutcome::Rendered { cards } => *cards,
        LoadOutcome::Failed(e) => bail!("Invalid category file {}: {}", data_path.display(), e),
        other => bail!("Categories not rendered ({})", other.phase().name()),
    };

    let html = render_document(&ctx.config, &page);

    match args.out {
        Some(out) => {
            let out = ctx.resolve_path(&out);
            write_output(&out, &html, true)?;
            if ctx.output.is_json() {
                ctx.output
                    .json(&RenderSummary::from_outcome(&outcome, Some(out.display().to_string())));
            } else {
                ctx.output
                    .success(&format!("Previewed {} categories to {}", cards, out.display()));
            }
        }
        None => {
            std::io::stdout()
                .write_all(html.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
