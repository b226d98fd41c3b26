//! CLI command implementations.

pub mod config;
pub mod preview;
pub mod render;

use std::cell::RefCell;
use std::path::Path;

use anyhow::{bail, Context as _, Result};
use clap::{Args, Subcommand};
use serde::Serialize;
use vitrine_sdk::prelude::{ContentLoader, LoadOutcome, Page, SystemClock, Transport};

use crate::context::Context;

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Output HTML file.
    #[arg(short, long, default_value = "index.html")]
    pub out: String,

    /// Override the remote category document URL.
    #[arg(long)]
    pub data_url: Option<String>,

    /// Overwrite the output file without asking.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the preview command.
#[derive(Args)]
pub struct PreviewArgs {
    /// Local JSON file holding the category array.
    #[arg(short, long)]
    pub data: String,

    /// Output HTML file (default: stdout).
    #[arg(short, long)]
    pub out: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Where to write the file.
        #[arg(short, long, default_value = "vitrine.toml")]
        path: String,

        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// Machine-readable result of a page render.
#[derive(Debug, Serialize)]
pub struct RenderSummary {
    pub outcome: &'static str,
    pub cards: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RenderSummary {
    pub fn from_outcome(outcome: &LoadOutcome, output: Option<String>) -> Self {
        let (cards, error) = match outcome {
            LoadOutcome::Rendered { cards } => (*cards, None),
            LoadOutcome::Failed(e) => (0, Some(e.to_string())),
            LoadOutcome::Skipped | LoadOutcome::Superseded => (0, None),
        };
        Self {
            outcome: outcome.phase().name(),
            cards,
            output,
            error,
        }
    }
}

/// Run the content loader for the configured container.
pub async fn load_page<T: Transport>(ctx: &Context, transport: T) -> (LoadOutcome, Page) {
    let config = &ctx.config;
    let page = RefCell::new(Page::new().with_container(&config.loader.container_id, ""));
    let loader =
        ContentLoader::from_config(config, transport, SystemClock).with_logger(ctx.logger());

    let outcome = loader.load(&page).await;
    (outcome, page.into_inner())
}

/// Write `html` to `path`, refusing to clobber an existing file unless allowed.
pub fn write_output(path: &Path, html: &str, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        bail!(
            "{} already exists (use --yes to overwrite)",
            path.display()
        );
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    std::fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))
}
