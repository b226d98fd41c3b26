//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use vitrine_sdk::prelude::{LogFormat, LogLevel, RequestId, SiteConfig, StructuredLogger};

use crate::output::Output;

/// Config file names searched from the working directory upward.
pub const CONFIG_NAMES: [&str; 3] = ["vitrine.toml", ".vitrine.toml", "vitrine.json"];

/// Execution context for CLI commands.
pub struct Context {
    pub config: SiteConfig,
    /// Where the config came from, if a file was found.
    pub config_path: Option<PathBuf>,
    pub output: Output,
    pub cwd: PathBuf,
}

impl Context {
    /// Load context, reading an explicit config path or discovering one.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = PathBuf::from(path);
                let config = SiteConfig::load(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?;
                (config, Some(path))
            }
            None => match find_config(&cwd) {
                Some(path) => {
                    let config = SiteConfig::load(&path)
                        .with_context(|| format!("Failed to load config {}", path.display()))?;
                    (config, Some(path))
                }
                None => (SiteConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Logger matching the output mode.
    pub fn logger(&self) -> StructuredLogger {
        let logger = StructuredLogger::new(RequestId::generate()).with_route("cli");
        if self.output.is_verbose() {
            logger
                .with_format(LogFormat::Tracing)
                .with_min_level(LogLevel::Debug)
        } else if self.output.is_json() {
            logger.with_format(LogFormat::Json)
        } else {
            logger
                .with_format(LogFormat::Human)
                .with_min_level(LogLevel::Warn)
        }
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}

/// First config file found walking up from `start`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}
