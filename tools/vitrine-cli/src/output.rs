//! Terminal output for the CLI.

use console::{style, StyledObject};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use vitrine_sdk::prelude::LifecyclePhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Plain,
    Verbose,
    /// Only machine-readable documents go to stdout.
    Json,
}

/// Routes CLI messages according to the global `--verbose` and `--json` flags.
#[derive(Clone)]
pub struct Output {
    mode: Mode,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        let mode = match (verbose, json) {
            (_, true) => Mode::Json,
            (true, false) => Mode::Verbose,
            (false, false) => Mode::Plain,
        };
        Self { mode }
    }

    fn human(&self) -> bool {
        self.mode != Mode::Json
    }

    fn stdout_line(&self, marker: StyledObject<&str>, msg: &str) {
        if self.human() {
            println!("{} {}", marker, msg);
        }
    }

    pub fn info(&self, msg: &str) {
        self.stdout_line(style("ℹ").blue(), msg);
    }

    pub fn success(&self, msg: &str) {
        self.stdout_line(style("✓").green(), msg);
    }

    pub fn warn(&self, msg: &str) {
        if self.human() {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    /// Errors are always shown, as a JSON object in JSON mode.
    pub fn error(&self, msg: &str) {
        match self.mode {
            Mode::Json => eprintln!("{}", serde_json::json!({ "error": msg })),
            Mode::Plain | Mode::Verbose => {
                eprintln!("{} {}", style("✗").red(), style(msg).red())
            }
        }
    }

    pub fn debug(&self, msg: &str) {
        if self.mode == Mode::Verbose {
            eprintln!("{} {}", style("→").dim(), style(msg).dim());
        }
    }

    pub fn header(&self, msg: &str) {
        if self.human() {
            println!("\n{}", style(msg).bold().underlined());
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if self.human() {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    /// How a category load settled, e.g. `categories: committed (4 cards)`.
    pub fn phase(&self, phase: &LifecyclePhase, cards: usize) {
        if self.human() {
            println!(
                "  {}: {} ({} cards)",
                style("categories").dim(),
                phase_badge(phase),
                cards
            );
        }
    }

    pub fn json<T: Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Spinner while the category document is fetched. Hidden in JSON mode.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if !self.human() {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(template) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(template);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    pub fn is_verbose(&self) -> bool {
        self.mode == Mode::Verbose
    }

    pub fn is_json(&self) -> bool {
        self.mode == Mode::Json
    }
}

/// Colored phase name.
pub fn phase_badge(phase: &LifecyclePhase) -> String {
    let name = phase.name();
    match phase {
        LifecyclePhase::Committed => style(name).green().to_string(),
        LifecyclePhase::Skipped | LifecyclePhase::Superseded => style(name).yellow().to_string(),
        LifecyclePhase::Failed(_) => style(name).red().to_string(),
        LifecyclePhase::Start | LifecyclePhase::Fetched => name.to_string(),
    }
}

/// Human-readable size of a rendered page.
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    match bytes {
        b if b >= MB => format!("{:.2} MB", b as f64 / MB as f64),
        b if b >= KB => format!("{:.2} KB", b as f64 / KB as f64),
        b => format!("{} B", b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.00 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn test_json_mode_wins_over_verbose() {
        let output = Output::new(true, true);
        assert!(output.is_json());
        assert!(!output.is_verbose());
        assert!(Output::new(true, false).is_verbose());
    }

    #[test]
    fn test_phase_badge_keeps_name() {
        assert!(phase_badge(&LifecyclePhase::Committed).contains("committed"));
        assert!(phase_badge(&LifecyclePhase::Failed("x".into())).contains("failed"));
    }
}
