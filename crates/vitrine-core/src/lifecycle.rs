//! Content load lifecycle tracking.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Phases a content load passes through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Load started.
    Start,
    /// Target container missing, nothing done.
    Skipped,
    /// Remote collection fetched and decoded.
    Fetched,
    /// Rendered cards committed to the container.
    Committed,
    /// A newer load was issued before this one committed.
    Superseded,
    /// Load failed, container untouched.
    Failed(String),
}

impl LifecyclePhase {
    /// Name used as a timing mark and log field.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Skipped => "skipped",
            Self::Fetched => "fetched",
            Self::Committed => "committed",
            Self::Superseded => "superseded",
            Self::Failed(_) => "failed",
        }
    }

    /// True once no further phase can follow.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Skipped | Self::Committed | Self::Superseded | Self::Failed(_)
        )
    }
}

/// Timing context for observability.
#[derive(Debug, Clone)]
pub struct TimingContext {
    start: Instant,
    marks: HashMap<String, Instant>,
}

impl TimingContext {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            marks: HashMap::new(),
        }
    }

    /// Record a timing mark. Re-marking overwrites.
    pub fn mark(&mut self, name: &str) {
        self.marks.insert(name.to_string(), Instant::now());
    }

    /// Record the mark for a lifecycle phase.
    pub fn mark_phase(&mut self, phase: &LifecyclePhase) {
        self.mark(phase.name());
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time from start to the named mark.
    pub fn since_start(&self, name: &str) -> Option<Duration> {
        self.marks.get(name).map(|t| t.duration_since(self.start))
    }

    /// Time between two marks.
    pub fn between(&self, from: &str, to: &str) -> Option<Duration> {
        let from = self.marks.get(from)?;
        let to = self.marks.get(to)?;
        Some(to.saturating_duration_since(*from))
    }
}

impl Default for TimingContext {
    fn default() -> Self {
        Self::new()
    }
}
