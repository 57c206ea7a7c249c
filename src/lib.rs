// Directory Search Benchmark Library

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// A single directory record: phone number plus subscriber name.
///
/// Ordering everywhere in this crate is lexicographic by `name`; the
/// phone number is payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub phone: String,
    pub name: String,
}

impl Entry {
    pub fn new(phone: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            name: name.into(),
        }
    }
}

/// Raised by a budget-aware preparator when its allotted time is
/// exceeded. Recovered locally by the strategy runner when a fallback
/// search is configured; otherwise escalated to
/// [`BenchError::MissingFallback`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("preparation exceeded its time budget")]
pub struct PrepareTimedOut;

#[derive(Debug, Error)]
pub enum BenchError {
    /// Preparation timed out but the run has no fallback search to move
    /// to. A configuration defect, not a runtime condition.
    #[error("preparation timed out and no fallback search is configured")]
    MissingFallback,

    #[error("failed to read {path}: {source}")]
    Input {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed directory line {line}: expected `<phone> <name>`")]
    MalformedLine { line: usize },
}

/// Per-run metrics collected by a [`StrategyRun`].
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Strategy label; reflects a fallback substitution when one occurred.
    pub name: String,
    pub found: usize,
    pub total: usize,
    /// `Some("Sorting")` / `Some("Creating")` for preparable strategies,
    /// `None` for the plain baseline (no breakdown is printed).
    pub prepare_label: Option<&'static str>,
    pub prepare_time: Duration,
    pub search_time: Duration,
    /// Name of the search algorithm moved to after a timeout, if any.
    pub fell_back_to: Option<&'static str>,
}

impl RunReport {
    /// Total reported duration. Aborted partial preparation time still
    /// counts toward the total.
    pub fn total_time(&self) -> Duration {
        self.prepare_time + self.search_time
    }
}

impl std::fmt::Display for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "Found {} / {} entries. Time taken: {}",
            self.found,
            self.total,
            format_duration(self.total_time())
        )?;
        if let Some(label) = self.prepare_label {
            write!(f, "{} time: {}", label, format_duration(self.prepare_time))?;
            if let Some(fallback) = self.fell_back_to {
                write!(f, " - STOPPED, moved to {}", fallback)?;
            }
            writeln!(f)?;
            writeln!(f, "Searching time: {}", format_duration(self.search_time))?;
        }
        Ok(())
    }
}

/// Renders a duration as `X min. Y sec. Z ms.`, the report format.
pub fn format_duration(d: Duration) -> String {
    let total_ms = d.as_millis();
    let millis = total_ms % 1000;
    let seconds = (total_ms / 1000) % 60;
    let minutes = (total_ms / 60_000) % 60;
    format!("{} min. {} sec. {} ms.", minutes, seconds, millis)
}

pub mod driver;
pub mod input;
pub mod prepare;
pub mod runner;
pub mod search;
pub mod timing;

// Export the main types
pub use driver::run_benchmark;
pub use input::{generate_directory, generate_queries, load_directory, load_queries};
pub use prepare::{HashIndex, Preparator, Prepared};
pub use runner::{Fallback, RunState, StrategyRun};
pub use search::SearchAlgorithm;
pub use timing::{BUDGET_MULTIPLIER, PrepareBudget, Timer};
