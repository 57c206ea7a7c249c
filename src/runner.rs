//! Strategy runner: composes one preparator with one search algorithm
//! and owns the fallback-on-timeout logic.

use std::time::Duration;

use crate::prepare::{Preparator, Prepared};
use crate::search::SearchAlgorithm;
use crate::timing::{PrepareBudget, Timer};
use crate::{BenchError, Entry, RunReport};

/// Lifecycle of a single strategy run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Preparing,
    Prepared,
    TimedOut,
    Searching,
    Done,
}

/// Fallback configuration: the search algorithm to move to when
/// preparation times out, plus the baseline duration that seeds the
/// preparation budget.
#[derive(Debug, Clone, Copy)]
pub struct Fallback {
    pub search: SearchAlgorithm,
    pub baseline: Duration,
}

/// One preparator + one search algorithm, executed over a shared
/// collection and query set.
///
/// When the preparator exceeds its budget the active search algorithm
/// is replaced with the fallback, once and irreversibly, and the search
/// runs over the original unprepared collection. The reported name
/// reflects the substitution.
#[derive(Debug)]
pub struct StrategyRun {
    preparator: Preparator,
    search: SearchAlgorithm,
    fallback: Option<SearchAlgorithm>,
    budget_baseline: Option<Duration>,
    state: RunState,
    prepare_timer: Timer,
    search_timer: Timer,
    fell_back: bool,
}

impl StrategyRun {
    pub fn new(preparator: Preparator, search: SearchAlgorithm) -> Self {
        Self {
            preparator,
            search,
            fallback: None,
            budget_baseline: None,
            state: RunState::Idle,
            prepare_timer: Timer::new(),
            search_timer: Timer::new(),
            fell_back: false,
        }
    }

    /// Configures the fallback search and seeds the preparation budget
    /// from its previously measured total duration.
    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = Some(fallback.search);
        self.budget_baseline = Some(fallback.baseline);
        self
    }

    /// Configures a budget without a fallback. A timeout then has
    /// nowhere to go and fails the run with
    /// [`BenchError::MissingFallback`].
    pub fn with_budget(mut self, baseline: Duration) -> Self {
        self.budget_baseline = Some(baseline);
        self
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Strategy label as it appears in the report. Reflects the active
    /// search algorithm, so a fallback substitution shows through.
    pub fn display_name(&self) -> String {
        match self.preparator {
            Preparator::Keep => self.search.name().to_string(),
            Preparator::HashBuild => self.preparator.name().to_string(),
            _ => format!("{} + {}", self.preparator.name(), self.search.name()),
        }
    }

    pub fn execute(
        &mut self,
        entries: &[Entry],
        queries: &[String],
    ) -> Result<RunReport, BenchError> {
        let prepared = self.prepare_phase(entries)?;
        let found = self.search_phase(&prepared, queries);
        self.state = RunState::Done;

        Ok(RunReport {
            name: self.display_name(),
            found,
            total: queries.len(),
            prepare_label: self.preparator.phase_label(),
            prepare_time: self.prepare_timer.elapsed(),
            search_time: self.search_timer.elapsed(),
            fell_back_to: if self.fell_back {
                Some(self.search.name())
            } else {
                None
            },
        })
    }

    fn prepare_phase(&mut self, entries: &[Entry]) -> Result<Prepared, BenchError> {
        self.state = RunState::Preparing;
        self.prepare_timer.start();

        let budget = self
            .budget_baseline
            .map(|baseline| PrepareBudget::new(&self.prepare_timer, baseline));
        let outcome = self.preparator.prepare(entries, budget.as_ref());
        drop(budget);
        self.prepare_timer.stop();

        match outcome {
            Ok(prepared) => {
                self.state = RunState::Prepared;
                Ok(prepared)
            }
            Err(_) => {
                // Partial preparation time stays on the clock and counts
                // toward the reported total.
                self.state = RunState::TimedOut;
                let fallback = self.fallback.ok_or(BenchError::MissingFallback)?;
                self.search = fallback;
                self.fell_back = true;
                // The fallback searches the original, unprepared
                // collection.
                Ok(Prepared::Entries(entries.to_vec()))
            }
        }
    }

    fn search_phase(&mut self, prepared: &Prepared, queries: &[String]) -> usize {
        self.state = RunState::Searching;
        self.search_timer.start();
        let found = match prepared {
            Prepared::Entries(entries) => queries
                .iter()
                .filter(|query| self.search.find(entries, query))
                .count(),
            Prepared::Indexed(index) => queries
                .iter()
                .filter(|query| self.search.find(index.bucket(query), query))
                .count(),
        };
        self.search_timer.stop();
        found
    }
}
