//! Phase timing and the preparation time budget.

use std::time::{Duration, Instant};

use crate::PrepareTimedOut;

/// Budgets allow ten times the baseline duration before aborting.
pub const BUDGET_MULTIPLIER: u32 = 10;

/// Elapsed-time measurement for one benchmark phase.
///
/// Created per phase, started, stopped; the frozen duration can be read
/// any number of times afterwards. While running, `elapsed()` reads the
/// live clock so a [`PrepareBudget`] can poll it mid-operation.
#[derive(Debug, Default)]
pub struct Timer {
    started: Option<Instant>,
    frozen: Duration,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the current instant and resets the frozen duration.
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
        self.frozen = Duration::ZERO;
    }

    /// Freezes the duration accumulated since `start()`.
    pub fn stop(&mut self) {
        if let Some(started) = self.started.take() {
            self.frozen = started.elapsed();
        }
    }

    /// Live duration while running, the frozen value once stopped, zero
    /// if never started.
    pub fn elapsed(&self) -> Duration {
        match self.started {
            Some(started) => started.elapsed(),
            None => self.frozen,
        }
    }
}

/// Deadline for a preparation phase, derived from a previously measured
/// baseline duration and polled against a running reference [`Timer`].
///
/// Never mutated; `check()` only reads the referenced timer.
#[derive(Debug)]
pub struct PrepareBudget<'t> {
    timer: &'t Timer,
    allowed: Duration,
}

impl<'t> PrepareBudget<'t> {
    pub fn new(timer: &'t Timer, baseline: Duration) -> Self {
        Self {
            timer,
            allowed: baseline * BUDGET_MULTIPLIER,
        }
    }

    pub fn allowed(&self) -> Duration {
        self.allowed
    }

    /// Signals a timeout iff the reference timer has run past the
    /// allowed duration.
    pub fn check(&self) -> Result<(), PrepareTimedOut> {
        if self.timer.elapsed() > self.allowed {
            Err(PrepareTimedOut)
        } else {
            Ok(())
        }
    }
}
