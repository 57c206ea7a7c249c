//! Benchmark driver: the fixed strategy sequence.
//!
//! Four runs, strictly in order, each reported before the next starts.
//! The baseline linear run goes first because its measured total
//! duration seeds the bubble-sort run's preparation budget.

use crate::prepare::Preparator;
use crate::runner::{Fallback, StrategyRun};
use crate::search::SearchAlgorithm;
use crate::{BenchError, Entry, RunReport};

/// Runs all four strategies over the shared collection and query set,
/// printing a report per run and returning the collected reports.
pub fn run_benchmark(
    entries: &[Entry],
    queries: &[String],
) -> Result<Vec<RunReport>, BenchError> {
    let mut reports = Vec::with_capacity(4);

    // (1) Linear baseline; its duration becomes the budget reference.
    let baseline = execute_and_report(
        StrategyRun::new(Preparator::Keep, SearchAlgorithm::Linear),
        entries,
        queries,
    )?;
    let baseline_duration = baseline.total_time();
    reports.push(baseline);

    // (2) Jump search after bubble sort, falling back to the baseline
    // strategy when the sort overruns 10x the baseline duration.
    reports.push(execute_and_report(
        StrategyRun::new(Preparator::BubbleSort, SearchAlgorithm::Jump).with_fallback(Fallback {
            search: SearchAlgorithm::Linear,
            baseline: baseline_duration,
        }),
        entries,
        queries,
    )?);

    // (3) Binary search after quicksort; the sort is fast enough to run
    // unbudgeted.
    reports.push(execute_and_report(
        StrategyRun::new(Preparator::QuickSort, SearchAlgorithm::Binary),
        entries,
        queries,
    )?);

    // (4) Hash table: linear search narrowed to one bucket per query.
    reports.push(execute_and_report(
        StrategyRun::new(Preparator::HashBuild, SearchAlgorithm::Linear),
        entries,
        queries,
    )?);

    Ok(reports)
}

fn execute_and_report(
    mut run: StrategyRun,
    entries: &[Entry],
    queries: &[String],
) -> Result<RunReport, BenchError> {
    println!("Start searching ({})...", run.display_name());
    let report = run.execute(entries, queries)?;
    println!("{}", report);
    Ok(report)
}
