//! Roll-up counters for suites and runs.

use crate::models::{ExecutionStatus, RunCounts, SuiteCounts};

/// Count cases by status.
///
/// Every case counts toward `total`. Running and blocked cases count toward
/// nothing else: `blocked` is not derived from case status.
pub fn aggregate_suite<I>(statuses: I) -> SuiteCounts
where
    I: IntoIterator<Item = ExecutionStatus>,
{
    statuses
        .into_iter()
        .fold(SuiteCounts::default(), |mut counts, status| {
            counts.total += 1;
            match status {
                ExecutionStatus::Passed => counts.passed += 1,
                ExecutionStatus::Failed => counts.failed += 1,
                ExecutionStatus::Skipped => counts.skipped += 1,
                ExecutionStatus::Running | ExecutionStatus::Blocked => {}
            }
            counts
        })
}

/// Sum suite counters into run counters.
///
/// `blocked` is the sum of the values the suites carry, never a status
/// count. Ingested suites carry 0, so an ingested run reports 0 blocked.
pub fn aggregate_run<'a, I>(suites: I) -> RunCounts
where
    I: IntoIterator<Item = &'a SuiteCounts>,
{
    suites
        .into_iter()
        .fold(RunCounts::default(), |acc, suite| RunCounts {
            total: acc.total.saturating_add(suite.total),
            passed: acc.passed.saturating_add(suite.passed),
            failed: acc.failed.saturating_add(suite.failed),
            skipped: acc.skipped.saturating_add(suite.skipped),
            blocked: acc.blocked.saturating_add(suite.blocked),
        })
}
