//! Roll-up counters for suites and runs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Counters of one suite.
///
/// `blocked` is never derived from case status; it only carries a value
/// when a caller supplies one explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SuiteCounts {
    pub total: i64,
    pub passed: i64,
    pub failed: i64,
    pub skipped: i64,
    pub blocked: i64,
}

/// Counters of a run, summed over its suites.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RunCounts {
    pub total: i64,
    pub passed: i64,
    pub failed: i64,
    pub skipped: i64,
    pub blocked: i64,
}
