//! Assembled run tree returned by `GET /runs/{run_id}`.

use serde::Serialize;
use utoipa::ToSchema;

use super::case::CaseResponse;
use super::counts::SuiteCounts;
use super::log_entry::LogEntryResponse;
use super::run::RunResponse;
use super::suite::SuiteResponse;

/// A run with its suites in display order.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RunDetail {
    #[serde(flatten)]
    pub run: RunResponse,
    pub suites: Vec<SuiteDetail>,
}

/// A suite with its cases in insertion order.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SuiteDetail {
    #[serde(flatten)]
    pub suite: SuiteResponse,
    /// Counters recomputed from the embedded cases. The stored counters
    /// above are what the reporter supplied and may differ.
    pub case_counts: SuiteCounts,
    pub cases: Vec<CaseDetail>,
}

/// A case with its log entries in timestamp order.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CaseDetail {
    #[serde(flatten)]
    pub case: CaseResponse,
    pub logs: Vec<LogEntryResponse>,
}
