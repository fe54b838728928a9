//! Retrieval assembler: rebuilds the nested run tree from flat records.

use std::collections::HashMap;

use tracing::debug;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{
    CaseDetail, CaseResponse, LogEntryResponse, RecordId, RunDetail, RunResponse, SuiteDetail,
    SuiteResponse,
};
use crate::services::aggregator::aggregate_suite;

/// Assemble a run with its suites, cases and logs.
///
/// Suites come back by `order`, cases in insertion order and logs by
/// timestamp. Each level below the run is one query filtered on the run id.
pub async fn assemble_run_detail(pool: &DbPool, run_id: RecordId) -> AppResult<RunDetail> {
    let run = pool
        .get_run_by_id(run_id.as_uuid())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Run {}", run_id)))?;
    let tags = pool.get_run_tags(run.id).await?;

    let suites = pool.get_suites_by_run_id(run.id).await?;
    let cases = pool.get_cases_by_run_id(run.id).await?;
    let logs = pool.get_logs_by_run_id(run.id).await?;

    debug!(
        "Assembling run {}: {} suites, {} cases, {} logs",
        run_id,
        suites.len(),
        cases.len(),
        logs.len()
    );

    let mut logs_by_case: HashMap<Uuid, Vec<LogEntryResponse>> = HashMap::new();
    for log in logs {
        logs_by_case
            .entry(log.test_case_id)
            .or_default()
            .push(LogEntryResponse::from_entity(log));
    }

    let mut cases_by_suite: HashMap<Uuid, Vec<CaseDetail>> = HashMap::new();
    for case in cases {
        let logs = logs_by_case.remove(&case.id).unwrap_or_default();
        cases_by_suite
            .entry(case.test_suite_id)
            .or_default()
            .push(CaseDetail {
                case: CaseResponse::from_entity(case),
                logs,
            });
    }

    let suites = suites
        .into_iter()
        .map(|suite| {
            let cases = cases_by_suite.remove(&suite.id).unwrap_or_default();
            SuiteDetail {
                case_counts: aggregate_suite(cases.iter().map(|c| c.case.status)),
                suite: SuiteResponse::from_entity(suite),
                cases,
            }
        })
        .collect();

    Ok(RunDetail {
        run: RunResponse::from_entity(run, tags),
        suites,
    })
}
