//! Ingestion pipeline: one nested payload becomes a run with its suites,
//! cases and log entries.
//!
//! The whole payload is validated before the first write, and all writes
//! share one transaction. A rejected payload leaves nothing behind, and a
//! store failure half-way rolls back what was already written.

use chrono::{DateTime, Utc};
use sea_orm::TransactionTrait;
use tracing::info;

use crate::db::{DbPool, cases, logs, runs, suites};
use crate::error::{AppResult, ValidationError};
use crate::models::{
    CaseRecord, IngestRunRequest, LogRecord, RecordId, RunCounts, RunRecord, SuiteRecord,
};
use crate::services::aggregator::aggregate_run;
use crate::services::validator::{validate_case, validate_log, validate_run, validate_suite};

/// Validated payload, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestPlan {
    pub run: RunRecord,
    pub suites: Vec<PlannedSuite>,
    /// Run counters as they will be stored after ingestion.
    pub counts: RunCounts,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedSuite {
    pub suite: SuiteRecord,
    /// Explicit order, or the suite's index in the payload.
    pub order: i32,
    pub cases: Vec<PlannedCase>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedCase {
    pub case: CaseRecord,
    pub logs: Vec<LogRecord>,
}

/// Summary of a finished ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestOutcome {
    pub run_id: RecordId,
    pub suites: usize,
    pub cases: usize,
    pub logs: usize,
    pub counts: RunCounts,
}

/// Validate a nested payload. Field paths in errors point into the payload,
/// e.g. `suites[0].cases[1].logs[2].message`.
pub fn plan_ingest(payload: &IngestRunRequest, now: DateTime<Utc>) -> Result<IngestPlan, ValidationError> {
    let run = validate_run(&payload.run, now)?;

    let mut planned_suites = Vec::with_capacity(payload.suites.len());
    for (index, ingest_suite) in payload.suites.iter().enumerate() {
        let suite_path = format!("suites[{}]", index);
        let suite = validate_suite(&ingest_suite.suite).map_err(|e| e.nested(&suite_path))?;
        let order = suite
            .order
            .unwrap_or_else(|| i32::try_from(index).unwrap_or(i32::MAX));

        let mut planned_cases = Vec::with_capacity(ingest_suite.cases.len());
        for (case_index, ingest_case) in ingest_suite.cases.iter().enumerate() {
            let case_path = format!("{}.cases[{}]", suite_path, case_index);
            let case = validate_case(&ingest_case.case).map_err(|e| e.nested(&case_path))?;

            let logs = ingest_case
                .logs
                .iter()
                .enumerate()
                .map(|(log_index, log)| {
                    validate_log(log, now)
                        .map_err(|e| e.nested(&format!("{}.logs[{}]", case_path, log_index)))
                })
                .collect::<Result<Vec<_>, _>>()?;

            planned_cases.push(PlannedCase { case, logs });
        }

        planned_suites.push(PlannedSuite {
            suite,
            order,
            cases: planned_cases,
        });
    }

    // Suites never carry blocked, so the run's blocked counter sums to 0.
    let counts = aggregate_run(planned_suites.iter().map(|s| &s.suite.counts));

    Ok(IngestPlan {
        run,
        suites: planned_suites,
        counts,
    })
}

/// Ingest a nested payload.
///
/// Not idempotent: the same payload ingested twice yields two runs.
pub async fn ingest_run(pool: &DbPool, payload: &IngestRunRequest) -> AppResult<IngestOutcome> {
    let now = Utc::now();
    let plan = plan_ingest(payload, now)?;
    write_plan(pool, &plan, now).await
}

async fn write_plan(pool: &DbPool, plan: &IngestPlan, now: DateTime<Utc>) -> AppResult<IngestOutcome> {
    let txn = pool.connection().begin().await?;

    let run_id = RecordId::generate();
    runs::insert_run(&txn, run_id, &plan.run, now).await?;

    let mut case_count = 0;
    let mut log_count = 0;

    for planned_suite in &plan.suites {
        let suite_id = RecordId::generate();
        suites::insert_suite(
            &txn,
            suite_id,
            run_id.as_uuid(),
            &planned_suite.suite,
            planned_suite.order,
            now,
        )
        .await?;

        for (sequence, planned_case) in planned_suite.cases.iter().enumerate() {
            let case_id = RecordId::generate();
            cases::insert_case(
                &txn,
                case_id,
                run_id.as_uuid(),
                suite_id.as_uuid(),
                &planned_case.case,
                sequence as i32,
                now,
            )
            .await?;
            case_count += 1;

            for (log_sequence, log) in planned_case.logs.iter().enumerate() {
                logs::insert_log_entry(
                    &txn,
                    RecordId::generate(),
                    run_id.as_uuid(),
                    case_id.as_uuid(),
                    log,
                    log_sequence as i32,
                    now,
                )
                .await?;
                log_count += 1;
            }
        }
    }

    // Overwrites whatever counters the run carried at insert time
    runs::update_run_counts(&txn, run_id.as_uuid(), plan.counts, now).await?;

    txn.commit().await?;

    info!(
        "Run ingested: id={}, suites={}, cases={}, logs={}, total={}, passed={}, failed={}",
        run_id,
        plan.suites.len(),
        case_count,
        log_count,
        plan.counts.total,
        plan.counts.passed,
        plan.counts.failed
    );

    Ok(IngestOutcome {
        run_id,
        suites: plan.suites.len(),
        cases: case_count,
        logs: log_count,
        counts: plan.counts,
    })
}
