//! Single-record operations: runs, suites, cases and log entries created or
//! updated one at a time.
//!
//! Child records name their parents twice, once in the path and once in the
//! body. Both must agree, and the parent must exist, before anything is
//! written.

use chrono::Utc;
use tracing::info;

use crate::db::{DbPool, cases, logs, runs, suites};
use crate::error::{AppError, AppResult};
use crate::models::{
    CaseResponse, CreateCaseRequest, CreateLogRequest, CreateSuiteRequest, FinishRunRequest,
    ListRunsQuery, LogEntryResponse, RecordId, RunInput, RunResponse, SuiteResponse,
};
use crate::services::validator::{
    validate_case, validate_log, validate_run, validate_run_filter, validate_run_update,
    validate_suite,
};

/// Create a run with no children.
pub async fn create_run(pool: &DbPool, input: &RunInput) -> AppResult<RunResponse> {
    let now = Utc::now();
    let record = validate_run(input, now)?;

    let id = RecordId::generate();
    let model = runs::insert_run(pool.connection(), id, &record, now).await?;

    info!("Run created: id={}, name={}", id, model.name);

    Ok(RunResponse::from_entity(model, record.tags))
}

/// List runs, newest first.
pub async fn list_runs(pool: &DbPool, query: &ListRunsQuery) -> AppResult<Vec<RunResponse>> {
    let filter = validate_run_filter(query)?;
    let found = pool.list_runs(&filter).await?;

    let run_ids: Vec<_> = found.iter().map(|r| r.id).collect();
    let mut tags = pool.get_tags_by_run_ids(&run_ids).await?;

    Ok(found
        .into_iter()
        .map(|run| {
            let run_tags = tags.remove(&run.id).unwrap_or_default();
            RunResponse::from_entity(run, run_tags)
        })
        .collect())
}

/// Mark a run finished, changing only the fields supplied.
pub async fn finish_run(
    pool: &DbPool,
    run_id: RecordId,
    request: &FinishRunRequest,
) -> AppResult<RunResponse> {
    let now = Utc::now();
    let update = validate_run_update(request, now)?;

    let model = pool.finish_run(run_id.as_uuid(), &update, now).await?;
    let tags = pool.get_run_tags(model.id).await?;

    info!("Run finished: id={}, status={}", run_id, model.status);

    Ok(RunResponse::from_entity(model, tags))
}

/// Add a suite to an existing run.
///
/// Without an explicit `order` the suite goes after the ones already stored.
pub async fn create_suite(
    pool: &DbPool,
    run_id: RecordId,
    request: &CreateSuiteRequest,
) -> AppResult<SuiteResponse> {
    check_parent("run_id", run_id, request.run_id.as_deref())?;
    let record = validate_suite(&request.suite)?;

    pool.get_run_by_id(run_id.as_uuid())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Run {}", run_id)))?;

    let order = match record.order {
        Some(order) => order,
        None => position(pool.count_suites_by_run_id(run_id.as_uuid()).await?),
    };

    let id = RecordId::generate();
    let model =
        suites::insert_suite(pool.connection(), id, run_id.as_uuid(), &record, order, Utc::now())
            .await?;

    info!("Suite created: id={}, run_id={}, order={}", id, run_id, order);

    Ok(SuiteResponse::from_entity(model))
}

/// Add a case to an existing suite. The case's run is the suite's run; a
/// `run_id` in the body must name that run.
pub async fn create_case(
    pool: &DbPool,
    suite_id: RecordId,
    request: &CreateCaseRequest,
) -> AppResult<CaseResponse> {
    check_parent("suite_id", suite_id, request.suite_id.as_deref())?;
    let record = validate_case(&request.case)?;

    let suite = pool
        .get_suite_by_id(suite_id.as_uuid())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Suite {}", suite_id)))?;
    check_parent("run_id", suite.test_run_id.into(), request.run_id.as_deref())?;

    let sequence = position(pool.count_cases_by_suite_id(suite.id).await?);

    let id = RecordId::generate();
    let model = cases::insert_case(
        pool.connection(),
        id,
        suite.test_run_id,
        suite.id,
        &record,
        sequence,
        Utc::now(),
    )
    .await?;

    info!("Case created: id={}, suite_id={}", id, suite_id);

    Ok(CaseResponse::from_entity(model))
}

/// Append a log entry to an existing case.
pub async fn add_log(
    pool: &DbPool,
    case_id: RecordId,
    request: &CreateLogRequest,
) -> AppResult<LogEntryResponse> {
    check_parent("case_id", case_id, request.case_id.as_deref())?;
    let now = Utc::now();
    let record = validate_log(&request.log, now)?;

    let case = pool
        .get_case_by_id(case_id.as_uuid())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Case {}", case_id)))?;
    check_parent("run_id", case.test_run_id.into(), request.run_id.as_deref())?;

    let sequence = position(pool.count_logs_by_case_id(case.id).await?);

    let id = RecordId::generate();
    let model = logs::insert_log_entry(
        pool.connection(),
        id,
        case.test_run_id,
        case.id,
        &record,
        sequence,
        now,
    )
    .await?;

    Ok(LogEntryResponse::from_entity(model))
}

/// The body may omit a parent id that the path already names; when present
/// it must match. Any other value, parseable or not, is a mismatch.
fn check_parent(field: &'static str, expected: RecordId, claimed: Option<&str>) -> AppResult<()> {
    let Some(raw) = claimed else {
        return Ok(());
    };

    match RecordId::parse(raw) {
        Ok(actual) if actual == expected => Ok(()),
        _ => Err(AppError::Mismatch {
            field,
            expected: expected.to_string(),
            actual: raw.to_string(),
        }),
    }
}

fn position(count: u64) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}
