//! Entity validator.
//!
//! Turns raw request bodies into typed records: required fields present,
//! enum fields within their allowed set, numeric fields non-negative, and
//! defaults applied. Pure; callers pass in the current time.

use chrono::{DateTime, Utc};

use crate::error::{ValidationError, ValidationReason};
use crate::models::{
    CaseInput, CaseRecord, ExecutionStatus, FinishRunRequest, ListRunsQuery, LogInput, LogLevel,
    LogRecord, RunCounts, RunFilter, RunInput, RunRecord, RunUpdate, SuiteCounts, SuiteInput,
    SuiteRecord,
};

/// Default number of runs returned by a listing.
pub const DEFAULT_LIST_LIMIT: i64 = 50;
/// Upper bound on the listing limit.
pub const MAX_LIST_LIMIT: i64 = 500;

type Validated<T> = Result<T, ValidationError>;

/// Validate a run. `started_at` defaults to `now`.
pub fn validate_run(input: &RunInput, now: DateTime<Utc>) -> Validated<RunRecord> {
    Ok(RunRecord {
        name: required("name", input.name.as_deref())?,
        environment: input.environment.clone(),
        branch: input.branch.clone(),
        build: input.build.clone(),
        status: status("status", input.status.as_deref())?,
        started_at: input.started_at.unwrap_or(now),
        finished_at: input.finished_at,
        duration_ms: non_negative("duration_ms", input.duration_ms)?,
        counts: RunCounts {
            total: counter("total", input.total)?,
            passed: counter("passed", input.passed)?,
            failed: counter("failed", input.failed)?,
            skipped: counter("skipped", input.skipped)?,
            blocked: counter("blocked", input.blocked)?,
        },
        platform: input.platform.clone(),
        tags: input.tags.clone(),
    })
}

/// Validate a finish request. Only supplied fields end up in the update;
/// `finished_at` defaults to `now`.
pub fn validate_run_update(input: &FinishRunRequest, now: DateTime<Utc>) -> Validated<RunUpdate> {
    let status = match input.status.as_deref() {
        Some(raw) => Some(parse_status("status", raw)?),
        None => None,
    };

    Ok(RunUpdate {
        status,
        finished_at: input.finished_at.unwrap_or(now),
        duration_ms: non_negative("duration_ms", input.duration_ms)?,
        total: non_negative("total", input.total)?,
        passed: non_negative("passed", input.passed)?,
        failed: non_negative("failed", input.failed)?,
        skipped: non_negative("skipped", input.skipped)?,
        blocked: non_negative("blocked", input.blocked)?,
    })
}

/// Validate a suite. Suites never carry a blocked counter of their own.
pub fn validate_suite(input: &SuiteInput) -> Validated<SuiteRecord> {
    Ok(SuiteRecord {
        name: required("name", input.name.as_deref())?,
        status: status("status", input.status.as_deref())?,
        duration_ms: non_negative("duration_ms", input.duration_ms)?,
        counts: SuiteCounts {
            total: counter("total", input.total)?,
            passed: counter("passed", input.passed)?,
            failed: counter("failed", input.failed)?,
            skipped: counter("skipped", input.skipped)?,
            blocked: 0,
        },
        order: small_int("order", input.order)?,
    })
}

pub fn validate_case(input: &CaseInput) -> Validated<CaseRecord> {
    Ok(CaseRecord {
        name: required("name", input.name.as_deref())?,
        class_name: input.class_name.clone(),
        status: status("status", input.status.as_deref())?,
        duration_ms: non_negative("duration_ms", input.duration_ms)?,
        error_message: input.error_message.clone(),
        error_trace: input.error_trace.clone(),
        retries: small_int("retries", input.retries)?.unwrap_or(0),
        category: input.category.clone(),
        author: input.author.clone(),
    })
}

/// Validate a log entry. `timestamp` defaults to `now`.
pub fn validate_log(input: &LogInput, now: DateTime<Utc>) -> Validated<LogRecord> {
    let level = match input.level.as_deref() {
        Some(raw) => LogLevel::parse(raw).ok_or_else(|| {
            ValidationError::new("level", ValidationReason::InvalidValue {
                allowed: LogLevel::ALLOWED,
            })
        })?,
        None => LogLevel::default(),
    };

    Ok(LogRecord {
        level,
        message: required("message", input.message.as_deref())?,
        timestamp: input.timestamp.unwrap_or(now),
        step: input.step.clone(),
        attachment_url: input.attachment_url.clone(),
    })
}

/// Validate listing parameters. The limit must lie within 1..=`MAX_LIST_LIMIT`.
pub fn validate_run_filter(query: &ListRunsQuery) -> Validated<RunFilter> {
    let status = match query.status.as_deref() {
        Some(raw) if !raw.is_empty() => Some(parse_status("status", raw)?),
        _ => None,
    };

    let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    if !(1..=MAX_LIST_LIMIT).contains(&limit) {
        return Err(ValidationError::new("limit", ValidationReason::OutOfRange));
    }

    Ok(RunFilter {
        limit: limit as u64,
        status,
        tag: query.tag.clone().filter(|t| !t.is_empty()),
    })
}

fn required(field: &str, value: Option<&str>) -> Validated<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(ValidationError::new(field, ValidationReason::Missing)),
    }
}

fn status(field: &str, value: Option<&str>) -> Validated<ExecutionStatus> {
    value.map_or(Ok(ExecutionStatus::default()), |raw| parse_status(field, raw))
}

fn parse_status(field: &str, raw: &str) -> Validated<ExecutionStatus> {
    ExecutionStatus::parse(raw).ok_or_else(|| {
        ValidationError::new(field, ValidationReason::InvalidValue {
            allowed: ExecutionStatus::ALLOWED,
        })
    })
}

fn non_negative(field: &str, value: Option<i64>) -> Validated<Option<i64>> {
    match value {
        Some(v) if v < 0 => Err(ValidationError::new(field, ValidationReason::Negative)),
        other => Ok(other),
    }
}

fn counter(field: &str, value: Option<i64>) -> Validated<i64> {
    Ok(non_negative(field, value)?.unwrap_or(0))
}

fn small_int(field: &str, value: Option<i64>) -> Validated<Option<i32>> {
    non_negative(field, value)?
        .map(|v| {
            i32::try_from(v).map_err(|_| ValidationError::new(field, ValidationReason::OutOfRange))
        })
        .transpose()
}
