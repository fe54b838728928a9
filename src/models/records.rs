//! Validated, typed records ready for storage.
//!
//! These are produced by the validator from raw request bodies and never
//! deserialized directly, so every field already holds a checked value.

use chrono::{DateTime, Utc};

use super::counts::{RunCounts, SuiteCounts};
use super::status::{ExecutionStatus, LogLevel};

#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    pub name: String,
    pub environment: Option<String>,
    pub branch: Option<String>,
    pub build: Option<String>,
    pub status: ExecutionStatus,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub duration_ms: Option<i64>,
    pub counts: RunCounts,
    pub platform: Option<String>,
    pub tags: Vec<String>,
}

/// Partial update applied when a run finishes. `None` leaves the stored
/// value untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct RunUpdate {
    pub status: Option<ExecutionStatus>,
    pub finished_at: DateTime<Utc>,
    pub duration_ms: Option<i64>,
    pub total: Option<i64>,
    pub passed: Option<i64>,
    pub failed: Option<i64>,
    pub skipped: Option<i64>,
    pub blocked: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuiteRecord {
    pub name: String,
    pub status: ExecutionStatus,
    pub duration_ms: Option<i64>,
    pub counts: SuiteCounts,
    /// Explicit display position; the caller assigns one when absent.
    pub order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseRecord {
    pub name: String,
    pub class_name: Option<String>,
    pub status: ExecutionStatus,
    pub duration_ms: Option<i64>,
    pub error_message: Option<String>,
    pub error_trace: Option<String>,
    pub retries: i32,
    pub category: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub step: Option<String>,
    pub attachment_url: Option<String>,
}

/// Run listing filter.
#[derive(Debug, Clone, PartialEq)]
pub struct RunFilter {
    pub limit: u64,
    pub status: Option<ExecutionStatus>,
    pub tag: Option<String>,
}
