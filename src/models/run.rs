//! Run request and response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::record_id::RecordId;
use super::status::ExecutionStatus;
use crate::entity::test_run;

/// Run fields as received from clients, before validation.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct RunInput {
    /// Run name, e.g. "Nightly Regression" (required).
    pub name: Option<String>,
    /// Environment like dev/stage/prod.
    pub environment: Option<String>,
    /// Git branch or version.
    pub branch: Option<String>,
    /// Build number or commit sha.
    pub build: Option<String>,
    /// running, passed, failed, skipped or blocked (default running).
    pub status: Option<String>,
    /// Defaults to the time the run is stored.
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub duration_ms: Option<i64>,
    pub total: Option<i64>,
    pub passed: Option<i64>,
    pub failed: Option<i64>,
    pub skipped: Option<i64>,
    pub blocked: Option<i64>,
    /// Execution platform info.
    pub platform: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Fields set when a run finishes. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct FinishRunRequest {
    pub status: Option<String>,
    /// Defaults to now.
    pub finished_at: Option<DateTime<Utc>>,
    pub duration_ms: Option<i64>,
    pub total: Option<i64>,
    pub passed: Option<i64>,
    pub failed: Option<i64>,
    pub skipped: Option<i64>,
    pub blocked: Option<i64>,
}

/// Query parameters for run listing.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ListRunsQuery {
    /// Maximum runs returned (default 50, max 500).
    pub limit: Option<i64>,
    /// Filter by status.
    pub status: Option<String>,
    /// Only runs carrying this tag.
    pub tag: Option<String>,
}

/// Run as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RunResponse {
    pub id: RecordId,
    pub name: String,
    pub environment: Option<String>,
    pub branch: Option<String>,
    pub build: Option<String>,
    pub status: ExecutionStatus,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub duration_ms: Option<i64>,
    pub total: i64,
    pub passed: i64,
    pub failed: i64,
    pub skipped: i64,
    pub blocked: i64,
    pub platform: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RunResponse {
    pub fn from_entity(m: test_run::Model, tags: Vec<String>) -> Self {
        RunResponse {
            id: m.id.into(),
            name: m.name,
            environment: m.environment,
            branch: m.branch,
            build: m.build,
            status: ExecutionStatus::from_stored(&m.status),
            started_at: m.started_at,
            finished_at: m.finished_at,
            duration_ms: m.duration_ms,
            total: m.total,
            passed: m.passed,
            failed: m.failed,
            skipped: m.skipped,
            blocked: m.blocked,
            platform: m.platform,
            tags,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Response carrying the id of a newly created record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub id: RecordId,
}
