//! Suite request and response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::record_id::RecordId;
use super::status::ExecutionStatus;
use crate::entity::test_suite;

/// Suite fields as received from clients, before validation.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SuiteInput {
    /// Suite name (required).
    pub name: Option<String>,
    pub status: Option<String>,
    pub duration_ms: Option<i64>,
    pub total: Option<i64>,
    pub passed: Option<i64>,
    pub failed: Option<i64>,
    pub skipped: Option<i64>,
    /// Display position within the run. Defaults to the next free index.
    pub order: Option<i64>,
}

/// Body of `POST /runs/{run_id}/suites`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateSuiteRequest {
    /// Must equal the run id in the path.
    pub run_id: Option<String>,
    #[serde(flatten)]
    pub suite: SuiteInput,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SuiteResponse {
    pub id: RecordId,
    pub run_id: RecordId,
    pub name: String,
    pub status: ExecutionStatus,
    pub duration_ms: Option<i64>,
    pub total: i64,
    pub passed: i64,
    pub failed: i64,
    pub skipped: i64,
    pub order: i32,
    pub created_at: DateTime<Utc>,
}

impl SuiteResponse {
    pub fn from_entity(m: test_suite::Model) -> Self {
        SuiteResponse {
            id: m.id.into(),
            run_id: m.test_run_id.into(),
            name: m.name,
            status: ExecutionStatus::from_stored(&m.status),
            duration_ms: m.duration_ms,
            total: m.total,
            passed: m.passed,
            failed: m.failed,
            skipped: m.skipped,
            order: m.display_order,
            created_at: m.created_at,
        }
    }
}
