//! Test case request and response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::record_id::RecordId;
use super::status::ExecutionStatus;
use crate::entity::test_case;

/// Case fields as received from clients, before validation.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CaseInput {
    /// Test name (required).
    pub name: Option<String>,
    pub class_name: Option<String>,
    pub status: Option<String>,
    pub duration_ms: Option<i64>,
    pub error_message: Option<String>,
    pub error_trace: Option<String>,
    /// Retry count (default 0).
    pub retries: Option<i64>,
    pub category: Option<String>,
    pub author: Option<String>,
}

/// Body of `POST /suites/{suite_id}/cases`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateCaseRequest {
    /// Must equal the run owning the suite.
    pub run_id: Option<String>,
    /// Must equal the suite id in the path.
    pub suite_id: Option<String>,
    #[serde(flatten)]
    pub case: CaseInput,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CaseResponse {
    pub id: RecordId,
    pub run_id: RecordId,
    pub suite_id: RecordId,
    pub name: String,
    pub class_name: Option<String>,
    pub status: ExecutionStatus,
    pub duration_ms: Option<i64>,
    pub error_message: Option<String>,
    pub error_trace: Option<String>,
    pub retries: i32,
    pub category: Option<String>,
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CaseResponse {
    pub fn from_entity(m: test_case::Model) -> Self {
        CaseResponse {
            id: m.id.into(),
            run_id: m.test_run_id.into(),
            suite_id: m.test_suite_id.into(),
            name: m.name,
            class_name: m.class_name,
            status: ExecutionStatus::from_stored(&m.status),
            duration_ms: m.duration_ms,
            error_message: m.error_message,
            error_trace: m.error_trace,
            retries: m.retries,
            category: m.category,
            author: m.author,
            created_at: m.created_at,
        }
    }
}
