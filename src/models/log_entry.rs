//! Log entry request and response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::record_id::RecordId;
use super::status::LogLevel;
use crate::entity::log_entry;

/// Log fields as received from clients, before validation.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct LogInput {
    /// INFO, WARN, ERROR, DEBUG or STEP (default INFO).
    pub level: Option<String>,
    /// Log line (required).
    pub message: Option<String>,
    /// Defaults to the time the entry is stored.
    pub timestamp: Option<DateTime<Utc>>,
    pub step: Option<String>,
    pub attachment_url: Option<String>,
}

/// Body of `POST /cases/{case_id}/logs`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateLogRequest {
    /// Must equal the run owning the case.
    pub run_id: Option<String>,
    /// Must equal the case id in the path.
    pub case_id: Option<String>,
    #[serde(flatten)]
    pub log: LogInput,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LogEntryResponse {
    pub id: RecordId,
    pub run_id: RecordId,
    pub case_id: RecordId,
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub step: Option<String>,
    pub attachment_url: Option<String>,
}

impl LogEntryResponse {
    pub fn from_entity(m: log_entry::Model) -> Self {
        LogEntryResponse {
            id: m.id.into(),
            run_id: m.test_run_id.into(),
            case_id: m.test_case_id.into(),
            level: LogLevel::from_stored(&m.level),
            message: m.message,
            timestamp: m.timestamp,
            step: m.step,
            attachment_url: m.attachment_url,
        }
    }
}
