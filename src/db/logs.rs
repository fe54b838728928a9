//! Database queries for log entries.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::entity::log_entry::{self, ActiveModel as LogEntryActiveModel, Entity as LogEntry};
use crate::error::{AppError, AppResult};
use crate::models::{LogRecord, RecordId};

use super::DbPool;

/// Insert a log entry at the given position within its case.
pub async fn insert_log_entry<C: ConnectionTrait>(
    conn: &C,
    id: RecordId,
    run_id: Uuid,
    case_id: Uuid,
    log: &LogRecord,
    sequence: i32,
    now: DateTime<Utc>,
) -> AppResult<log_entry::Model> {
    let model = LogEntryActiveModel {
        id: Set(id.as_uuid()),
        test_run_id: Set(run_id),
        test_case_id: Set(case_id),
        level: Set(log.level.as_str().to_string()),
        message: Set(log.message.clone()),
        timestamp: Set(log.timestamp),
        step: Set(log.step.clone()),
        attachment_url: Set(log.attachment_url.clone()),
        sequence: Set(sequence),
        created_at: Set(now),
    };

    let result = model
        .insert(conn)
        .await
        .map_err(|e| AppError::Database(format!("Failed to insert log entry: {}", e)))?;

    Ok(result)
}

impl DbPool {
    pub async fn count_logs_by_case_id(&self, case_id: Uuid) -> AppResult<u64> {
        LogEntry::find()
            .filter(log_entry::Column::TestCaseId.eq(case_id))
            .count(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to count log entries: {}", e)))
    }

    /// Get every log entry of a run, grouped by case, oldest first per case.
    /// Entries sharing a timestamp keep their insertion order.
    pub async fn get_logs_by_run_id(&self, run_id: Uuid) -> AppResult<Vec<log_entry::Model>> {
        let result = LogEntry::find()
            .filter(log_entry::Column::TestRunId.eq(run_id))
            .order_by_asc(log_entry::Column::TestCaseId)
            .order_by_asc(log_entry::Column::Timestamp)
            .order_by_asc(log_entry::Column::Sequence)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get log entries: {}", e)))?;

        Ok(result)
    }
}
