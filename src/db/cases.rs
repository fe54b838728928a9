//! Database queries for test cases.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::entity::test_case::{self, ActiveModel as TestCaseActiveModel, Entity as TestCase};
use crate::error::{AppError, AppResult};
use crate::models::{CaseRecord, RecordId};

use super::DbPool;

/// Insert a case at the given position within its suite.
pub async fn insert_case<C: ConnectionTrait>(
    conn: &C,
    id: RecordId,
    run_id: Uuid,
    suite_id: Uuid,
    case: &CaseRecord,
    sequence: i32,
    now: DateTime<Utc>,
) -> AppResult<test_case::Model> {
    let model = TestCaseActiveModel {
        id: Set(id.as_uuid()),
        test_run_id: Set(run_id),
        test_suite_id: Set(suite_id),
        name: Set(case.name.clone()),
        class_name: Set(case.class_name.clone()),
        status: Set(case.status.as_str().to_string()),
        duration_ms: Set(case.duration_ms),
        error_message: Set(case.error_message.clone()),
        error_trace: Set(case.error_trace.clone()),
        retries: Set(case.retries),
        category: Set(case.category.clone()),
        author: Set(case.author.clone()),
        sequence: Set(sequence),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let result = model
        .insert(conn)
        .await
        .map_err(|e| AppError::Database(format!("Failed to insert test case: {}", e)))?;

    Ok(result)
}

impl DbPool {
    pub async fn get_case_by_id(&self, case_id: Uuid) -> AppResult<Option<test_case::Model>> {
        let result = TestCase::find_by_id(case_id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get test case: {}", e)))?;

        Ok(result)
    }

    pub async fn count_cases_by_suite_id(&self, suite_id: Uuid) -> AppResult<u64> {
        TestCase::find()
            .filter(test_case::Column::TestSuiteId.eq(suite_id))
            .count(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to count test cases: {}", e)))
    }

    /// Get every case of a run, grouped by suite in insertion order.
    pub async fn get_cases_by_run_id(&self, run_id: Uuid) -> AppResult<Vec<test_case::Model>> {
        let result = TestCase::find()
            .filter(test_case::Column::TestRunId.eq(run_id))
            .order_by_asc(test_case::Column::TestSuiteId)
            .order_by_asc(test_case::Column::Sequence)
            .order_by_asc(test_case::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get test cases: {}", e)))?;

        Ok(result)
    }
}
