//! Database queries for test suites.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::entity::test_suite::{self, ActiveModel as TestSuiteActiveModel, Entity as TestSuite};
use crate::error::{AppError, AppResult};
use crate::models::{RecordId, SuiteRecord};

use super::DbPool;

/// Insert a suite at the given display position.
pub async fn insert_suite<C: ConnectionTrait>(
    conn: &C,
    id: RecordId,
    run_id: Uuid,
    suite: &SuiteRecord,
    order: i32,
    now: DateTime<Utc>,
) -> AppResult<test_suite::Model> {
    let model = TestSuiteActiveModel {
        id: Set(id.as_uuid()),
        test_run_id: Set(run_id),
        name: Set(suite.name.clone()),
        status: Set(suite.status.as_str().to_string()),
        duration_ms: Set(suite.duration_ms),
        total: Set(suite.counts.total),
        passed: Set(suite.counts.passed),
        failed: Set(suite.counts.failed),
        skipped: Set(suite.counts.skipped),
        display_order: Set(order),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let result = model
        .insert(conn)
        .await
        .map_err(|e| AppError::Database(format!("Failed to insert test suite: {}", e)))?;

    Ok(result)
}

impl DbPool {
    /// Get a single test suite by ID.
    pub async fn get_suite_by_id(&self, suite_id: Uuid) -> AppResult<Option<test_suite::Model>> {
        let result = TestSuite::find_by_id(suite_id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get test suite: {}", e)))?;

        Ok(result)
    }

    /// Number of suites already stored for a run.
    pub async fn count_suites_by_run_id(&self, run_id: Uuid) -> AppResult<u64> {
        TestSuite::find()
            .filter(test_suite::Column::TestRunId.eq(run_id))
            .count(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to count test suites: {}", e)))
    }

    /// Suites of a run in display order. Equal positions fall back to
    /// creation order (UUIDv7 is time-ordered).
    pub async fn get_suites_by_run_id(&self, run_id: Uuid) -> AppResult<Vec<test_suite::Model>> {
        let result = TestSuite::find()
            .filter(test_suite::Column::TestRunId.eq(run_id))
            .order_by_asc(test_suite::Column::DisplayOrder)
            .order_by_asc(test_suite::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get test suites: {}", e)))?;

        Ok(result)
    }
}
