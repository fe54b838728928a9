//! Database queries for test runs and their tags.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::sea_query::Query;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::entity::test_run::{self, ActiveModel as TestRunActiveModel, Entity as TestRun};
use crate::entity::test_run_tag::{self, ActiveModel as TagActiveModel, Entity as TestRunTag};
use crate::error::{AppError, AppResult};
use crate::models::{RecordId, RunCounts, RunFilter, RunRecord, RunUpdate};

use super::DbPool;

/// Insert a run together with its tags.
pub async fn insert_run<C: ConnectionTrait>(
    conn: &C,
    id: RecordId,
    run: &RunRecord,
    now: DateTime<Utc>,
) -> AppResult<test_run::Model> {
    let model = TestRunActiveModel {
        id: Set(id.as_uuid()),
        name: Set(run.name.clone()),
        environment: Set(run.environment.clone()),
        branch: Set(run.branch.clone()),
        build: Set(run.build.clone()),
        status: Set(run.status.as_str().to_string()),
        started_at: Set(Some(run.started_at)),
        finished_at: Set(run.finished_at),
        duration_ms: Set(run.duration_ms),
        total: Set(run.counts.total),
        passed: Set(run.counts.passed),
        failed: Set(run.counts.failed),
        skipped: Set(run.counts.skipped),
        blocked: Set(run.counts.blocked),
        platform: Set(run.platform.clone()),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let result = model
        .insert(conn)
        .await
        .map_err(|e| AppError::Database(format!("Failed to insert test run: {}", e)))?;

    if !run.tags.is_empty() {
        let tags = run
            .tags
            .iter()
            .enumerate()
            .map(|(position, tag)| TagActiveModel {
                id: Set(Uuid::now_v7()),
                test_run_id: Set(result.id),
                position: Set(position as i32),
                tag: Set(tag.clone()),
            });

        TestRunTag::insert_many(tags)
            .exec(conn)
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert run tags: {}", e)))?;
    }

    Ok(result)
}

/// Overwrite the roll-up counters of a run.
pub async fn update_run_counts<C: ConnectionTrait>(
    conn: &C,
    run_id: Uuid,
    counts: RunCounts,
    now: DateTime<Utc>,
) -> AppResult<test_run::Model> {
    let active = TestRunActiveModel {
        id: Set(run_id),
        total: Set(counts.total),
        passed: Set(counts.passed),
        failed: Set(counts.failed),
        skipped: Set(counts.skipped),
        blocked: Set(counts.blocked),
        updated_at: Set(now),
        ..Default::default()
    };

    active
        .update(conn)
        .await
        .map_err(|e| AppError::Database(format!("Failed to update run counters: {}", e)))
}

impl DbPool {
    /// Get a run by ID.
    pub async fn get_run_by_id(&self, id: Uuid) -> AppResult<Option<test_run::Model>> {
        let result = TestRun::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get test run: {}", e)))?;

        Ok(result)
    }

    /// Tags of one run, in the order they were supplied.
    pub async fn get_run_tags(&self, run_id: Uuid) -> AppResult<Vec<String>> {
        let tags = TestRunTag::find()
            .filter(test_run_tag::Column::TestRunId.eq(run_id))
            .order_by_asc(test_run_tag::Column::Position)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get run tags: {}", e)))?;

        Ok(tags.into_iter().map(|t| t.tag).collect())
    }

    /// Batch get tags for multiple runs.
    pub async fn get_tags_by_run_ids(
        &self,
        run_ids: &[Uuid],
    ) -> AppResult<HashMap<Uuid, Vec<String>>> {
        if run_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let tags = TestRunTag::find()
            .filter(test_run_tag::Column::TestRunId.is_in(run_ids.to_vec()))
            .order_by_asc(test_run_tag::Column::TestRunId)
            .order_by_asc(test_run_tag::Column::Position)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get run tags: {}", e)))?;

        let mut map: HashMap<Uuid, Vec<String>> = HashMap::new();
        for tag in tags {
            map.entry(tag.test_run_id).or_default().push(tag.tag);
        }

        Ok(map)
    }

    /// List runs, newest start first.
    pub async fn list_runs(&self, filter: &RunFilter) -> AppResult<Vec<test_run::Model>> {
        let mut select = TestRun::find();

        if let Some(status) = filter.status {
            select = select.filter(test_run::Column::Status.eq(status.as_str()));
        }

        if let Some(ref tag) = filter.tag {
            select = select.filter(
                test_run::Column::Id.in_subquery(
                    Query::select()
                        .column(test_run_tag::Column::TestRunId)
                        .from(TestRunTag)
                        .and_where(test_run_tag::Column::Tag.eq(tag.clone()))
                        .to_owned(),
                ),
            );
        }

        let runs = select
            .order_by_desc(test_run::Column::StartedAt)
            .order_by_desc(test_run::Column::Id)
            .limit(filter.limit)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list test runs: {}", e)))?;

        Ok(runs)
    }

    /// Apply a finish update. Only fields present in the update change.
    pub async fn finish_run(
        &self,
        id: Uuid,
        update: &RunUpdate,
        now: DateTime<Utc>,
    ) -> AppResult<test_run::Model> {
        let run = self
            .get_run_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Run {}", id)))?;

        let mut active: TestRunActiveModel = run.into();
        active.finished_at = Set(Some(update.finished_at));
        if let Some(status) = update.status {
            active.status = Set(status.as_str().to_string());
        }
        if let Some(duration_ms) = update.duration_ms {
            active.duration_ms = Set(Some(duration_ms));
        }
        if let Some(total) = update.total {
            active.total = Set(total);
        }
        if let Some(passed) = update.passed {
            active.passed = Set(passed);
        }
        if let Some(failed) = update.failed {
            active.failed = Set(failed);
        }
        if let Some(skipped) = update.skipped {
            active.skipped = Set(skipped);
        }
        if let Some(blocked) = update.blocked {
            active.blocked = Set(blocked);
        }
        active.updated_at = Set(now);

        let result = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to finish test run: {}", e)))?;

        Ok(result)
    }
}
