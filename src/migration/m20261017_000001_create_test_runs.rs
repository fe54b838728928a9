//! Migration: Create test_runs table.
//!
//! One row per test campaign execution, carrying the roll-up counters.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TestRuns::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TestRuns::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(TestRuns::Name).string_len(500).not_null())
                    .col(ColumnDef::new(TestRuns::Environment).string_len(255))
                    .col(ColumnDef::new(TestRuns::Branch).string_len(255))
                    .col(ColumnDef::new(TestRuns::Build).string_len(255))
                    .col(ColumnDef::new(TestRuns::Status).string_len(20).not_null().default("running"))
                    .col(ColumnDef::new(TestRuns::StartedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(TestRuns::FinishedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(TestRuns::DurationMs).big_integer())
                    .col(ColumnDef::new(TestRuns::Total).big_integer().not_null().default(0))
                    .col(ColumnDef::new(TestRuns::Passed).big_integer().not_null().default(0))
                    .col(ColumnDef::new(TestRuns::Failed).big_integer().not_null().default(0))
                    .col(ColumnDef::new(TestRuns::Skipped).big_integer().not_null().default(0))
                    .col(ColumnDef::new(TestRuns::Blocked).big_integer().not_null().default(0))
                    .col(ColumnDef::new(TestRuns::Platform).string_len(255))
                    .col(ColumnDef::new(TestRuns::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(TestRuns::UpdatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        // Listing sorts by start time, newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_test_runs_started_at")
                    .table(TestRuns::Table)
                    .col(TestRuns::StartedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_test_runs_status")
                    .table(TestRuns::Table)
                    .col(TestRuns::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TestRuns::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(super) enum TestRuns {
    Table,
    Id,
    Name,
    Environment,
    Branch,
    Build,
    Status,
    StartedAt,
    FinishedAt,
    DurationMs,
    Total,
    Passed,
    Failed,
    Skipped,
    Blocked,
    Platform,
    CreatedAt,
    UpdatedAt,
}
