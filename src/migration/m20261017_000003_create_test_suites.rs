//! Migration: Create test_suites table.

use sea_orm_migration::prelude::*;

use super::m20261017_000001_create_test_runs::TestRuns;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TestSuites::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TestSuites::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(TestSuites::TestRunId).uuid().not_null())
                    .col(ColumnDef::new(TestSuites::Name).string_len(500).not_null())
                    .col(ColumnDef::new(TestSuites::Status).string_len(20).not_null().default("running"))
                    .col(ColumnDef::new(TestSuites::DurationMs).big_integer())
                    .col(ColumnDef::new(TestSuites::Total).big_integer().not_null().default(0))
                    .col(ColumnDef::new(TestSuites::Passed).big_integer().not_null().default(0))
                    .col(ColumnDef::new(TestSuites::Failed).big_integer().not_null().default(0))
                    .col(ColumnDef::new(TestSuites::Skipped).big_integer().not_null().default(0))
                    .col(ColumnDef::new(TestSuites::DisplayOrder).integer().not_null().default(0))
                    .col(ColumnDef::new(TestSuites::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(TestSuites::UpdatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_test_suites_test_run_id")
                            .from(TestSuites::Table, TestSuites::TestRunId)
                            .to(TestRuns::Table, TestRuns::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Suites are read per run in display order
        manager
            .create_index(
                Index::create()
                    .name("idx_test_suites_run_order")
                    .table(TestSuites::Table)
                    .col(TestSuites::TestRunId)
                    .col(TestSuites::DisplayOrder)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TestSuites::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(super) enum TestSuites {
    Table,
    Id,
    TestRunId,
    Name,
    Status,
    DurationMs,
    Total,
    Passed,
    Failed,
    Skipped,
    DisplayOrder,
    CreatedAt,
    UpdatedAt,
}
