//! Migration: Create test_cases table.

use sea_orm_migration::prelude::*;

use super::m20261017_000001_create_test_runs::TestRuns;
use super::m20261017_000003_create_test_suites::TestSuites;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TestCases::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TestCases::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(TestCases::TestRunId).uuid().not_null())
                    .col(ColumnDef::new(TestCases::TestSuiteId).uuid().not_null())
                    .col(ColumnDef::new(TestCases::Name).string_len(1000).not_null())
                    .col(ColumnDef::new(TestCases::ClassName).string_len(1000))
                    .col(ColumnDef::new(TestCases::Status).string_len(20).not_null().default("running"))
                    .col(ColumnDef::new(TestCases::DurationMs).big_integer())
                    .col(ColumnDef::new(TestCases::ErrorMessage).text())
                    .col(ColumnDef::new(TestCases::ErrorTrace).text())
                    .col(ColumnDef::new(TestCases::Retries).integer().not_null().default(0))
                    .col(ColumnDef::new(TestCases::Category).string_len(255))
                    .col(ColumnDef::new(TestCases::Author).string_len(255))
                    .col(ColumnDef::new(TestCases::Sequence).integer().not_null().default(0))
                    .col(ColumnDef::new(TestCases::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(TestCases::UpdatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_test_cases_test_suite_id")
                            .from(TestCases::Table, TestCases::TestSuiteId)
                            .to(TestSuites::Table, TestSuites::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_test_cases_test_run_id")
                            .from(TestCases::Table, TestCases::TestRunId)
                            .to(TestRuns::Table, TestRuns::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Ordering within suite
        manager
            .create_index(
                Index::create()
                    .name("idx_test_cases_suite_sequence")
                    .table(TestCases::Table)
                    .col(TestCases::TestSuiteId)
                    .col(TestCases::Sequence)
                    .to_owned(),
            )
            .await?;

        // Whole-run reads
        manager
            .create_index(
                Index::create()
                    .name("idx_test_cases_run_suite_sequence")
                    .table(TestCases::Table)
                    .col(TestCases::TestRunId)
                    .col(TestCases::TestSuiteId)
                    .col(TestCases::Sequence)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TestCases::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(super) enum TestCases {
    Table,
    Id,
    TestRunId,
    TestSuiteId,
    Name,
    ClassName,
    Status,
    DurationMs,
    ErrorMessage,
    ErrorTrace,
    Retries,
    Category,
    Author,
    Sequence,
    CreatedAt,
    UpdatedAt,
}
