//! Migration: Create log_entries table.

use sea_orm_migration::prelude::*;

use super::m20261017_000001_create_test_runs::TestRuns;
use super::m20261017_000004_create_test_cases::TestCases;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LogEntries::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(LogEntries::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(LogEntries::TestRunId).uuid().not_null())
                    .col(ColumnDef::new(LogEntries::TestCaseId).uuid().not_null())
                    .col(ColumnDef::new(LogEntries::Level).string_len(10).not_null().default("INFO"))
                    .col(ColumnDef::new(LogEntries::Message).text().not_null())
                    .col(ColumnDef::new(LogEntries::Timestamp).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(LogEntries::Step).string_len(500))
                    .col(ColumnDef::new(LogEntries::AttachmentUrl).string_len(2000))
                    .col(ColumnDef::new(LogEntries::Sequence).integer().not_null().default(0))
                    .col(ColumnDef::new(LogEntries::CreatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_log_entries_test_case_id")
                            .from(LogEntries::Table, LogEntries::TestCaseId)
                            .to(TestCases::Table, TestCases::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_log_entries_test_run_id")
                            .from(LogEntries::Table, LogEntries::TestRunId)
                            .to(TestRuns::Table, TestRuns::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Logs are read per case in timestamp order
        manager
            .create_index(
                Index::create()
                    .name("idx_log_entries_case_timestamp")
                    .table(LogEntries::Table)
                    .col(LogEntries::TestCaseId)
                    .col(LogEntries::Timestamp)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_log_entries_run_case_timestamp")
                    .table(LogEntries::Table)
                    .col(LogEntries::TestRunId)
                    .col(LogEntries::TestCaseId)
                    .col(LogEntries::Timestamp)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LogEntries::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LogEntries {
    Table,
    Id,
    TestRunId,
    TestCaseId,
    Level,
    Message,
    Timestamp,
    Step,
    AttachmentUrl,
    Sequence,
    CreatedAt,
}
