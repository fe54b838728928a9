//! Migration: Create test_run_tags table.

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
                    .table(TestRunTags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TestRunTags::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(TestRunTags::TestRunId).uuid().not_null())
                    .col(ColumnDef::new(TestRunTags::Position).integer().not_null())
                    .col(ColumnDef::new(TestRunTags::Tag).string_len(255).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_test_run_tags_test_run_id")
                            .from(TestRunTags::Table, TestRunTags::TestRunId)
                            .to(TestRuns::Table, TestRuns::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Tag filter on run listing
        manager
            .create_index(
                Index::create()
                    .name("idx_test_run_tags_tag")
                    .table(TestRunTags::Table)
                    .col(TestRunTags::Tag)
                    .col(TestRunTags::TestRunId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_test_run_tags_test_run_id")
                    .table(TestRunTags::Table)
                    .col(TestRunTags::TestRunId)
                    .col(TestRunTags::Position)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TestRunTags::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TestRunTags {
    Table,
    Id,
    TestRunId,
    Position,
    Tag,
}
