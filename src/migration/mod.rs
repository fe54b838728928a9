//! SeaORM database migrations.
//!
//! Schema is built with the SeaQuery builder so the same migrations run on
//! PostgreSQL and on the in-memory SQLite used by tests.

pub use sea_orm_migration::prelude::*;

mod m20261017_000001_create_test_runs;
mod m20261017_000002_create_test_run_tags;
mod m20261017_000003_create_test_suites;
mod m20261017_000004_create_test_cases;
mod m20261017_000005_create_log_entries;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261017_000001_create_test_runs::Migration),
            Box::new(m20261017_000002_create_test_run_tags::Migration),
            Box::new(m20261017_000003_create_test_suites::Migration),
            Box::new(m20261017_000004_create_test_cases::Migration),
            Box::new(m20261017_000005_create_log_entries::Migration),
        ]
    }
}
