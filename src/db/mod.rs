//! Database module providing connection management, migrations, and queries.
//!
//! Write helpers are free functions generic over [`ConnectionTrait`] so the
//! ingestion pipeline can run them inside a transaction; reads hang off
//! [`DbPool`].

pub mod cases;
pub mod logs;
pub mod runs;
pub mod suites;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::error::{AppError, AppResult};
use crate::migration::Migrator;

/// Shared handle to the document store.
///
/// Cloning is cheap: all clones share one connection pool.
#[derive(Clone)]
pub struct DbPool {
    conn: DatabaseConnection,
}

impl DbPool {
    /// Connect using the given configuration.
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(config.connect_timeout)
            .acquire_timeout(config.connect_timeout)
            .sqlx_logging(false);

        let conn = Database::connect(options)
            .await
            .map_err(|e| AppError::Unavailable(format!("Failed to connect to database: {}", e)))?;

        Ok(DbPool { conn })
    }

    /// Fresh in-memory SQLite store with the schema applied.
    pub async fn in_memory() -> AppResult<Self> {
        let pool = Self::new(&DatabaseConfig::in_memory()).await?;
        pool.run_migrations().await?;
        Ok(pool)
    }

    /// Apply pending migrations.
    pub async fn run_migrations(&self) -> AppResult<()> {
        let pending = Migrator::get_pending_migrations(&self.conn).await?;
        if pending.is_empty() {
            info!("No pending migrations");
            return Ok(());
        }

        info!("{} migration(s) pending", pending.len());
        Migrator::up(&self.conn, None)
            .await
            .map_err(|e| AppError::Database(format!("Migration failed: {}", e)))?;

        Ok(())
    }

    /// Check that the store answers.
    pub async fn ping(&self) -> AppResult<()> {
        self.conn
            .ping()
            .await
            .map_err(|e| AppError::Unavailable(e.to_string()))
    }

    /// Get access to the connection for executing queries.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }
}
