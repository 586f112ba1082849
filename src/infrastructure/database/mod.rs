//! Database Module
//!
//! SQLite connection pool and schema migrations.

pub mod migrations;

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;

use crate::config::DatabaseSettings;

pub use migrations::{
    applied_versions, current_version, latest_version, migrate, MigrationError, MigrationReport,
    MIGRATOR,
};

/// Create a SQLite connection pool.
///
/// The database file is created if missing. WAL mode plus a busy timeout
/// lets readers proceed while a writer holds the lock.
pub async fn create_pool(settings: &DatabaseSettings) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&settings.url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_millis(settings.busy_timeout_ms));

    SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout))
        .connect_with(options)
        .await
}

/// Run the embedded schema migrations.
pub async fn run_migrations(pool: &SqlitePool) -> Result<MigrationReport, MigrationError> {
    migrate(&MIGRATOR, pool).await
}
