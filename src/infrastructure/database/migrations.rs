//! Schema Migrations
//!
//! The versioned SQL scripts under `migrations/` are embedded at build time
//! and applied with sqlx's migrator, which records every applied script in
//! `_sqlx_migrations` along with its checksum. An edited script or a recorded
//! version this build does not know aborts the run.
//!
//! Versions are also only ever applied in increasing order: a pending script
//! whose version is below the latest applied one is refused before anything
//! runs.

use std::collections::HashSet;

use sqlx::migrate::{MigrateError, Migration, Migrator};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::infrastructure::metrics;

/// Scripts shipped with this build.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Outcome of a migration run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    /// Versions applied by this run, in order
    pub applied: Vec<i64>,

    /// Highest applied version after the run
    pub current_version: Option<i64>,
}

impl MigrationReport {
    pub fn applied_count(&self) -> usize {
        self.applied.len()
    }
}

/// Migration errors. All of them are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Migrate(#[from] MigrateError),

    #[error("Migration {version} is pending but the database is already at version {latest}")]
    OutOfOrder { version: i64, latest: i64 },
}

/// Apply every pending migration of `migrator`.
///
/// Each script runs in its own transaction together with its record row,
/// so a failing script leaves nothing behind and stops the run. Running the
/// same set again applies nothing.
pub async fn migrate(
    migrator: &Migrator,
    pool: &SqlitePool,
) -> Result<MigrationReport, MigrationError> {
    let applied: HashSet<i64> = applied_versions(pool).await?.into_iter().collect();
    let pending = pending_migrations(migrator, &applied);

    if let Some(latest) = applied.iter().copied().max() {
        if let Some(early) = pending.iter().find(|m| m.version < latest) {
            return Err(MigrationError::OutOfOrder {
                version: early.version,
                latest,
            });
        }
    }

    debug!(pending = pending.len(), "Running schema migrations");
    migrator.run(pool).await?;

    for migration in &pending {
        metrics::record_migration_applied();
        info!(
            version = migration.version,
            description = %migration.description,
            "Applied migration"
        );
    }

    let report = MigrationReport {
        applied: pending.iter().map(|m| m.version).collect(),
        current_version: current_version(pool).await?,
    };

    info!(
        applied = report.applied_count(),
        current_version = ?report.current_version,
        "Schema migrations complete"
    );

    Ok(report)
}

/// Versions recorded in `_sqlx_migrations`, ascending. Empty on a database
/// never migrated.
pub async fn applied_versions(pool: &SqlitePool) -> Result<Vec<i64>, sqlx::Error> {
    if !record_table_exists(pool).await? {
        return Ok(Vec::new());
    }

    sqlx::query_scalar("SELECT version FROM _sqlx_migrations ORDER BY version")
        .fetch_all(pool)
        .await
}

/// Highest successfully applied version, or `None` on a database never migrated.
pub async fn current_version(pool: &SqlitePool) -> Result<Option<i64>, sqlx::Error> {
    if !record_table_exists(pool).await? {
        return Ok(None);
    }

    sqlx::query_scalar("SELECT MAX(version) FROM _sqlx_migrations WHERE success = 1")
        .fetch_one(pool)
        .await
}

/// Newest version `migrator` knows about.
pub fn latest_version(migrator: &Migrator) -> Option<i64> {
    migrator
        .iter()
        .filter(|m| !m.migration_type.is_down_migration())
        .map(|m| m.version)
        .max()
}

fn pending_migrations<'a>(migrator: &'a Migrator, applied: &HashSet<i64>) -> Vec<&'a Migration> {
    migrator
        .iter()
        .filter(|m| !m.migration_type.is_down_migration())
        .filter(|m| !applied.contains(&m.version))
        .collect()
}

async fn record_table_exists(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    let exists: i64 = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = '_sqlx_migrations')",
    )
    .fetch_one(pool)
    .await?;

    Ok(exists != 0)
}
