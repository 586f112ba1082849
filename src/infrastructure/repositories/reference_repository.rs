//! Reference Data Repository Implementations
//!
//! SQLite implementations for the `dog_status` and `leaving_reason`
//! lookup tables. Both are seeded by migrations and read-only at runtime.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::{DogStatus, DogStatusRepository, LeavingReason, LeavingReasonRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct StatusRow {
    id: i64,
    status_name: String,
}

impl From<StatusRow> for DogStatus {
    fn from(row: StatusRow) -> Self {
        DogStatus::new(row.id, row.status_name)
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ReasonRow {
    id: i64,
    reason_name: String,
}

impl From<ReasonRow> for LeavingReason {
    fn from(row: ReasonRow) -> Self {
        LeavingReason::new(row.id, row.reason_name)
    }
}

/// SQLite dog status repository.
#[derive(Clone)]
pub struct SqliteDogStatusRepository {
    pool: SqlitePool,
}

impl SqliteDogStatusRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DogStatusRepository for SqliteDogStatusRepository {
    async fn find_all(&self) -> Result<Vec<DogStatus>, AppError> {
        let rows = sqlx::query_as::<_, StatusRow>(
            "SELECT id, status_name FROM dog_status ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(DogStatus::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<DogStatus>, AppError> {
        let row = sqlx::query_as::<_, StatusRow>(
            "SELECT id, status_name FROM dog_status WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(DogStatus::from))
    }
}

/// SQLite leaving reason repository.
#[derive(Clone)]
pub struct SqliteLeavingReasonRepository {
    pool: SqlitePool,
}

impl SqliteLeavingReasonRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeavingReasonRepository for SqliteLeavingReasonRepository {
    async fn find_all(&self) -> Result<Vec<LeavingReason>, AppError> {
        let rows = sqlx::query_as::<_, ReasonRow>(
            "SELECT id, reason_name FROM leaving_reason ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(LeavingReason::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<LeavingReason>, AppError> {
        let row = sqlx::query_as::<_, ReasonRow>(
            "SELECT id, reason_name FROM leaving_reason WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(LeavingReason::from))
    }
}
