//! Dog Repository Implementation
//!
//! SQLite implementation of the DogRepository trait.
//! Maps between the joined `dog` rows and the domain Dog entity.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::{Executor, Sqlite, SqlitePool};

use crate::domain::{
    Dog, DogDraft, DogFilter, DogRepository, DogSort, DogStatus, LeavingReason, Page, PageRequest,
};
use crate::shared::error::AppError;

const SELECT_DOG: &str = r#"
    SELECT d.id, d.name, d.breed, d.supplier, d.badge_id, d.gender,
           d.birth_date, d.date_acquired, d.status_id, ds.status_name,
           d.leaving_date, d.leaving_reason_id, lr.reason_name,
           d.kennelling_characteristic, d.deleted, d.created_at, d.updated_at
    FROM dog d
    JOIN dog_status ds ON d.status_id = ds.id
    LEFT JOIN leaving_reason lr ON d.leaving_reason_id = lr.id
"#;

// ?1..?3 are search keys or NULL when the filter term is absent
const FILTER_CLAUSE: &str = r#"
    WHERE d.deleted = 0
      AND (?1 IS NULL OR instr(d.name_search, ?1) > 0)
      AND (?2 IS NULL OR instr(d.breed_search, ?2) > 0)
      AND (?3 IS NULL OR instr(d.supplier_search, ?3) > 0)
"#;

/// Database row for a dog joined with its status and leaving reason.
#[derive(Debug, sqlx::FromRow)]
struct DogRow {
    id: i64,
    name: String,
    breed: String,
    supplier: String,
    badge_id: Option<String>,
    gender: String,
    birth_date: NaiveDate,
    date_acquired: NaiveDate,
    status_id: i64,
    status_name: String,
    leaving_date: Option<NaiveDate>,
    leaving_reason_id: Option<i64>,
    reason_name: Option<String>,
    kennelling_characteristic: Option<String>,
    deleted: bool,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl DogRow {
    /// Convert database row to domain Dog entity.
    fn into_dog(self) -> Dog {
        let leaving_reason = match (self.leaving_reason_id, self.reason_name) {
            (Some(id), Some(name)) => Some(LeavingReason::new(id, name)),
            _ => None,
        };

        Dog {
            id: self.id,
            name: self.name,
            breed: self.breed,
            supplier: self.supplier,
            badge_id: self.badge_id,
            gender: self.gender,
            birth_date: self.birth_date,
            date_acquired: self.date_acquired,
            status: DogStatus::new(self.status_id, self.status_name),
            leaving_date: self.leaving_date,
            leaving_reason,
            kennelling_characteristic: self.kennelling_characteristic,
            deleted: self.deleted,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Case-folded form stored in the `*_search` columns and compared against
/// filter terms. Folding happens here because SQLite's LOWER is ASCII-only.
fn search_key(text: &str) -> String {
    text.to_lowercase()
}

async fn fetch_dog<'e, E>(executor: E, id: i64) -> Result<Option<DogRow>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let sql = format!("{} WHERE d.id = ?1 AND d.deleted = 0", SELECT_DOG);
    sqlx::query_as::<_, DogRow>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// SQLite dog repository implementation.
#[derive(Clone)]
pub struct SqliteDogRepository {
    pool: SqlitePool,
}

impl SqliteDogRepository {
    /// Create a new SqliteDogRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DogRepository for SqliteDogRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Dog>, AppError> {
        let row = fetch_dog(&self.pool, id).await?;
        Ok(row.map(DogRow::into_dog))
    }

    async fn find_page(
        &self,
        filter: &DogFilter,
        sort: DogSort,
        page: PageRequest,
    ) -> Result<Page<Dog>, AppError> {
        let name = filter.name.as_deref().map(search_key);
        let breed = filter.breed.as_deref().map(search_key);
        let supplier = filter.supplier.as_deref().map(search_key);

        // Count and page on the same connection; it goes back to the pool on drop
        let mut conn = self.pool.acquire().await?;

        let count_sql = format!("SELECT COUNT(*) FROM dog d {}", FILTER_CLAUSE);
        let total: i64 = sqlx::query_scalar(&count_sql)
            .bind(&name)
            .bind(&breed)
            .bind(&supplier)
            .fetch_one(&mut *conn)
            .await?;

        // Column and direction come from closed enums, never from user text
        let page_sql = format!(
            "{} {} ORDER BY {} {}, d.id ASC LIMIT ?4 OFFSET ?5",
            SELECT_DOG,
            FILTER_CLAUSE,
            sort.field.column(),
            sort.direction.as_sql()
        );
        let offset = i64::try_from(page.offset())
            .map_err(|_| AppError::BadRequest("Page offset out of range".into()))?;
        let rows = sqlx::query_as::<_, DogRow>(&page_sql)
            .bind(&name)
            .bind(&breed)
            .bind(&supplier)
            .bind(i64::from(page.size))
            .bind(offset)
            .fetch_all(&mut *conn)
            .await?;

        let content = rows.into_iter().map(DogRow::into_dog).collect();
        Ok(Page::new(content, page, total.max(0) as u64))
    }

    async fn create(&self, draft: &DogDraft) -> Result<Dog, AppError> {
        let mut tx = self.pool.begin().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO dog (name, breed, supplier, badge_id, gender, birth_date, date_acquired,
                             status_id, leaving_date, leaving_reason_id, kennelling_characteristic,
                             name_search, breed_search, supplier_search, deleted)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 0)
            RETURNING id
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.breed)
        .bind(&draft.supplier)
        .bind(&draft.badge_id)
        .bind(&draft.gender)
        .bind(draft.birth_date)
        .bind(draft.date_acquired)
        .bind(draft.status_id)
        .bind(draft.leaving_date)
        .bind(draft.leaving_reason_id)
        .bind(&draft.kennelling_characteristic)
        .bind(search_key(&draft.name))
        .bind(search_key(&draft.breed))
        .bind(search_key(&draft.supplier))
        .fetch_one(&mut *tx)
        .await?;

        let row = fetch_dog(&mut *tx, id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("Dog {} vanished after insert", id)))?;

        tx.commit().await?;

        Ok(row.into_dog())
    }

    async fn update(&self, id: i64, draft: &DogDraft) -> Result<Option<Dog>, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE dog
            SET name = ?2,
                breed = ?3,
                supplier = ?4,
                badge_id = ?5,
                gender = ?6,
                birth_date = ?7,
                date_acquired = ?8,
                status_id = ?9,
                leaving_date = ?10,
                leaving_reason_id = ?11,
                kennelling_characteristic = ?12,
                name_search = ?13,
                breed_search = ?14,
                supplier_search = ?15,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = ?1 AND deleted = 0
            "#,
        )
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.breed)
        .bind(&draft.supplier)
        .bind(&draft.badge_id)
        .bind(&draft.gender)
        .bind(draft.birth_date)
        .bind(draft.date_acquired)
        .bind(draft.status_id)
        .bind(draft.leaving_date)
        .bind(draft.leaving_reason_id)
        .bind(&draft.kennelling_characteristic)
        .bind(search_key(&draft.name))
        .bind(search_key(&draft.breed))
        .bind(search_key(&draft.supplier))
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let row = fetch_dog(&mut *tx, id).await?;
        tx.commit().await?;

        Ok(row.map(DogRow::into_dog))
    }

    async fn soft_delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE dog SET deleted = 1, updated_at = CURRENT_TIMESTAMP WHERE id = ? AND deleted = 0",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
