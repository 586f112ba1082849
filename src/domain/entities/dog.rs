//! Dog entity and repository trait.
//!
//! Maps to the `dog` table in the database schema.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use super::{DogStatus, LeavingReason};
use crate::domain::value_objects::{Page, PageRequest, SortDirection};
use crate::shared::error::AppError;

/// A dog registered with the unit, with its status and leaving reason
/// resolved.
///
/// Maps to the `dog` table joined with `dog_status` and `leaving_reason`:
/// - id: INTEGER PRIMARY KEY AUTOINCREMENT
/// - name, breed, supplier, gender: TEXT NOT NULL
/// - badge_id: TEXT NULL
/// - birth_date, date_acquired: DATE NOT NULL
/// - status_id: INTEGER NOT NULL REFERENCES dog_status(id)
/// - leaving_date: DATE NULL
/// - leaving_reason_id: INTEGER NULL REFERENCES leaving_reason(id)
/// - kennelling_characteristic: TEXT NULL
/// - deleted: BOOLEAN NOT NULL DEFAULT 0
/// - created_at, updated_at: TIMESTAMP NOT NULL
#[derive(Debug, Clone, PartialEq)]
pub struct Dog {
    pub id: i64,
    pub name: String,
    pub breed: String,
    pub supplier: String,
    pub badge_id: Option<String>,
    pub gender: String,
    pub birth_date: NaiveDate,
    pub date_acquired: NaiveDate,
    pub status: DogStatus,
    pub leaving_date: Option<NaiveDate>,
    pub leaving_reason: Option<LeavingReason>,
    pub kennelling_characteristic: Option<String>,
    pub deleted: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Validated input for creating or fully replacing a dog.
///
/// References to status and leaving reason are ids; the service checks
/// they exist before handing the draft to the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct DogDraft {
    pub name: String,
    pub breed: String,
    pub supplier: String,
    pub badge_id: Option<String>,
    pub gender: String,
    pub birth_date: NaiveDate,
    pub date_acquired: NaiveDate,
    pub status_id: i64,
    pub leaving_date: Option<NaiveDate>,
    pub leaving_reason_id: Option<i64>,
    pub kennelling_characteristic: Option<String>,
}

/// Case-insensitive substring filters, combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DogFilter {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub supplier: Option<String>,
}

impl DogFilter {
    /// Build a filter, dropping blank terms.
    pub fn new(name: Option<String>, breed: Option<String>, supplier: Option<String>) -> Self {
        fn keep(term: Option<String>) -> Option<String> {
            term.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
        }

        Self {
            name: keep(name),
            breed: keep(breed),
            supplier: keep(supplier),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.breed.is_none() && self.supplier.is_none()
    }
}

/// Columns a dog listing can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DogSortField {
    #[default]
    Id,
    Name,
    Breed,
    Supplier,
    Gender,
    BirthDate,
    DateAcquired,
    StatusId,
}

impl DogSortField {
    /// Parse the camelCase property name used on the wire.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "breed" => Some(Self::Breed),
            "supplier" => Some(Self::Supplier),
            "gender" => Some(Self::Gender),
            "birthDate" => Some(Self::BirthDate),
            "dateAcquired" => Some(Self::DateAcquired),
            "statusId" => Some(Self::StatusId),
            _ => None,
        }
    }

    /// Qualified column name in the `dog d` query alias.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Id => "d.id",
            Self::Name => "d.name",
            Self::Breed => "d.breed",
            Self::Supplier => "d.supplier",
            Self::Gender => "d.gender",
            Self::BirthDate => "d.birth_date",
            Self::DateAcquired => "d.date_acquired",
            Self::StatusId => "d.status_id",
        }
    }
}

/// Ordering for a dog listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DogSort {
    pub field: DogSortField,
    pub direction: SortDirection,
}

impl DogSort {
    /// Parse `field[,asc|desc]`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.splitn(2, ',');
        let field = DogSortField::parse(parts.next()?)?;
        let direction = match parts.next() {
            Some(dir) => SortDirection::parse(dir)?,
            None => SortDirection::Asc,
        };
        Some(Self { field, direction })
    }
}

/// Repository trait for Dog data access operations.
///
/// Every read excludes soft-deleted rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DogRepository: Send + Sync {
    /// Find a non-deleted dog by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Dog>, AppError>;

    /// Page through non-deleted dogs matching the filter.
    async fn find_page(
        &self,
        filter: &DogFilter,
        sort: DogSort,
        page: PageRequest,
    ) -> Result<Page<Dog>, AppError>;

    /// Insert a new dog and return it with relations resolved.
    async fn create(&self, draft: &DogDraft) -> Result<Dog, AppError>;

    /// Overwrite every field of a non-deleted dog. Returns `None` when
    /// there is no such dog.
    async fn update(&self, id: i64, draft: &DogDraft) -> Result<Option<Dog>, AppError>;

    /// Mark a dog as deleted. Returns false when there was no
    /// non-deleted dog with that id.
    async fn soft_delete(&self, id: i64) -> Result<bool, AppError>;
}
