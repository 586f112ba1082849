//! DogStatus entity and repository trait.
//!
//! Maps to the `dog_status` reference table.

use async_trait::async_trait;

use crate::shared::error::AppError;

/// Where a dog is in its career ("In Training", "In Service", ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DogStatus {
    pub id: i64,
    pub status_name: String,
}

impl DogStatus {
    pub fn new(id: i64, status_name: impl Into<String>) -> Self {
        Self {
            id,
            status_name: status_name.into(),
        }
    }
}

/// Repository trait for the status lookup table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DogStatusRepository: Send + Sync {
    /// All statuses ordered by id.
    async fn find_all(&self) -> Result<Vec<DogStatus>, AppError>;

    /// Find a status by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<DogStatus>, AppError>;
}
