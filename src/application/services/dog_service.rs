//! Dog Service
//!
//! Registry operations on dogs. Status and leaving reason references are
//! resolved against the reference tables before anything is written.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    Dog, DogDraft, DogFilter, DogRepository, DogSort, DogStatusRepository,
    LeavingReasonRepository, Page, PageRequest,
};
use crate::shared::error::AppError;

/// Dog service trait
#[async_trait]
pub trait DogService: Send + Sync {
    /// Register a new dog
    async fn create_dog(&self, draft: DogDraft) -> Result<Dog, DogError>;

    /// Get a dog by ID
    async fn get_dog(&self, id: i64) -> Result<Dog, DogError>;

    /// List dogs, optionally filtered
    async fn list_dogs(
        &self,
        filter: DogFilter,
        sort: DogSort,
        page: PageRequest,
    ) -> Result<Page<Dog>, DogError>;

    /// Replace every field of a dog
    async fn update_dog(&self, id: i64, draft: DogDraft) -> Result<Dog, DogError>;

    /// Soft-delete a dog
    async fn delete_dog(&self, id: i64) -> Result<(), DogError>;
}

/// Dog service errors
#[derive(Debug, thiserror::Error)]
pub enum DogError {
    #[error("Dog not found with id: {0}")]
    NotFound(i64),

    #[error("Status not found with id: {0}")]
    StatusNotFound(i64),

    #[error("Leaving reason not found with id: {0}")]
    LeavingReasonNotFound(i64),

    #[error(transparent)]
    Repository(#[from] AppError),
}

impl From<DogError> for AppError {
    fn from(err: DogError) -> Self {
        match err {
            DogError::Repository(e) => e,
            other => AppError::NotFound(other.to_string()),
        }
    }
}

/// DogService implementation
pub struct DogServiceImpl<D, S, R>
where
    D: DogRepository,
    S: DogStatusRepository,
    R: LeavingReasonRepository,
{
    dog_repo: Arc<D>,
    status_repo: Arc<S>,
    reason_repo: Arc<R>,
}

impl<D, S, R> DogServiceImpl<D, S, R>
where
    D: DogRepository,
    S: DogStatusRepository,
    R: LeavingReasonRepository,
{
    pub fn new(dog_repo: Arc<D>, status_repo: Arc<S>, reason_repo: Arc<R>) -> Self {
        Self {
            dog_repo,
            status_repo,
            reason_repo,
        }
    }

    async fn check_references(&self, draft: &DogDraft) -> Result<(), DogError> {
        if self.status_repo.find_by_id(draft.status_id).await?.is_none() {
            return Err(DogError::StatusNotFound(draft.status_id));
        }

        if let Some(reason_id) = draft.leaving_reason_id {
            if self.reason_repo.find_by_id(reason_id).await?.is_none() {
                return Err(DogError::LeavingReasonNotFound(reason_id));
            }
        }

        Ok(())
    }
}

#[async_trait]
impl<D, S, R> DogService for DogServiceImpl<D, S, R>
where
    D: DogRepository + 'static,
    S: DogStatusRepository + 'static,
    R: LeavingReasonRepository + 'static,
{
    async fn create_dog(&self, draft: DogDraft) -> Result<Dog, DogError> {
        self.check_references(&draft).await?;

        let dog = self.dog_repo.create(&draft).await?;
        tracing::info!(dog_id = dog.id, name = %dog.name, "Dog registered");

        Ok(dog)
    }

    async fn get_dog(&self, id: i64) -> Result<Dog, DogError> {
        self.dog_repo
            .find_by_id(id)
            .await?
            .ok_or(DogError::NotFound(id))
    }

    async fn list_dogs(
        &self,
        filter: DogFilter,
        sort: DogSort,
        page: PageRequest,
    ) -> Result<Page<Dog>, DogError> {
        if filter.is_empty() {
            tracing::debug!(page = page.page, size = page.size, "Listing dogs");
        } else {
            tracing::debug!(?filter, page = page.page, size = page.size, "Searching dogs");
        }

        Ok(self.dog_repo.find_page(&filter, sort, page).await?)
    }

    async fn update_dog(&self, id: i64, draft: DogDraft) -> Result<Dog, DogError> {
        if self.dog_repo.find_by_id(id).await?.is_none() {
            return Err(DogError::NotFound(id));
        }

        self.check_references(&draft).await?;

        let dog = self
            .dog_repo
            .update(id, &draft)
            .await?
            .ok_or(DogError::NotFound(id))?;
        tracing::info!(dog_id = id, "Dog updated");

        Ok(dog)
    }

    async fn delete_dog(&self, id: i64) -> Result<(), DogError> {
        if !self.dog_repo.soft_delete(id).await? {
            return Err(DogError::NotFound(id));
        }

        tracing::info!(dog_id = id, "Dog deleted");
        Ok(())
    }
}
