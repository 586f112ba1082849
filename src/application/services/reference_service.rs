//! Reference Data Service
//!
//! Read-only access to the seeded dog statuses and leaving reasons.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{DogStatus, DogStatusRepository, LeavingReason, LeavingReasonRepository};
use crate::shared::error::AppError;

#[async_trait]
pub trait ReferenceDataService: Send + Sync {
    /// All dog statuses, ordered by id
    async fn list_statuses(&self) -> Result<Vec<DogStatus>, AppError>;

    /// All leaving reasons, ordered by id
    async fn list_leaving_reasons(&self) -> Result<Vec<LeavingReason>, AppError>;
}

pub struct ReferenceDataServiceImpl<S, R>
where
    S: DogStatusRepository,
    R: LeavingReasonRepository,
{
    status_repo: Arc<S>,
    reason_repo: Arc<R>,
}

impl<S, R> ReferenceDataServiceImpl<S, R>
where
    S: DogStatusRepository,
    R: LeavingReasonRepository,
{
    pub fn new(status_repo: Arc<S>, reason_repo: Arc<R>) -> Self {
        Self {
            status_repo,
            reason_repo,
        }
    }
}

#[async_trait]
impl<S, R> ReferenceDataService for ReferenceDataServiceImpl<S, R>
where
    S: DogStatusRepository + 'static,
    R: LeavingReasonRepository + 'static,
{
    async fn list_statuses(&self) -> Result<Vec<DogStatus>, AppError> {
        self.status_repo.find_all().await
    }

    async fn list_leaving_reasons(&self) -> Result<Vec<LeavingReason>, AppError> {
        self.reason_repo.find_all().await
    }
}
