//! LeavingReason entity and repository trait.
//!
//! Maps to the `leaving_reason` reference table.

use async_trait::async_trait;

use crate::shared::error::AppError;

/// Why a dog left the unit ("Transferred", "Rejected", ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeavingReason {
    pub id: i64,
    pub reason_name: String,
}

impl LeavingReason {
    pub fn new(id: i64, reason_name: impl Into<String>) -> Self {
        Self {
            id,
            reason_name: reason_name.into(),
        }
    }
}

/// Repository trait for the leaving reason lookup table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeavingReasonRepository: Send + Sync {
    /// All leaving reasons ordered by id.
    async fn find_all(&self) -> Result<Vec<LeavingReason>, AppError>;

    /// Find a leaving reason by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<LeavingReason>, AppError>;
}
