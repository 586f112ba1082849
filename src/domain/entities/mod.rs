//! # Domain Entities
//!
//! Core domain entities of the registry. All entities map directly to
//! their corresponding database tables.
//!
//! - **Dog**: a working dog with its status and optional leaving details
//! - **DogStatus**: reference list of career statuses
//! - **LeavingReason**: reference list of reasons a dog left the unit
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod dog;
mod dog_status;
mod leaving_reason;

pub use dog::{Dog, DogDraft, DogFilter, DogRepository, DogSort, DogSortField};
pub use dog_status::{DogStatus, DogStatusRepository};
pub use leaving_reason::{LeavingReason, LeavingReasonRepository};

#[cfg(test)]
pub use dog::MockDogRepository;
#[cfg(test)]
pub use dog_status::MockDogStatusRepository;
#[cfg(test)]
pub use leaving_reason::MockLeavingReasonRepository;
