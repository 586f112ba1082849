//! Repository Implementations
//!
//! SQLite implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **SqliteDogRepository** - Dog CRUD, soft delete, filtered paging
//! - **SqliteDogStatusRepository** - Status lookup table
//! - **SqliteLeavingReasonRepository** - Leaving reason lookup table
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::SqlitePool;
//! use k9_registry::infrastructure::repositories::{
//!     SqliteDogRepository, SqliteDogStatusRepository, SqliteLeavingReasonRepository,
//! };
//!
//! fn setup_repositories(pool: SqlitePool) {
//!     let dogs = SqliteDogRepository::new(pool.clone());
//!     let statuses = SqliteDogStatusRepository::new(pool.clone());
//!     let reasons = SqliteLeavingReasonRepository::new(pool);
//! }
//! ```

pub mod dog_repository;
pub mod reference_repository;

pub use dog_repository::SqliteDogRepository;
pub use reference_repository::{SqliteDogStatusRepository, SqliteLeavingReasonRepository};
