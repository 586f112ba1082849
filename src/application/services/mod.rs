//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **DogService**: Dog registration, lookup, search, update and soft delete
//! - **ReferenceDataService**: Dog statuses and leaving reasons

pub mod dog_service;
pub mod reference_service;

pub use dog_service::{DogError, DogService, DogServiceImpl};
pub use reference_service::{ReferenceDataService, ReferenceDataServiceImpl};
