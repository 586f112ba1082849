//! Data Transfer Objects
//!
//! DTOs for API request/response serialization.

pub mod request;
pub mod response;

pub use request::{DogListQuery, DogRequest};
pub use response::{DogResponse, DogStatusResponse, LeavingReasonResponse, PageResponse};
