//! # Value Objects
//!
//! Immutable value types shared across layers.

mod page;

pub use page::{Page, PageRequest, SortDirection};
