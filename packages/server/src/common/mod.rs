// Common types and utilities shared across the application

pub mod entity_ids;
pub mod error;
pub mod id;
pub mod validation;

pub use entity_ids::*;
pub use error::{fk_violation_as_not_found, ApiError, FieldError};
pub use id::Id;
pub use validation::*;
