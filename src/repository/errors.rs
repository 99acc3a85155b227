use thiserror::Error;

use crate::domain::types::VehicleCategory;

/// Errors returned by slot repositories.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Every slot of the category is taken, or the category has no slots.
    #[error("no available slot for {0}")]
    NoSlotAvailable(VehicleCategory),
    /// Stored or requested data violated a domain constraint.
    #[error("validation error: {0}")]
    ValidationError(String),
    /// The backing store could not serve the request.
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
