use thiserror::Error;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Every slot of the requested category is taken.
    #[error("no available slot for the given vehicle type")]
    NoSlotAvailable,
    /// No vehicle holds the requested slot.
    #[error("no vehicle found at the specified slot number")]
    NotFound,
    /// The vehicle number does not map to any vehicle category.
    #[error("vehicle number does not match any vehicle type")]
    Unclassifiable,
    /// Input violated a domain constraint.
    #[error("invalid value: {0}")]
    TypeConstraint(String),
    /// A submitted form was rejected.
    #[error("{0}")]
    Form(String),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
