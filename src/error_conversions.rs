//! Error conversion glue between layers.
//!
//! The domain layer must not depend on repository or service error types, so
//! the `From` impls connecting them live here. Service conversions are only
//! compiled with the `cli` feature.

use crate::domain::types::TypeConstraintError;
use crate::repository::RepositoryError;

#[cfg(feature = "cli")]
use crate::forms::parking::{ParkVehicleFormError, UnparkVehicleFormError};
#[cfg(feature = "cli")]
use crate::services::ServiceError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "cli")]
impl From<ParkVehicleFormError> for ServiceError {
    fn from(val: ParkVehicleFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

#[cfg(feature = "cli")]
impl From<UnparkVehicleFormError> for ServiceError {
    fn from(val: UnparkVehicleFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
