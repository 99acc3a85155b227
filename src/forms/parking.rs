use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::lot::LotCapacities;
use crate::domain::types::{
    Capacity, SlotNumber, TypeConstraintError, VehicleCategory, VehicleNumber,
};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LotSetupForm {
    #[validate(range(min = 1))]
    pub two_wheeler_capacity: i32,
    #[validate(range(min = 1))]
    pub four_wheeler_capacity: i32,
    #[validate(range(min = 1))]
    pub heavy_vehicle_capacity: i32,
}

#[derive(Debug, Error)]
pub enum LotSetupFormError {
    #[error("Lot setup form validation failed: {0}")]
    Validation(String),
    #[error("Lot setup form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for LotSetupFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for LotSetupFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<LotSetupForm> for LotCapacities {
    type Error = LotSetupFormError;

    fn try_from(value: LotSetupForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(LotCapacities::new(
            Capacity::new(value.two_wheeler_capacity)?,
            Capacity::new(value.four_wheeler_capacity)?,
            Capacity::new(value.heavy_vehicle_capacity)?,
        ))
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ParkVehicleForm {
    #[validate(length(min = 1))]
    pub vehicle_number: String,
    /// Operator supplied type code: 2, 4 or 6.
    pub vehicle_type: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParkVehicleFormPayload {
    pub vehicle_number: VehicleNumber,
    /// Category derived from the vehicle number.
    pub category: VehicleCategory,
}

#[derive(Debug, Error)]
pub enum ParkVehicleFormError {
    #[error("Park vehicle form validation failed: {0}")]
    Validation(String),
    #[error("Park vehicle form contains invalid data: {0}")]
    TypeConstraint(String),
    #[error("vehicle {vehicle_number} is a {actual}, not a {declared}")]
    CategoryMismatch {
        vehicle_number: String,
        declared: VehicleCategory,
        actual: VehicleCategory,
    },
}

impl From<ValidationErrors> for ParkVehicleFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for ParkVehicleFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<ParkVehicleForm> for ParkVehicleFormPayload {
    type Error = ParkVehicleFormError;

    fn try_from(value: ParkVehicleForm) -> Result<Self, Self::Error> {
        value.validate()?;
        let declared = VehicleCategory::from_code(value.vehicle_type)?;
        let vehicle_number = VehicleNumber::new(value.vehicle_number)?;

        // Unclassified numbers pass through so the service can reject them.
        let category = VehicleCategory::from(&vehicle_number);
        if category.is_classified() && category != declared {
            return Err(ParkVehicleFormError::CategoryMismatch {
                vehicle_number: vehicle_number.into_inner(),
                declared,
                actual: category,
            });
        }

        Ok(Self {
            vehicle_number,
            category,
        })
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UnparkVehicleForm {
    /// Operator supplied type code: 2, 4 or 6.
    pub vehicle_type: i32,
    #[validate(range(min = 1))]
    pub slot_number: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnparkVehicleFormPayload {
    pub category: VehicleCategory,
    pub slot_number: SlotNumber,
}

#[derive(Debug, Error)]
pub enum UnparkVehicleFormError {
    #[error("Unpark vehicle form validation failed: {0}")]
    Validation(String),
    #[error("Unpark vehicle form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for UnparkVehicleFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for UnparkVehicleFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<UnparkVehicleForm> for UnparkVehicleFormPayload {
    type Error = UnparkVehicleFormError;

    fn try_from(value: UnparkVehicleForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            category: VehicleCategory::from_code(value.vehicle_type)?,
            slot_number: SlotNumber::new(value.slot_number)?,
        })
    }
}
