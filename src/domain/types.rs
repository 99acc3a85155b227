//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs should carry these wrappers instead of raw primitives so that
//! slot numbers, capacities and vehicle numbers are validated at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// A numeric value required to be positive was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveNumber(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// A numeric code did not map to a known vehicle category.
    #[error("unknown vehicle type code: {0}")]
    UnknownVehicleType(i32),
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Strictly positive integer newtype, validated on construction and on
/// deserialization.
macro_rules! positive_i32_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(try_from = "i32", into = "i32")]
        pub struct $name(i32);

        impl $name {
            /// Constructs a value that must be strictly positive.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveNumber($field))
                }
            }

            /// Returns the raw `i32` value.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for i32 {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

positive_i32_newtype!(
    SlotNumber,
    "Parking slot number, unique within a vehicle category.",
    "slot number"
);

positive_i32_newtype!(
    Capacity,
    "Number of slots configured for a vehicle category.",
    "capacity"
);

non_empty_string_newtype!(
    VehicleNumber,
    "Registration number of a vehicle enforcing non-empty values.",
    "vehicle number"
);

/// Vehicle category a slot belongs to.
///
/// `Unclassified` tags vehicle numbers that match none of the real categories.
/// It has no capacity and never holds a slot.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum VehicleCategory {
    TwoWheeler,
    FourWheeler,
    HeavyVehicle,
    Unclassified,
}

impl VehicleCategory {
    /// Categories that own slots, in report order.
    pub const ALL: [VehicleCategory; 3] = [Self::TwoWheeler, Self::FourWheeler, Self::HeavyVehicle];

    /// Derives the category from the leading character of a vehicle number.
    pub fn classify(vehicle_number: &str) -> Self {
        match vehicle_number.chars().next() {
            Some('2') => Self::TwoWheeler,
            Some('4') => Self::FourWheeler,
            Some('6') => Self::HeavyVehicle,
            _ => Self::Unclassified,
        }
    }

    /// Resolves an operator-facing type code (2, 4 or 6).
    pub fn from_code(code: i32) -> Result<Self, TypeConstraintError> {
        match code {
            2 => Ok(Self::TwoWheeler),
            4 => Ok(Self::FourWheeler),
            6 => Ok(Self::HeavyVehicle),
            other => Err(TypeConstraintError::UnknownVehicleType(other)),
        }
    }

    /// Human readable label used in reports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::TwoWheeler => "2 Wheeler",
            Self::FourWheeler => "4 Wheeler",
            Self::HeavyVehicle => "Heavy Vehicle",
            Self::Unclassified => "Unclassified",
        }
    }

    pub const fn is_classified(self) -> bool {
        !matches!(self, Self::Unclassified)
    }
}

impl Display for VehicleCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<i32> for VehicleCategory {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_code(value)
    }
}

impl From<&VehicleNumber> for VehicleCategory {
    fn from(value: &VehicleNumber) -> Self {
        Self::classify(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_vehicle_numbers() {
        let value = VehicleNumber::new("  2001  ").unwrap();
        assert_eq!(value.as_str(), "2001");
    }

    #[test]
    fn rejects_blank_vehicle_numbers() {
        let err = VehicleNumber::new("   ").unwrap_err();
        assert_eq!(err, TypeConstraintError::EmptyString("vehicle number"));
    }

    #[test]
    fn rejects_non_positive_slot_numbers() {
        let err = SlotNumber::new(0).unwrap_err();
        assert_eq!(err, TypeConstraintError::NonPositiveNumber("slot number"));
    }

    #[test]
    fn slot_number_deserialization_enforces_constraint() {
        assert!(serde_json::from_str::<SlotNumber>("0").is_err());
        assert!(serde_json::from_str::<SlotNumber>("-4").is_err());
        assert_eq!(serde_json::from_str::<SlotNumber>("7").unwrap(), 7);
    }

    #[test]
    fn rejects_non_positive_capacity() {
        assert_eq!(
            Capacity::new(-3).unwrap_err(),
            TypeConstraintError::NonPositiveNumber("capacity")
        );
        assert_eq!(Capacity::new(5).unwrap().get(), 5);
    }

    #[test]
    fn capacity_deserialization_enforces_constraint() {
        assert!(serde_json::from_str::<Capacity>("0").is_err());
        assert_eq!(serde_json::from_str::<Capacity>("3").unwrap(), 3);
    }

    #[test]
    fn classifies_by_leading_character() {
        assert_eq!(VehicleCategory::classify("2001"), VehicleCategory::TwoWheeler);
        assert_eq!(VehicleCategory::classify("4XYZ"), VehicleCategory::FourWheeler);
        assert_eq!(VehicleCategory::classify("6-TRUCK"), VehicleCategory::HeavyVehicle);
        assert_eq!(VehicleCategory::classify("KA01"), VehicleCategory::Unclassified);
        assert_eq!(VehicleCategory::classify("3000"), VehicleCategory::Unclassified);
        assert_eq!(VehicleCategory::classify(""), VehicleCategory::Unclassified);
    }

    #[test]
    fn resolves_operator_type_codes() {
        assert_eq!(VehicleCategory::from_code(2).unwrap(), VehicleCategory::TwoWheeler);
        assert_eq!(VehicleCategory::from_code(4).unwrap(), VehicleCategory::FourWheeler);
        assert_eq!(VehicleCategory::from_code(6).unwrap(), VehicleCategory::HeavyVehicle);
        assert_eq!(
            VehicleCategory::from_code(0).unwrap_err(),
            TypeConstraintError::UnknownVehicleType(0)
        );
    }

    #[test]
    fn serializes_categories_in_snake_case() {
        let value = serde_json::to_value(VehicleCategory::HeavyVehicle).unwrap();
        assert_eq!(value, serde_json::json!("heavy_vehicle"));
    }
}
