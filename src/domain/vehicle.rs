use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{SlotNumber, VehicleCategory, VehicleNumber};

/// A vehicle currently holding a slot.
///
/// The category is computed once when the vehicle is parked and stored on the
/// record. `exit_time` stays `None` until the vehicle is unparked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParkedVehicle {
    pub vehicle_number: VehicleNumber,
    pub category: VehicleCategory,
    pub slot_number: SlotNumber,
    pub entry_time: NaiveDateTime,
    pub exit_time: Option<NaiveDateTime>,
}

/// Information required to park a new [`ParkedVehicle`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewParkedVehicle {
    pub vehicle_number: VehicleNumber,
    pub category: VehicleCategory,
    pub entry_time: NaiveDateTime,
}

impl NewParkedVehicle {
    /// Builds a request whose category is derived from the vehicle number.
    pub fn new(vehicle_number: VehicleNumber, entry_time: NaiveDateTime) -> Self {
        let category = VehicleCategory::from(&vehicle_number);
        Self {
            vehicle_number,
            category,
            entry_time,
        }
    }

    /// Completes the record once a slot has been assigned.
    pub fn into_parked(self, slot_number: SlotNumber) -> ParkedVehicle {
        ParkedVehicle {
            vehicle_number: self.vehicle_number,
            category: self.category,
            slot_number,
            entry_time: self.entry_time,
            exit_time: None,
        }
    }
}
