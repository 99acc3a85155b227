use serde::{Deserialize, Serialize};

use crate::domain::types::{Capacity, VehicleCategory};

/// Slot capacities of the lot, fixed for the lifetime of a registry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LotCapacities {
    pub two_wheeler: Capacity,
    pub four_wheeler: Capacity,
    pub heavy_vehicle: Capacity,
}

impl LotCapacities {
    pub fn new(two_wheeler: Capacity, four_wheeler: Capacity, heavy_vehicle: Capacity) -> Self {
        Self {
            two_wheeler,
            four_wheeler,
            heavy_vehicle,
        }
    }

    /// Capacity of `category`; `None` for unclassified vehicles.
    pub fn capacity_for(&self, category: VehicleCategory) -> Option<Capacity> {
        match category {
            VehicleCategory::TwoWheeler => Some(self.two_wheeler),
            VehicleCategory::FourWheeler => Some(self.four_wheeler),
            VehicleCategory::HeavyVehicle => Some(self.heavy_vehicle),
            VehicleCategory::Unclassified => None,
        }
    }
}

/// Point-in-time occupancy of one category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Occupancy {
    pub category: VehicleCategory,
    pub occupied: usize,
    pub capacity: usize,
}

impl Occupancy {
    pub fn is_full(&self) -> bool {
        self.occupied >= self.capacity
    }
}
