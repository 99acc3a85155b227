use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::NaiveDateTime;
use parking_lot::{Mutex, MutexGuard};

use crate::domain::lot::{LotCapacities, Occupancy};
use crate::domain::types::{SlotNumber, VehicleCategory};
use crate::domain::vehicle::{NewParkedVehicle, ParkedVehicle};

pub mod errors;
pub mod slot;

pub use errors::{RepositoryError, RepositoryResult};

/// Vehicles of one category keyed by the slot they hold.
pub(crate) type Lane = BTreeMap<SlotNumber, ParkedVehicle>;

/// Mutable registry state guarded by the repository mutex.
#[derive(Debug, Default)]
pub(crate) struct ParkingState {
    lanes: HashMap<VehicleCategory, Lane>,
}

/// In-memory slot registry.
///
/// All state sits behind a single mutex, so every trait method observes and
/// mutates the registry atomically. Clones share the same registry.
#[derive(Clone, Debug)]
pub struct InMemoryRepository {
    capacities: LotCapacities,
    state: Arc<Mutex<ParkingState>>, // Arc is cheap to clone
}

impl InMemoryRepository {
    /// Create an empty registry with fixed capacities.
    pub fn new(capacities: LotCapacities) -> Self {
        Self {
            capacities,
            state: Arc::new(Mutex::new(ParkingState::default())),
        }
    }

    /// Capacities this registry was created with.
    pub fn capacities(&self) -> LotCapacities {
        self.capacities
    }

    /// Lock the registry state.
    fn state(&self) -> MutexGuard<'_, ParkingState> {
        self.state.lock()
    }

    /// Slot count of `category`; zero for unclassified vehicles.
    fn capacity(&self, category: VehicleCategory) -> usize {
        self.capacities
            .capacity_for(category)
            .map_or(0, |capacity| capacity.get() as usize)
    }
}

/// Read-only operations over parked vehicles.
pub trait SlotReader {
    /// Occupied and total slot counts for a category.
    fn occupancy(&self, category: VehicleCategory) -> RepositoryResult<Occupancy>;
    /// Lowest slot number of the category that is not taken.
    fn find_next_free_slot(&self, category: VehicleCategory)
    -> RepositoryResult<Option<SlotNumber>>;
    /// Vehicles parked in a category ordered by slot number.
    fn list_vehicles(&self, category: VehicleCategory) -> RepositoryResult<Vec<ParkedVehicle>>;
}

/// Operations that assign or release slots.
pub trait SlotWriter {
    /// Assign the lowest free slot of the vehicle's category.
    ///
    /// Fails with [`RepositoryError::NoSlotAvailable`] when the category is full.
    fn park_vehicle(&self, vehicle: &NewParkedVehicle) -> RepositoryResult<ParkedVehicle>;
    /// Release a slot, returning the removed record stamped with `exit_time`.
    fn unpark_vehicle(
        &self,
        category: VehicleCategory,
        slot_number: SlotNumber,
        exit_time: NaiveDateTime,
    ) -> RepositoryResult<Option<ParkedVehicle>>;
}
