//! Helpers for integration tests.

#![allow(dead_code)]

use chrono::{DateTime, NaiveDateTime};
use pushkind_parking::domain::lot::LotCapacities;
use pushkind_parking::domain::types::{Capacity, SlotNumber, VehicleCategory, VehicleNumber};
use pushkind_parking::domain::vehicle::NewParkedVehicle;
use pushkind_parking::repository::{InMemoryRepository, SlotReader};

/// Registry with the given two-wheeler, four-wheeler and heavy capacities.
pub fn registry(two: i32, four: i32, heavy: i32) -> InMemoryRepository {
    InMemoryRepository::new(LotCapacities::new(
        Capacity::new(two).expect("valid capacity"),
        Capacity::new(four).expect("valid capacity"),
        Capacity::new(heavy).expect("valid capacity"),
    ))
}

/// Deterministic timestamp `seconds` after the epoch.
pub fn at(seconds: i64) -> NaiveDateTime {
    DateTime::from_timestamp(seconds, 0)
        .expect("valid timestamp")
        .naive_utc()
}

pub fn request(number: &str, seconds: i64) -> NewParkedVehicle {
    NewParkedVehicle::new(
        VehicleNumber::new(number).expect("valid vehicle number"),
        at(seconds),
    )
}

pub fn slot(number: i32) -> SlotNumber {
    SlotNumber::new(number).expect("valid slot number")
}

/// Check slot invariants of every category against the reported occupancy.
pub fn assert_invariants(repo: &InMemoryRepository) {
    for category in VehicleCategory::ALL {
        let occupancy = repo.occupancy(category).expect("occupancy");
        let vehicles = repo.list_vehicles(category).expect("vehicles");

        assert_eq!(occupancy.occupied, vehicles.len());
        assert!(occupancy.occupied <= occupancy.capacity);

        let mut slots: Vec<i32> = vehicles.iter().map(|v| v.slot_number.get()).collect();
        assert!(slots.iter().all(|s| *s >= 1 && *s as usize <= occupancy.capacity));
        slots.sort_unstable();
        slots.dedup();
        assert_eq!(slots.len(), vehicles.len(), "duplicate slot in {category}");
        assert!(vehicles.iter().all(|v| v.category == category));

        assert_eq!(
            repo.find_next_free_slot(category).expect("free slot").is_none(),
            occupancy.is_full()
        );
    }
}
