use chrono::NaiveDateTime;

use crate::domain::lot::Occupancy;
use crate::domain::types::{SlotNumber, VehicleCategory};
use crate::domain::vehicle::{NewParkedVehicle, ParkedVehicle};
use crate::repository::{
    InMemoryRepository, Lane, ParkingState, RepositoryError, RepositoryResult, SlotReader,
    SlotWriter,
};

impl ParkingState {
    fn lane(&self, category: VehicleCategory) -> Option<&Lane> {
        self.lanes.get(&category)
    }

    fn occupied(&self, category: VehicleCategory) -> usize {
        self.lane(category).map_or(0, Lane::len)
    }

    /// Scan `1..=capacity` and return the first slot nobody holds.
    fn next_free_slot(
        &self,
        category: VehicleCategory,
        capacity: usize,
    ) -> RepositoryResult<Option<SlotNumber>> {
        let lane = self.lane(category);
        for number in 1..=capacity {
            let slot = SlotNumber::new(number as i32)?;
            if !lane.is_some_and(|lane| lane.contains_key(&slot)) {
                return Ok(Some(slot));
            }
        }
        Ok(None)
    }
}

impl SlotReader for InMemoryRepository {
    fn occupancy(&self, category: VehicleCategory) -> RepositoryResult<Occupancy> {
        let state = self.state();

        Ok(Occupancy {
            category,
            occupied: state.occupied(category),
            capacity: self.capacity(category),
        })
    }

    fn find_next_free_slot(
        &self,
        category: VehicleCategory,
    ) -> RepositoryResult<Option<SlotNumber>> {
        let state = self.state();
        state.next_free_slot(category, self.capacity(category))
    }

    fn list_vehicles(&self, category: VehicleCategory) -> RepositoryResult<Vec<ParkedVehicle>> {
        let state = self.state();

        Ok(state
            .lane(category)
            .map(|lane| lane.values().cloned().collect())
            .unwrap_or_default())
    }
}

impl SlotWriter for InMemoryRepository {
    fn park_vehicle(&self, vehicle: &NewParkedVehicle) -> RepositoryResult<ParkedVehicle> {
        let category = vehicle.category;
        let capacity = self.capacity(category);

        // Capacity check, slot search and insert happen under one lock.
        let mut state = self.state();
        if state.occupied(category) >= capacity {
            return Err(RepositoryError::NoSlotAvailable(category));
        }
        let slot_number = state
            .next_free_slot(category, capacity)?
            .ok_or(RepositoryError::NoSlotAvailable(category))?;

        let parked = vehicle.clone().into_parked(slot_number);
        state
            .lanes
            .entry(category)
            .or_default()
            .insert(slot_number, parked.clone());

        Ok(parked)
    }

    fn unpark_vehicle(
        &self,
        category: VehicleCategory,
        slot_number: SlotNumber,
        exit_time: NaiveDateTime,
    ) -> RepositoryResult<Option<ParkedVehicle>> {
        let mut state = self.state();

        let removed = state
            .lanes
            .get_mut(&category)
            .and_then(|lane| lane.remove(&slot_number));

        Ok(removed.map(|mut vehicle| {
            vehicle.exit_time = Some(exit_time);
            vehicle
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lot::LotCapacities;
    use crate::domain::types::{Capacity, VehicleNumber};
    use chrono::DateTime;

    fn sample_repo(two: i32, four: i32, heavy: i32) -> InMemoryRepository {
        InMemoryRepository::new(LotCapacities::new(
            Capacity::new(two).unwrap(),
            Capacity::new(four).unwrap(),
            Capacity::new(heavy).unwrap(),
        ))
    }

    fn at(seconds: i64) -> NaiveDateTime {
        DateTime::from_timestamp(seconds, 0).unwrap().naive_utc()
    }

    fn request(number: &str, seconds: i64) -> NewParkedVehicle {
        NewParkedVehicle::new(VehicleNumber::new(number).unwrap(), at(seconds))
    }

    fn slot(number: i32) -> SlotNumber {
        SlotNumber::new(number).unwrap()
    }

    #[test]
    fn empty_registry_reports_zero_occupancy() {
        let repo = sample_repo(2, 3, 4);

        let occupancy = repo.occupancy(VehicleCategory::FourWheeler).unwrap();
        assert_eq!(occupancy.occupied, 0);
        assert_eq!(occupancy.capacity, 3);

        let unclassified = repo.occupancy(VehicleCategory::Unclassified).unwrap();
        assert_eq!((unclassified.occupied, unclassified.capacity), (0, 0));
    }

    #[test]
    fn assigns_lowest_free_slot_and_reuses_vacancies() {
        let repo = sample_repo(3, 1, 1);

        for (index, number) in ["2001", "2002", "2003"].into_iter().enumerate() {
            let parked = repo.park_vehicle(&request(number, 0)).unwrap();
            assert_eq!(parked.slot_number, index as i32 + 1);
        }

        repo.unpark_vehicle(VehicleCategory::TwoWheeler, slot(2), at(10))
            .unwrap()
            .unwrap();
        repo.unpark_vehicle(VehicleCategory::TwoWheeler, slot(1), at(11))
            .unwrap()
            .unwrap();

        assert_eq!(
            repo.find_next_free_slot(VehicleCategory::TwoWheeler).unwrap(),
            Some(slot(1))
        );
        let parked = repo.park_vehicle(&request("2004", 20)).unwrap();
        assert_eq!(parked.slot_number, 1);
        let parked = repo.park_vehicle(&request("2005", 21)).unwrap();
        assert_eq!(parked.slot_number, 2);
    }

    #[test]
    fn categories_number_slots_independently() {
        let repo = sample_repo(2, 2, 2);

        let two = repo.park_vehicle(&request("2001", 0)).unwrap();
        let four = repo.park_vehicle(&request("4001", 0)).unwrap();
        let heavy = repo.park_vehicle(&request("6001", 0)).unwrap();

        assert_eq!(two.slot_number, 1);
        assert_eq!(four.slot_number, 1);
        assert_eq!(heavy.slot_number, 1);
        assert_eq!(four.category, VehicleCategory::FourWheeler);
    }

    #[test]
    fn full_category_rejects_and_keeps_state() {
        let repo = sample_repo(1, 1, 1);
        repo.park_vehicle(&request("6001", 0)).unwrap();

        let err = repo.park_vehicle(&request("6002", 1)).unwrap_err();
        assert_eq!(
            err,
            RepositoryError::NoSlotAvailable(VehicleCategory::HeavyVehicle)
        );
        assert_eq!(
            repo.find_next_free_slot(VehicleCategory::HeavyVehicle).unwrap(),
            None
        );
        assert_eq!(
            repo.occupancy(VehicleCategory::HeavyVehicle).unwrap().occupied,
            1
        );
    }

    #[test]
    fn unclassified_vehicles_never_get_a_slot() {
        let repo = sample_repo(1, 1, 1);

        let err = repo.park_vehicle(&request("KA-01", 0)).unwrap_err();
        assert_eq!(
            err,
            RepositoryError::NoSlotAvailable(VehicleCategory::Unclassified)
        );
        assert!(
            repo.list_vehicles(VehicleCategory::Unclassified)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn unpark_requires_matching_category() {
        let repo = sample_repo(2, 2, 2);
        repo.park_vehicle(&request("2001", 0)).unwrap();

        let missing = repo
            .unpark_vehicle(VehicleCategory::FourWheeler, slot(1), at(5))
            .unwrap();
        assert!(missing.is_none());
        assert_eq!(
            repo.occupancy(VehicleCategory::TwoWheeler).unwrap().occupied,
            1
        );

        let removed = repo
            .unpark_vehicle(VehicleCategory::TwoWheeler, slot(1), at(5))
            .unwrap()
            .unwrap();
        assert_eq!(removed.vehicle_number, "2001");
        assert_eq!(removed.entry_time, at(0));
        assert_eq!(removed.exit_time, Some(at(5)));
    }

    #[test]
    fn lists_vehicles_in_slot_order() {
        let repo = sample_repo(3, 1, 1);
        repo.park_vehicle(&request("2001", 0)).unwrap();
        repo.park_vehicle(&request("2002", 0)).unwrap();
        repo.park_vehicle(&request("2003", 0)).unwrap();
        repo.unpark_vehicle(VehicleCategory::TwoWheeler, slot(1), at(1))
            .unwrap();
        repo.park_vehicle(&request("2004", 2)).unwrap();

        let numbers: Vec<String> = repo
            .list_vehicles(VehicleCategory::TwoWheeler)
            .unwrap()
            .into_iter()
            .map(|vehicle| vehicle.vehicle_number.into_inner())
            .collect();
        assert_eq!(numbers, vec!["2004", "2002", "2003"]);
    }

    #[test]
    fn clones_share_the_same_registry() {
        let repo = sample_repo(1, 1, 1);
        let clone = repo.clone();
        clone.park_vehicle(&request("4001", 0)).unwrap();

        assert_eq!(
            repo.occupancy(VehicleCategory::FourWheeler).unwrap().occupied,
            1
        );
    }
}
