use chrono::NaiveDateTime;

use crate::domain::types::VehicleCategory;
use crate::domain::vehicle::NewParkedVehicle;
use crate::dto::parking::{OccupancyDto, TicketDto};
use crate::forms::parking::{ParkVehicleFormPayload, UnparkVehicleFormPayload};
use crate::repository::{RepositoryError, SlotReader, SlotWriter};

use super::{ServiceError, ServiceResult};

/// Occupancy report for every slot-owning category.
///
/// Lines come in the order two-wheeler, four-wheeler, heavy vehicle.
pub fn show_occupancy<R>(repo: &R) -> ServiceResult<Vec<OccupancyDto>>
where
    R: SlotReader,
{
    VehicleCategory::ALL
        .into_iter()
        .map(|category| match repo.occupancy(category) {
            Ok(occupancy) => Ok(OccupancyDto::from(occupancy)),
            Err(e) => {
                log::error!("Failed to read occupancy for {category}: {e}");
                Err(ServiceError::Internal)
            }
        })
        .collect()
}

/// Park a vehicle in the lowest free slot of its category.
pub fn park_vehicle<R>(
    payload: ParkVehicleFormPayload,
    repo: &R,
    now: NaiveDateTime,
) -> ServiceResult<TicketDto>
where
    R: SlotWriter,
{
    if !payload.category.is_classified() {
        log::warn!(
            "Refusing to park unclassifiable vehicle {}",
            payload.vehicle_number
        );
        return Err(ServiceError::Unclassifiable);
    }

    let vehicle = NewParkedVehicle::new(payload.vehicle_number, now);
    if vehicle.category != payload.category {
        return Err(ServiceError::TypeConstraint(format!(
            "vehicle {} is not a {}",
            vehicle.vehicle_number, payload.category
        )));
    }

    match repo.park_vehicle(&vehicle) {
        Ok(parked) => {
            log::info!(
                "Parked {} in {} slot {}",
                parked.vehicle_number,
                parked.category,
                parked.slot_number
            );
            Ok(TicketDto::from(parked))
        }
        Err(RepositoryError::NoSlotAvailable(category)) => {
            log::warn!("No free {category} slot for {}", vehicle.vehicle_number);
            Err(ServiceError::NoSlotAvailable)
        }
        Err(e) => {
            log::error!("Failed to park vehicle: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Release a slot and return the final ticket with its exit time.
pub fn unpark_vehicle<R>(
    payload: UnparkVehicleFormPayload,
    repo: &R,
    now: NaiveDateTime,
) -> ServiceResult<TicketDto>
where
    R: SlotWriter,
{
    match repo.unpark_vehicle(payload.category, payload.slot_number, now) {
        Ok(Some(vehicle)) => {
            log::info!(
                "Released {} slot {} held by {}",
                vehicle.category,
                vehicle.slot_number,
                vehicle.vehicle_number
            );
            Ok(TicketDto::from(vehicle))
        }
        Ok(None) => {
            log::warn!(
                "No vehicle in {} slot {}",
                payload.category,
                payload.slot_number
            );
            Err(ServiceError::NotFound)
        }
        Err(e) => {
            log::error!("Failed to unpark vehicle: {e}");
            Err(ServiceError::Internal)
        }
    }
}
