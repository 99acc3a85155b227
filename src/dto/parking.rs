use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;

use crate::domain::lot::Occupancy;
use crate::domain::vehicle::ParkedVehicle;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Ticket details rendered after a park or unpark.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketDto {
    pub vehicle_number: String,
    pub slot_number: i32,
    pub entry_time: NaiveDateTime,
    pub exit_time: Option<NaiveDateTime>,
}

impl From<ParkedVehicle> for TicketDto {
    fn from(value: ParkedVehicle) -> Self {
        Self {
            vehicle_number: value.vehicle_number.into_inner(),
            slot_number: value.slot_number.get(),
            entry_time: value.entry_time,
            exit_time: value.exit_time,
        }
    }
}

impl Display for TicketDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Vehicle Number: {}", self.vehicle_number)?;
        writeln!(f, "Slot Number: {}", self.slot_number)?;
        writeln!(f, "In Time: {}", self.entry_time.format(TIME_FORMAT))?;
        match self.exit_time {
            Some(exit_time) => write!(f, "Out Time: {}", exit_time.format(TIME_FORMAT)),
            None => write!(f, "Out Time: -"),
        }
    }
}

/// One line of the occupancy report.
#[derive(Debug, Clone, PartialEq)]
pub struct OccupancyDto {
    pub label: String,
    pub occupied: usize,
    pub capacity: usize,
}

impl From<Occupancy> for OccupancyDto {
    fn from(value: Occupancy) -> Self {
        Self {
            label: value.category.label().to_string(),
            occupied: value.occupied,
            capacity: value.capacity,
        }
    }
}

impl Display for OccupancyDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} Slots Occupied: {} / {}",
            self.label, self.occupied, self.capacity
        )
    }
}
