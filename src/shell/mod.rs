//! Interactive console front-end.
//!
//! Handlers here only collect input, call into [`crate::services`] and render
//! the returned DTOs. They hold no parking rules of their own.

use std::io::{self, BufRead, Write};

use chrono::{Local, NaiveDateTime};

use crate::domain::lot::LotCapacities;
use crate::domain::types::VehicleCategory;
use crate::forms::menu::MenuChoice;
use crate::forms::parking::{
    LotSetupForm, ParkVehicleForm, ParkVehicleFormPayload, UnparkVehicleForm,
    UnparkVehicleFormPayload,
};
use crate::models::config::ParkingConfig;
use crate::repository::{InMemoryRepository, SlotReader, SlotWriter};
use crate::services::{ServiceError, parking};

pub mod console;

pub use console::Console;

const VEHICLE_TYPE_PROMPT: &str =
    "Enter vehicle type (2 for 2 Wheeler, 4 for 4 Wheeler, 6 for Heavy Vehicle):";
const VEHICLE_TYPE_RETRY: &str = "Invalid input. Enter a valid vehicle type.";
const CAPACITY_RETRY: &str = "Invalid input. Enter a valid capacity.";

/// Source of entry and exit timestamps.
pub type Clock = fn() -> NaiveDateTime;

/// Wall clock in local time.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Run a complete session: greeting, lot setup, menu loop, farewell.
///
/// Capacities come from `config` when all three are set and valid, otherwise
/// they are prompted for.
pub fn run_session<I, O>(
    input: I,
    output: O,
    config: &ParkingConfig,
    clock: Clock,
) -> io::Result<()>
where
    I: BufRead,
    O: Write,
{
    let mut console = Console::new(input, output);
    console.say("Welcome to the Parking Lot Simulation!")?;

    let capacities = match configured_capacities(config) {
        Some(capacities) => capacities,
        None => match prompt_capacities(&mut console)? {
            Some(capacities) => capacities,
            None => return farewell(&mut console),
        },
    };

    let repo = InMemoryRepository::new(capacities);
    let opened = repo.capacities();
    log::info!(
        "Opening lot with capacities {} / {} / {}",
        opened.two_wheeler,
        opened.four_wheeler,
        opened.heavy_vehicle
    );
    Shell::new(console, &repo, clock).run()
}

fn configured_capacities(config: &ParkingConfig) -> Option<LotCapacities> {
    let form = config.lot_setup()?;
    match LotCapacities::try_from(form) {
        Ok(capacities) => Some(capacities),
        Err(e) => {
            log::warn!("Ignoring configured capacities: {e}");
            None
        }
    }
}

/// Ask for the three capacities. `Ok(None)` when input ends first.
pub fn prompt_capacities<I, O>(console: &mut Console<I, O>) -> io::Result<Option<LotCapacities>>
where
    I: BufRead,
    O: Write,
{
    let mut values = [0; 3];
    let prompts = [
        "Enter 2 Wheeler capacity:",
        "Enter 4 Wheeler capacity:",
        "Enter Heavy Vehicle capacity:",
    ];
    for (value, prompt) in values.iter_mut().zip(prompts) {
        match console.ask_number(prompt, CAPACITY_RETRY, 1)? {
            Some(capacity) => *value = capacity,
            None => return Ok(None),
        }
    }

    let [two_wheeler_capacity, four_wheeler_capacity, heavy_vehicle_capacity] = values;
    let form = LotSetupForm {
        two_wheeler_capacity,
        four_wheeler_capacity,
        heavy_vehicle_capacity,
    };
    LotCapacities::try_from(form)
        .map(Some)
        .map_err(io::Error::other)
}

fn farewell<I, O>(console: &mut Console<I, O>) -> io::Result<()>
where
    I: BufRead,
    O: Write,
{
    console.say("Exiting the Parking Lot Simulation. Thank you!")?;
    console.flush()
}

/// Menu loop bound to one registry.
pub struct Shell<'a, I, O, R> {
    console: Console<I, O>,
    repo: &'a R,
    clock: Clock,
}

impl<'a, I, O, R> Shell<'a, I, O, R>
where
    I: BufRead,
    O: Write,
    R: SlotReader + SlotWriter,
{
    pub fn new(console: Console<I, O>, repo: &'a R, clock: Clock) -> Self {
        Self {
            console,
            repo,
            clock,
        }
    }

    /// Serve menu requests until the operator exits or input ends.
    pub fn run(mut self) -> io::Result<()> {
        loop {
            self.console.say("")?;
            self.console.say("Select an option:")?;
            for choice in MenuChoice::ALL {
                self.console
                    .say(format_args!("{}. {}", choice.number(), choice.title()))?;
            }

            let choice = self
                .console
                .read_valid("Invalid input. Enter a valid choice.", |line| {
                    line.parse::<i32>()
                        .ok()
                        .and_then(|number| MenuChoice::try_from(number).ok())
                })?;

            let keep_going = match choice {
                Some(MenuChoice::ShowOccupancy) => self.show_occupancy()?,
                Some(MenuChoice::Park) => self.park()?,
                Some(MenuChoice::Unpark) => self.unpark()?,
                Some(MenuChoice::Exit) | None => false,
            };
            if !keep_going {
                break;
            }
        }

        farewell(&mut self.console)
    }

    fn show_occupancy(&mut self) -> io::Result<bool> {
        match parking::show_occupancy(self.repo) {
            Ok(lines) => {
                for line in lines {
                    self.console.say(line)?;
                }
            }
            Err(e) => self.console.say(format_args!("Sorry, {e}."))?,
        }
        Ok(true)
    }

    /// Returns `false` when input ended mid-dialog.
    fn park(&mut self) -> io::Result<bool> {
        let Some(vehicle_number) = self.console.ask_text(
            "Enter vehicle number:",
            "Invalid input. Enter a valid vehicle number.",
        )?
        else {
            return Ok(false);
        };
        let Some(vehicle_type) = self.ask_vehicle_type()? else {
            return Ok(false);
        };

        let form = ParkVehicleForm {
            vehicle_number,
            vehicle_type,
        };
        let payload = match ParkVehicleFormPayload::try_from(form).map_err(ServiceError::from) {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("Rejected park request: {e}");
                self.console.say(format_args!("Invalid input. {e}."))?;
                return Ok(true);
            }
        };

        match parking::park_vehicle(payload, self.repo, (self.clock)()) {
            Ok(ticket) => {
                self.console
                    .say("Vehicle parked successfully. Ticket details:")?;
                self.console.say(ticket)?;
            }
            Err(ServiceError::NoSlotAvailable) => {
                self.console
                    .say("Sorry, no available slot for the given vehicle type.")?;
            }
            Err(e) => self.console.say(format_args!("Sorry, {e}."))?,
        }
        Ok(true)
    }

    /// Returns `false` when input ended mid-dialog.
    fn unpark(&mut self) -> io::Result<bool> {
        let Some(vehicle_type) = self.ask_vehicle_type()? else {
            return Ok(false);
        };
        let Some(slot_number) = self.console.ask_number(
            "Enter slot number to unpark:",
            "Invalid input. Enter a valid slot number.",
            1,
        )?
        else {
            return Ok(false);
        };

        let form = UnparkVehicleForm {
            vehicle_type,
            slot_number,
        };
        let payload = match UnparkVehicleFormPayload::try_from(form).map_err(ServiceError::from) {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("Rejected unpark request: {e}");
                self.console.say(format_args!("Invalid input. {e}."))?;
                return Ok(true);
            }
        };

        match parking::unpark_vehicle(payload, self.repo, (self.clock)()) {
            Ok(ticket) => {
                self.console
                    .say("Vehicle unparked successfully. Ticket details:")?;
                self.console.say(ticket)?;
            }
            Err(ServiceError::NotFound) => {
                self.console
                    .say("No vehicle found at the specified slot number.")?;
            }
            Err(e) => self.console.say(format_args!("Sorry, {e}."))?,
        }
        Ok(true)
    }

    fn ask_vehicle_type(&mut self) -> io::Result<Option<i32>> {
        self.console
            .ask(VEHICLE_TYPE_PROMPT, VEHICLE_TYPE_RETRY, |line| {
                line.parse::<i32>()
                    .ok()
                    .filter(|code| VehicleCategory::from_code(*code).is_ok())
            })
    }
}
