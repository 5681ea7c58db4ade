use std::fmt;

use serde::Deserialize;

use crate::VehicleId;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Arrival,
    Departure,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Direction::Arrival => "Arrival",
            Direction::Departure => "Departure",
        };
        f.pad(label)
    }
}

/// A single arrival or departure of a vehicle at a station.
///
/// The time is kept as the label it was given ("08:30"); it is compared
/// verbatim and never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    time: String,
    direction: Direction,
    vehicle_id: VehicleId,
}

impl Schedule {
    pub fn new(time: impl Into<String>, direction: Direction, vehicle_id: VehicleId) -> Self {
        Self {
            time: time.into(),
            direction,
            vehicle_id,
        }
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn vehicle_id(&self) -> VehicleId {
        self.vehicle_id
    }

    pub fn matches(&self, time: &str, vehicle_id: VehicleId) -> bool {
        self.time == time && self.vehicle_id == vehicle_id
    }
}
