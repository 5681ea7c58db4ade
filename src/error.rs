use thiserror::Error;

use crate::{PassengerId, StationId, VehicleId};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Vehicle {vehicle_id} is full (capacity {capacity})")]
    CapacityExceeded {
        vehicle_id: VehicleId,
        capacity: u32,
    },

    #[error("Vehicle {vehicle_id} has no bookings to cancel")]
    NoBookingToCancel { vehicle_id: VehicleId },

    #[error("Station {station:?} has reached max schedules ({limit}), cannot add more")]
    ScheduleLimitReached { station: String, limit: usize },

    #[error("Passenger {passenger_id} has no booking on Vehicle {vehicle_id}")]
    BookingNotFound {
        passenger_id: PassengerId,
        vehicle_id: VehicleId,
    },

    #[error("Station {station:?} has no schedule at {time:?} for Vehicle {vehicle_id}")]
    ScheduleNotFound {
        station: String,
        time: String,
        vehicle_id: VehicleId,
    },

    #[error("Speed multiplier {value} of Vehicle {vehicle_id} must be a positive number")]
    InvalidSpeedMultiplier { vehicle_id: VehicleId, value: f64 },

    #[error("No such Station {0}")]
    UnknownStation(StationId),

    #[error("No such Vehicle {0}")]
    UnknownVehicle(VehicleId),

    #[error("No such Passenger {0}")]
    UnknownPassenger(PassengerId),

    #[error("Station {0} is already registered")]
    DuplicateStation(StationId),

    #[error("Vehicle {0} is already registered")]
    DuplicateVehicle(VehicleId),

    #[error("Passenger {0} is already registered")]
    DuplicatePassenger(PassengerId),
}

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Malformed {table} table: {source}")]
    Csv {
        table: &'static str,
        #[source]
        source: csv::Error,
    },

    #[error(transparent)]
    Model(#[from] ModelError),
}
