pub mod bounded;
pub mod config;
pub mod error;
pub mod fixture;
pub mod network;
pub mod passenger;
pub mod report;
pub mod schedule;
pub mod station;
pub mod vehicle;

pub type StationId = u32;
pub type VehicleId = u32;
pub type PassengerId = u32;

pub use error::{FixtureError, ModelError};
pub use network::Network;
pub use passenger::Passenger;
pub use schedule::{Direction, Schedule};
pub use station::{Station, StationType, MAX_SCHEDULES};
pub use vehicle::{Vehicle, VehicleKind};
