//! The demo network, compiled into the binary as CSV tables.

use itertools::Itertools;
use log::{info, warn};
use serde::Deserialize;

use crate::error::{FixtureError, ModelError};
use crate::network::Network;
use crate::passenger::Passenger;
use crate::schedule::{Direction, Schedule};
use crate::station::{Station, StationType};
use crate::vehicle::{Vehicle, DEFAULT_FEWER_STOPS, DEFAULT_SPEED_MULTIPLIER};
use crate::{PassengerId, StationId, VehicleId};

const STATIONS: &str = include_str!("../data/stations.csv");
const VEHICLES: &str = include_str!("../data/vehicles.csv");
const SCHEDULES: &str = include_str!("../data/schedules.csv");
const PASSENGERS: &str = include_str!("../data/passengers.csv");

#[derive(Deserialize, Debug)]
pub struct StationRecord {
    pub id: StationId,
    pub name: String,
    pub location: String,
    pub kind: StationType,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleClass {
    Standard,
    ExpressBus,
}

#[derive(Deserialize, Debug)]
pub struct VehicleRecord {
    pub id: VehicleId,
    pub kind: VehicleClass,
    pub route: String,
    pub capacity: u32,
    pub station_id: Option<StationId>,
    pub speed_multiplier: Option<f64>,
    pub fewer_stops: Option<u32>,
}

#[derive(Deserialize, Debug)]
pub struct ScheduleRecord {
    pub station_id: StationId,
    pub time: String,
    pub direction: Direction,
    pub vehicle_id: VehicleId,
}

#[derive(Deserialize, Debug)]
pub struct PassengerRecord {
    pub id: PassengerId,
    pub name: String,
}

#[derive(Debug)]
pub struct Fixture {
    pub stations: Vec<StationRecord>,
    pub vehicles: Vec<VehicleRecord>,
    pub schedules: Vec<ScheduleRecord>,
    pub passengers: Vec<PassengerRecord>,
}

pub fn deserialize_records<T: serde::de::DeserializeOwned>(
    table: &'static str,
    text: &str,
) -> Result<Vec<T>, FixtureError> {
    csv::Reader::from_reader(text.as_bytes())
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(|source| FixtureError::Csv { table, source })
}

impl Fixture {
    pub fn load() -> Result<Self, FixtureError> {
        info!("Processing stations");
        let stations = deserialize_records("stations", STATIONS)?;

        info!("Processing vehicles");
        let vehicles = deserialize_records("vehicles", VEHICLES)?;

        info!("Processing schedules");
        let schedules = deserialize_records("schedules", SCHEDULES)?;

        info!("Processing passengers");
        let passengers = deserialize_records("passengers", PASSENGERS)?;

        Ok(Self {
            stations,
            vehicles,
            schedules,
            passengers,
        })
    }
}

impl TryFrom<VehicleRecord> for Vehicle {
    type Error = ModelError;

    fn try_from(record: VehicleRecord) -> Result<Self, Self::Error> {
        match record.kind {
            VehicleClass::Standard => {
                Ok(Vehicle::standard(record.id, record.route, record.capacity))
            }
            VehicleClass::ExpressBus => Vehicle::express_bus(
                record.id,
                record.route,
                record.capacity,
                record.speed_multiplier.unwrap_or(DEFAULT_SPEED_MULTIPLIER),
                record.fewer_stops.unwrap_or(DEFAULT_FEWER_STOPS),
            ),
        }
    }
}

impl TryFrom<Fixture> for Network {
    type Error = ModelError;

    fn try_from(fixture: Fixture) -> Result<Self, Self::Error> {
        let mut network = Network::new();

        for record in fixture.stations {
            network.add_station(Station::new(
                record.id,
                record.name,
                record.location,
                record.kind,
            ))?;
        }

        for record in fixture.vehicles {
            let station_id = record.station_id;
            let vehicle = Vehicle::try_from(record)?;
            let vehicle_id = vehicle.id();
            network.add_vehicle(vehicle)?;
            if let Some(station_id) = station_id {
                network.assign(vehicle_id, station_id)?;
            }
        }

        for record in fixture.passengers {
            network.add_passenger(Passenger::new(record.id, record.name))?;
        }

        let by_station = fixture
            .schedules
            .into_iter()
            .map(|record| (record.station_id, record))
            .into_group_map();
        for (station_id, records) in by_station.into_iter().sorted_by_key(|(id, _)| *id) {
            let station = network
                .station_mut(station_id)
                .ok_or(ModelError::UnknownStation(station_id))?;
            for record in records {
                let schedule = Schedule::new(record.time, record.direction, record.vehicle_id);
                if let Err(err) = station.try_add_schedule(schedule) {
                    warn!("Dropping fixture schedule: {err}");
                }
            }
        }

        Ok(network)
    }
}
