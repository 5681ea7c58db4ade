use std::collections::btree_map::{BTreeMap, Entry};

use log::{info, warn};

use crate::error::ModelError;
use crate::passenger::Passenger;
use crate::schedule::{Direction, Schedule};
use crate::station::Station;
use crate::vehicle::Vehicle;
use crate::{PassengerId, StationId, VehicleId};

/// Owns every station, vehicle and passenger and resolves the ids they use
/// to refer to each other.
#[derive(Debug, Default)]
pub struct Network {
    stations: BTreeMap<StationId, Station>,
    vehicles: BTreeMap<VehicleId, Vehicle>,
    passengers: BTreeMap<PassengerId, Passenger>,
}

fn insert_unique<K: Ord + Copy, V>(
    map: &mut BTreeMap<K, V>,
    key: K,
    value: V,
    duplicate: impl FnOnce(K) -> ModelError,
) -> Result<(), ModelError> {
    match map.entry(key) {
        Entry::Occupied(entry) => Err(duplicate(*entry.key())),
        Entry::Vacant(entry) => {
            entry.insert(value);
            Ok(())
        }
    }
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_station(&mut self, station: Station) -> Result<(), ModelError> {
        insert_unique(
            &mut self.stations,
            station.id(),
            station,
            ModelError::DuplicateStation,
        )
    }

    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Result<(), ModelError> {
        insert_unique(
            &mut self.vehicles,
            vehicle.id(),
            vehicle,
            ModelError::DuplicateVehicle,
        )
    }

    pub fn add_passenger(&mut self, passenger: Passenger) -> Result<(), ModelError> {
        insert_unique(
            &mut self.passengers,
            passenger.id(),
            passenger,
            ModelError::DuplicatePassenger,
        )
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(&id)
    }

    pub fn station_mut(&mut self, id: StationId) -> Option<&mut Station> {
        self.stations.get_mut(&id)
    }

    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(&id)
    }

    pub fn vehicle_mut(&mut self, id: VehicleId) -> Option<&mut Vehicle> {
        self.vehicles.get_mut(&id)
    }

    pub fn passenger(&self, id: PassengerId) -> Option<&Passenger> {
        self.passengers.get(&id)
    }

    pub fn passenger_mut(&mut self, id: PassengerId) -> Option<&mut Passenger> {
        self.passengers.get_mut(&id)
    }

    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.values()
    }

    pub fn passengers(&self) -> impl Iterator<Item = &Passenger> {
        self.passengers.values()
    }

    pub fn vehicles_at_station(&self, station_id: StationId) -> Vec<&Vehicle> {
        self.vehicles
            .values()
            .filter(|vehicle| vehicle.assigned_station() == Some(station_id))
            .collect()
    }

    /// Assigns a vehicle to a station after checking that both exist.
    pub fn assign(
        &mut self,
        vehicle_id: VehicleId,
        station_id: StationId,
    ) -> Result<(), ModelError> {
        if !self.stations.contains_key(&station_id) {
            return Err(ModelError::UnknownStation(station_id));
        }
        self.vehicles
            .get_mut(&vehicle_id)
            .ok_or(ModelError::UnknownVehicle(vehicle_id))?
            .assign_to_station(station_id);
        info!("Assigned Vehicle {} to Station {}", vehicle_id, station_id);
        Ok(())
    }

    pub fn schedule_vehicle(
        &mut self,
        station_id: StationId,
        time: &str,
        direction: Direction,
        vehicle_id: VehicleId,
    ) -> Result<(), ModelError> {
        self.stations
            .get_mut(&station_id)
            .ok_or(ModelError::UnknownStation(station_id))?
            .try_add_schedule(Schedule::new(time, direction, vehicle_id))
    }

    /// Reserves a seat and records it on the passenger. The passenger is only
    /// touched once the vehicle has accepted the booking.
    pub fn book(
        &mut self,
        passenger_id: PassengerId,
        vehicle_id: VehicleId,
    ) -> Result<(), ModelError> {
        let passenger = self
            .passengers
            .get_mut(&passenger_id)
            .ok_or(ModelError::UnknownPassenger(passenger_id))?;
        self.vehicles
            .get_mut(&vehicle_id)
            .ok_or(ModelError::UnknownVehicle(vehicle_id))?
            .try_book_seat()?;
        passenger.add_booking(vehicle_id);
        Ok(())
    }

    /// Drops the passenger's booking and releases the matching seat. The seat
    /// is only released if the passenger actually held a booking.
    pub fn cancel(
        &mut self,
        passenger_id: PassengerId,
        vehicle_id: VehicleId,
    ) -> Result<(), ModelError> {
        let vehicle = self
            .vehicles
            .get_mut(&vehicle_id)
            .ok_or(ModelError::UnknownVehicle(vehicle_id))?;
        self.passengers
            .get_mut(&passenger_id)
            .ok_or(ModelError::UnknownPassenger(passenger_id))?
            .try_remove_booking(vehicle_id)?;
        vehicle.try_cancel_seat().inspect_err(|_| {
            warn!(
                "Passenger {} held a booking on Vehicle {} without a reserved seat",
                passenger_id, vehicle_id
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::station::StationType;

    fn demo_network() -> Network {
        let mut network = Network::new();
        network
            .add_station(Station::new(1, "Central", "Downtown", StationType::Bus))
            .unwrap();
        network
            .add_station(Station::new(2, "North", "Uptown", StationType::Train))
            .unwrap();
        network
            .add_vehicle(Vehicle::standard(101, "Route A", 2))
            .unwrap();
        network
            .add_vehicle(Vehicle::express_bus(102, "Express A", 30, 1.2, 2).unwrap())
            .unwrap();
        network.add_passenger(Passenger::new(1, "Anh")).unwrap();
        network.add_passenger(Passenger::new(2, "Binh")).unwrap();
        network
    }

    #[test]
    fn duplicate_ids_are_rejected_and_original_kept() {
        let mut network = demo_network();
        assert_eq!(
            network.add_vehicle(Vehicle::standard(101, "Other", 9)),
            Err(ModelError::DuplicateVehicle(101))
        );
        assert_eq!(network.vehicle(101).unwrap().route(), "Route A");
        assert_eq!(
            network.add_station(Station::new(2, "Again", "Nowhere", StationType::Bus)),
            Err(ModelError::DuplicateStation(2))
        );
        assert_eq!(
            network.add_passenger(Passenger::new(1, "Someone")),
            Err(ModelError::DuplicatePassenger(1))
        );
        assert_eq!(network.passenger(1).unwrap().name(), "Anh");
    }

    #[test]
    fn assign_checks_both_ends() {
        let mut network = demo_network();
        assert_eq!(network.assign(101, 9), Err(ModelError::UnknownStation(9)));
        assert_eq!(network.assign(999, 1), Err(ModelError::UnknownVehicle(999)));
        network.assign(101, 1).unwrap();
        network.assign(102, 1).unwrap();
        let at_central: Vec<VehicleId> = network
            .vehicles_at_station(1)
            .iter()
            .map(|vehicle| vehicle.id())
            .collect();
        assert_eq!(at_central, vec![101, 102]);
        assert!(network.vehicles_at_station(2).is_empty());
    }

    #[test]
    fn book_records_on_both_sides() {
        let mut network = demo_network();
        network.book(1, 101).unwrap();
        network.book(2, 101).unwrap();
        assert_eq!(
            network.book(1, 101),
            Err(ModelError::CapacityExceeded {
                vehicle_id: 101,
                capacity: 2
            })
        );
        assert_eq!(network.vehicle(101).unwrap().booked(), 2);
        assert_eq!(network.passenger(1).unwrap().bookings(), &[101]);
        assert_eq!(network.passenger(2).unwrap().bookings(), &[101]);
    }

    #[test]
    fn book_with_unknown_ids_changes_nothing() {
        let mut network = demo_network();
        assert_eq!(network.book(9, 101), Err(ModelError::UnknownPassenger(9)));
        assert_eq!(network.book(1, 999), Err(ModelError::UnknownVehicle(999)));
        assert_eq!(network.vehicle(101).unwrap().booked(), 0);
        assert!(network.passenger(1).unwrap().bookings().is_empty());
    }

    #[test]
    fn cancel_releases_seat_only_for_held_booking() {
        let mut network = demo_network();
        network.book(1, 102).unwrap();
        assert_eq!(
            network.cancel(2, 102),
            Err(ModelError::BookingNotFound {
                passenger_id: 2,
                vehicle_id: 102
            })
        );
        assert_eq!(network.vehicle(102).unwrap().booked(), 1);

        network.cancel(1, 102).unwrap();
        assert_eq!(network.vehicle(102).unwrap().booked(), 0);
        assert!(network.passenger(1).unwrap().bookings().is_empty());
    }

    #[test]
    fn cancel_reports_missing_seat_after_dropping_booking() {
        let mut network = demo_network();
        network.passenger_mut(1).unwrap().add_booking(101);
        assert_eq!(
            network.cancel(1, 101),
            Err(ModelError::NoBookingToCancel { vehicle_id: 101 })
        );
        assert!(network.passenger(1).unwrap().bookings().is_empty());
        assert_eq!(network.vehicle(101).unwrap().booked(), 0);
    }

    #[test]
    fn schedule_vehicle_resolves_station() {
        let mut network = demo_network();
        network
            .schedule_vehicle(1, "08:00", Direction::Departure, 101)
            .unwrap();
        assert_eq!(
            network.schedule_vehicle(7, "08:00", Direction::Departure, 101),
            Err(ModelError::UnknownStation(7))
        );
        assert_eq!(network.station(1).unwrap().schedule_count(), 1);
    }

    #[test]
    fn iteration_is_in_id_order() {
        let network = demo_network();
        let ids: Vec<StationId> = network.stations().map(|station| station.id()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(network.passengers().count(), 2);
        assert_eq!(network.vehicles().count(), 2);
    }
}
