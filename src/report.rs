//! Console views over the model. Nothing in here mutates state.

use std::fmt;

use itertools::Itertools;

use crate::passenger::Passenger;
use crate::station::Station;
use crate::vehicle::{Vehicle, VehicleKind};

pub struct StationSchedules<'a>(pub &'a Station);

impl fmt::Display for StationSchedules<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let station = self.0;
        writeln!(
            f,
            "Schedules for Station [{}] {} ({}, {}):",
            station.id(),
            station.name(),
            station.kind(),
            station.location()
        )?;

        if station.schedules().is_empty() {
            return writeln!(f, "  No schedules.");
        }

        writeln!(f, "{:<10}{:<12}{:<10}", "Time", "Type", "VehicleID")?;
        for schedule in station.schedules() {
            writeln!(
                f,
                "{:<10}{:<12}{:<10}",
                schedule.time(),
                schedule.direction(),
                schedule.vehicle_id()
            )?;
        }
        Ok(())
    }
}

pub struct VehicleSummary<'a>(pub &'a Vehicle);

impl fmt::Display for VehicleSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vehicle = self.0;
        let label = match vehicle.kind() {
            VehicleKind::Standard => "Vehicle",
            VehicleKind::ExpressBus { .. } => "ExpressBus",
        };
        write!(
            f,
            "{} ID: {}, Route: {}, Capacity: {}, Booked: {}",
            label,
            vehicle.id(),
            vehicle.route(),
            vehicle.capacity(),
            vehicle.booked()
        )?;
        if let VehicleKind::ExpressBus {
            speed_multiplier,
            fewer_stops,
        } = vehicle.kind()
        {
            write!(
                f,
                ", SpeedMult: {speed_multiplier}, FewerStops: {fewer_stops}"
            )?;
        }
        write!(f, ", Status: {}, AssignedStation: ", vehicle.status())?;
        match vehicle.assigned_station() {
            Some(station_id) => write!(f, "{station_id}"),
            None => write!(f, "None"),
        }
    }
}

pub struct PassengerSummary<'a>(pub &'a Passenger);

impl fmt::Display for PassengerSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let passenger = self.0;
        write!(
            f,
            "Passenger ID: {}, Name: {}, Booked Vehicles: ",
            passenger.id(),
            passenger.name()
        )?;
        if passenger.bookings().is_empty() {
            write!(f, "None")
        } else {
            write!(f, "{}", passenger.bookings().iter().join(", "))
        }
    }
}

/// One travel-time estimate line, in hours to two decimals.
pub struct TravelTime<'a> {
    pub vehicle: &'a Vehicle,
    pub distance_km: f64,
}

impl fmt::Display for TravelTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Travel time for vehicle {} over {:.2} km: {:.2} hours",
            self.vehicle.id(),
            self.distance_km,
            self.vehicle.calculate_travel_time(self.distance_km)
        )
    }
}
