use log::debug;

use crate::error::ModelError;
use crate::{PassengerId, VehicleId};

/// A rider and the vehicles they hold bookings on, in booking order.
///
/// Bookings are a local record only: nothing here checks that the vehicle
/// exists or actually reserved a seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    id: PassengerId,
    name: String,
    booked_vehicle_ids: Vec<VehicleId>,
}

impl Passenger {
    pub fn new(id: PassengerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            booked_vehicle_ids: Vec::new(),
        }
    }

    pub fn id(&self) -> PassengerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bookings(&self) -> &[VehicleId] {
        &self.booked_vehicle_ids
    }

    pub fn add_booking(&mut self, vehicle_id: VehicleId) {
        self.booked_vehicle_ids.push(vehicle_id);
        debug!("Passenger {} booked Vehicle {}", self.id, vehicle_id);
    }

    /// Removes the earliest booking on `vehicle_id`, keeping the rest in order.
    pub fn try_remove_booking(&mut self, vehicle_id: VehicleId) -> Result<(), ModelError> {
        let position = self
            .booked_vehicle_ids
            .iter()
            .position(|&booked| booked == vehicle_id)
            .ok_or(ModelError::BookingNotFound {
                passenger_id: self.id,
                vehicle_id,
            })?;
        self.booked_vehicle_ids.remove(position);
        debug!(
            "Passenger {} dropped booking on Vehicle {}",
            self.id, vehicle_id
        );
        Ok(())
    }

    pub fn remove_booking(&mut self, vehicle_id: VehicleId) -> bool {
        self.try_remove_booking(vehicle_id).is_ok()
    }
}
