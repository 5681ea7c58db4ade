use log::{debug, warn};

use crate::bounded::SeatCounter;
use crate::error::ModelError;
use crate::{StationId, VehicleId};

/// Average speed of a standard vehicle, in km/h.
pub const BASE_SPEED_KMH: f64 = 40.0;
pub const DEFAULT_STATUS: &str = "On-time";
pub const DEFAULT_SPEED_MULTIPLIER: f64 = 1.2;
pub const DEFAULT_FEWER_STOPS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VehicleKind {
    Standard,
    ExpressBus {
        speed_multiplier: f64,
        fewer_stops: u32,
    },
}

impl VehicleKind {
    pub fn speed_kmh(&self) -> f64 {
        match self {
            VehicleKind::Standard => BASE_SPEED_KMH,
            VehicleKind::ExpressBus {
                speed_multiplier, ..
            } => BASE_SPEED_KMH * speed_multiplier,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    id: VehicleId,
    route: String,
    seats: SeatCounter,
    status: String,
    assigned_station: Option<StationId>,
    kind: VehicleKind,
}

impl Vehicle {
    pub fn standard(id: VehicleId, route: impl Into<String>, capacity: u32) -> Self {
        Self {
            id,
            route: route.into(),
            seats: SeatCounter::new(capacity),
            status: DEFAULT_STATUS.to_owned(),
            assigned_station: None,
            kind: VehicleKind::Standard,
        }
    }

    pub fn express_bus(
        id: VehicleId,
        route: impl Into<String>,
        capacity: u32,
        speed_multiplier: f64,
        fewer_stops: u32,
    ) -> Result<Self, ModelError> {
        if !speed_multiplier.is_finite() || speed_multiplier <= 0.0 {
            return Err(ModelError::InvalidSpeedMultiplier {
                vehicle_id: id,
                value: speed_multiplier,
            });
        }

        Ok(Self {
            kind: VehicleKind::ExpressBus {
                speed_multiplier,
                fewer_stops,
            },
            ..Self::standard(id, route, capacity)
        })
    }

    pub fn id(&self) -> VehicleId {
        self.id
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn capacity(&self) -> u32 {
        self.seats.capacity()
    }

    pub fn booked(&self) -> u32 {
        self.seats.count()
    }

    pub fn available_seats(&self) -> u32 {
        self.seats.remaining()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn assigned_station(&self) -> Option<StationId> {
        self.assigned_station
    }

    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Station ids are taken on trust; see `Network::assign` for a checked
    /// assignment.
    pub fn assign_to_station(&mut self, station_id: StationId) {
        self.assigned_station = Some(station_id);
    }

    pub fn unassign_station(&mut self) {
        self.assigned_station = None;
    }

    pub fn try_book_seat(&mut self) -> Result<(), ModelError> {
        if !self.seats.try_increment() {
            return Err(ModelError::CapacityExceeded {
                vehicle_id: self.id,
                capacity: self.seats.capacity(),
            });
        }
        debug!(
            "Booked seat on Vehicle {} ({}/{})",
            self.id,
            self.booked(),
            self.capacity()
        );
        Ok(())
    }

    pub fn book_seat(&mut self) -> bool {
        self.try_book_seat().map_err(|err| warn!("{err}")).is_ok()
    }

    pub fn try_cancel_seat(&mut self) -> Result<(), ModelError> {
        if !self.seats.try_decrement() {
            return Err(ModelError::NoBookingToCancel {
                vehicle_id: self.id,
            });
        }
        debug!(
            "Cancelled seat on Vehicle {} ({}/{})",
            self.id,
            self.booked(),
            self.capacity()
        );
        Ok(())
    }

    pub fn cancel_seat(&mut self) -> bool {
        self.try_cancel_seat().map_err(|err| warn!("{err}")).is_ok()
    }

    /// Hours needed to cover `distance_km` at this vehicle's speed.
    pub fn calculate_travel_time(&self, distance_km: f64) -> f64 {
        distance_km / self.kind.speed_kmh()
    }
}
