use crate::{PassengerId, StationId, VehicleId};

/// Parameters of the demo run in `main`.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub passenger_id: PassengerId,
    pub standard_vehicle_id: VehicleId,
    pub express_vehicle_id: VehicleId,
    /// Extra bookings attempted on the express bus after the first one.
    pub fill_attempts: usize,
    pub distance_km: f64,
    pub limit_station_id: StationId,
    pub extra_schedules: usize,
    pub extra_start_hour: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            passenger_id: 1,
            standard_vehicle_id: 101,
            express_vehicle_id: 102,
            fill_attempts: 31,
            distance_km: 120.0,
            limit_station_id: 1,
            extra_schedules: 12,
            extra_start_hour: 11,
        }
    }
}

impl DemoConfig {
    /// Time labels pushed at the schedule limit, one per hour.
    pub fn extra_schedule_times(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.extra_schedules)
            .map(|offset| format!("{}:00", self.extra_start_hour + offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_schedule_times_count_up_by_hour() {
        let config = DemoConfig::default();
        let times: Vec<String> = config.extra_schedule_times().collect();
        assert_eq!(times.len(), 12);
        assert_eq!(times.first().map(String::as_str), Some("11:00"));
        assert_eq!(times.last().map(String::as_str), Some("22:00"));
    }
}
