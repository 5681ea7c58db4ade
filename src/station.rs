use std::fmt;

use log::{debug, warn};
use serde::Deserialize;

use crate::bounded::Bounded;
use crate::error::ModelError;
use crate::schedule::Schedule;
use crate::{StationId, VehicleId};

pub const MAX_SCHEDULES: usize = 10;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationType {
    Bus,
    Train,
}

impl fmt::Display for StationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StationType::Bus => "Bus",
            StationType::Train => "Train",
        };
        f.pad(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    id: StationId,
    name: String,
    location: String,
    kind: StationType,
    schedules: Bounded<Schedule>,
}

impl Station {
    pub fn new(
        id: StationId,
        name: impl Into<String>,
        location: impl Into<String>,
        kind: StationType,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            location: location.into(),
            kind,
            schedules: Bounded::new(MAX_SCHEDULES),
        }
    }

    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn kind(&self) -> StationType {
        self.kind
    }

    pub fn schedules(&self) -> &[Schedule] {
        self.schedules.as_slice()
    }

    pub fn schedule_count(&self) -> usize {
        self.schedules.len()
    }

    pub fn try_add_schedule(&mut self, schedule: Schedule) -> Result<(), ModelError> {
        self.schedules
            .try_push(schedule)
            .map_err(|_| ModelError::ScheduleLimitReached {
                station: self.name.clone(),
                limit: self.schedules.limit(),
            })?;
        debug!(
            "Station {} now holds {} schedules",
            self.id,
            self.schedules.len()
        );
        Ok(())
    }

    pub fn add_schedule(&mut self, schedule: Schedule) -> bool {
        self.try_add_schedule(schedule)
            .map_err(|err| warn!("{err}"))
            .is_ok()
    }

    /// Removes every schedule at `time` for `vehicle_id`, not just the first.
    pub fn try_remove_schedule_at_time(
        &mut self,
        time: &str,
        vehicle_id: VehicleId,
    ) -> Result<usize, ModelError> {
        match self
            .schedules
            .retain(|schedule| !schedule.matches(time, vehicle_id))
        {
            0 => Err(ModelError::ScheduleNotFound {
                station: self.name.clone(),
                time: time.to_owned(),
                vehicle_id,
            }),
            removed => {
                debug!(
                    "Station {} dropped {} schedules at {} for Vehicle {}",
                    self.id, removed, time, vehicle_id
                );
                Ok(removed)
            }
        }
    }

    pub fn remove_schedule_at_time(&mut self, time: &str, vehicle_id: VehicleId) -> bool {
        self.try_remove_schedule_at_time(time, vehicle_id).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::Direction;

    fn central() -> Station {
        Station::new(1, "Central Bus Station", "Downtown", StationType::Bus)
    }

    #[test]
    fn accepts_exactly_max_schedules() {
        let mut station = central();
        for hour in 0..MAX_SCHEDULES {
            assert!(station.add_schedule(Schedule::new(
                format!("{:02}:00", hour),
                Direction::Arrival,
                101
            )));
        }
        let overflow = Schedule::new("23:00", Direction::Arrival, 101);
        assert!(matches!(
            station.try_add_schedule(overflow.clone()),
            Err(ModelError::ScheduleLimitReached { limit: 10, .. })
        ));
        assert!(!station.add_schedule(overflow));
        assert_eq!(station.schedule_count(), MAX_SCHEDULES);
        assert_eq!(station.schedules()[0].time(), "00:00");
        assert_eq!(station.schedules()[9].time(), "09:00");
    }

    #[test]
    fn remove_drops_every_exact_match_only() {
        let mut station = central();
        let entries = [
            ("08:00", Direction::Departure, 101),
            ("08:00", Direction::Arrival, 102),
            ("09:00", Direction::Arrival, 101),
            ("08:00", Direction::Arrival, 101),
            ("10:00", Direction::Departure, 102),
        ];
        for (time, direction, vehicle_id) in entries {
            station.add_schedule(Schedule::new(time, direction, vehicle_id));
        }

        assert_eq!(station.try_remove_schedule_at_time("08:00", 101), Ok(2));

        let remaining: Vec<(&str, VehicleId)> = station
            .schedules()
            .iter()
            .map(|schedule| (schedule.time(), schedule.vehicle_id()))
            .collect();
        assert_eq!(
            remaining,
            vec![("08:00", 102), ("09:00", 101), ("10:00", 102)]
        );
    }

    #[test]
    fn remove_without_match_reports_not_found() {
        let mut station = central();
        station.add_schedule(Schedule::new("08:00", Direction::Departure, 101));
        assert!(!station.remove_schedule_at_time("08:00", 999));
        assert!(!station.remove_schedule_at_time("07:00", 101));
        assert!(matches!(
            station.try_remove_schedule_at_time("07:00", 101),
            Err(ModelError::ScheduleNotFound {
                vehicle_id: 101,
                ..
            })
        ));
        assert_eq!(station.schedule_count(), 1);
    }

    #[test]
    fn removal_frees_room_under_the_limit() {
        let mut station = central();
        for _ in 0..MAX_SCHEDULES {
            station.add_schedule(Schedule::new("12:00", Direction::Arrival, 101));
        }
        assert!(station.remove_schedule_at_time("12:00", 101));
        assert_eq!(station.schedule_count(), 0);
        assert!(station.add_schedule(Schedule::new("13:00", Direction::Arrival, 101)));
    }

    #[test]
    fn remove_from_empty_station() {
        let mut station = central();
        assert!(!station.remove_schedule_at_time("08:00", 101));
    }
}
