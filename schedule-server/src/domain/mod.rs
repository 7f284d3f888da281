//! Domain types for stations and travel schedules.

mod schedule;
mod station;

pub use schedule::{ScheduleId, TravelSchedule};
pub use station::{InvalidStationCode, Station, StationCode};
