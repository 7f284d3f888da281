//! Transfer objects for schedule requests and results.
//!
//! These decouple what callers see from the storage representation.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{Station, TravelSchedule};

/// Request to create a new travel schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateScheduleRequest {
    /// Source station code
    pub source_code: String,

    /// Destination station code
    pub destination_code: String,

    /// Estimated arrival time at the destination
    pub estimated_arrival: NaiveDateTime,
}

/// Station fields exposed in schedule summaries.
#[derive(Debug, Clone, Serialize)]
pub struct StationSummary {
    /// Station code
    pub code: String,

    /// Station name
    pub name: String,
}

/// A travel schedule as exposed to callers.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleSummary {
    /// System-assigned identifier, absent for unpersisted records
    pub id: Option<i64>,

    /// Source station
    pub source: StationSummary,

    /// Destination station
    pub destination: StationSummary,

    /// Estimated arrival time
    pub estimated_arrival: NaiveDateTime,
}

impl StationSummary {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            code: station.code.as_str().to_string(),
            name: station.name.clone(),
        }
    }
}

impl ScheduleSummary {
    /// Create from a domain TravelSchedule.
    pub fn from_schedule(schedule: &TravelSchedule) -> Self {
        Self {
            id: schedule.id().map(|id| id.0),
            source: StationSummary::from_station(schedule.source()),
            destination: StationSummary::from_station(schedule.destination()),
            estimated_arrival: schedule.estimated_arrival(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ScheduleId, StationCode};
    use chrono::NaiveDate;

    fn station(code: &str, name: &str) -> Station {
        Station::new(StationCode::parse(code).unwrap(), name)
    }

    fn arrival() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    #[test]
    fn summary_from_persisted_schedule() {
        let schedule = TravelSchedule::new(
            station("NYC", "New York"),
            station("BOS", "Boston"),
            arrival(),
        )
        .with_id(ScheduleId(7));

        let summary = ScheduleSummary::from_schedule(&schedule);

        assert_eq!(summary.id, Some(7));
        assert_eq!(summary.source.code, "NYC");
        assert_eq!(summary.source.name, "New York");
        assert_eq!(summary.destination.code, "BOS");
        assert_eq!(summary.destination.name, "Boston");
        assert_eq!(summary.estimated_arrival, arrival());
    }

    #[test]
    fn summary_from_unpersisted_schedule_has_no_id() {
        let schedule = TravelSchedule::new(
            station("NYC", "New York"),
            station("BOS", "Boston"),
            arrival(),
        );

        let summary = ScheduleSummary::from_schedule(&schedule);
        assert_eq!(summary.id, None);
    }

    #[test]
    fn summary_serializes_to_json() {
        let schedule = TravelSchedule::new(
            station("NYC", "New York"),
            station("BOS", "Boston"),
            arrival(),
        )
        .with_id(ScheduleId(7));

        let json = serde_json::to_value(ScheduleSummary::from_schedule(&schedule)).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["source"]["code"], "NYC");
        assert_eq!(json["destination"]["name"], "Boston");
    }

    #[test]
    fn request_deserializes_from_json() {
        let json = r#"{
            "source_code": "NYC",
            "destination_code": "BOS",
            "estimated_arrival": "2024-03-15T14:30:00"
        }"#;

        let req: CreateScheduleRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.source_code, "NYC");
        assert_eq!(req.destination_code, "BOS");
        assert_eq!(req.estimated_arrival, arrival());
    }
}
