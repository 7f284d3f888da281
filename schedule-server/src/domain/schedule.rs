//! Travel schedule records.

use chrono::NaiveDateTime;

use super::Station;

/// System-assigned identifier for a persisted travel schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduleId(pub i64);

/// A travel schedule between two stations.
///
/// The identifier is `None` until the record has been persisted; the
/// store assigns it on a successful save. A non-`None` identifier after
/// a save is the signal that persistence succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelSchedule {
    id: Option<ScheduleId>,
    source: Station,
    destination: Station,
    estimated_arrival: NaiveDateTime,
}

impl TravelSchedule {
    /// Create a new, unpersisted schedule (no identifier yet).
    pub fn new(source: Station, destination: Station, estimated_arrival: NaiveDateTime) -> Self {
        Self {
            id: None,
            source,
            destination,
            estimated_arrival,
        }
    }

    /// Returns the identifier, if the schedule has been persisted.
    pub fn id(&self) -> Option<ScheduleId> {
        self.id
    }

    /// Returns the source station.
    pub fn source(&self) -> &Station {
        &self.source
    }

    /// Returns the destination station.
    pub fn destination(&self) -> &Station {
        &self.destination
    }

    /// Returns the estimated arrival time.
    pub fn estimated_arrival(&self) -> NaiveDateTime {
        self.estimated_arrival
    }

    /// Attach an identifier to an unpersisted schedule.
    ///
    /// Identifiers are assigned exactly once: if the schedule already has
    /// one, the existing identifier is kept and `id` is ignored.
    pub fn with_id(mut self, id: ScheduleId) -> Self {
        if self.id.is_none() {
            self.id = Some(id);
        }
        self
    }
}
