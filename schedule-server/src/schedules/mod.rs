//! Schedule lookup and creation.
//!
//! This module exposes the three schedule operations: resolving a station
//! by code, searching for available schedules between two stations on a
//! date, and creating a new schedule record. Storage is injected via the
//! [`store`](crate::store) traits and time via the
//! [`Clock`](crate::clock::Clock) trait.

mod dto;
mod error;
mod window;

pub use dto::{CreateScheduleRequest, ScheduleSummary, StationSummary};
pub use error::ScheduleError;
pub use window::{MAX_SEARCH_DAYS, SearchWindow, WindowError};

use chrono::NaiveDate;

use crate::clock::Clock;
use crate::domain::{Station, StationCode, TravelSchedule};
use crate::store::{ScheduleStore, StationStore};

/// Schedule lookup and creation over injected stores and clock.
pub struct ScheduleService<S, R, C> {
    stations: S,
    schedules: R,
    clock: C,
}

impl<S, R, C> ScheduleService<S, R, C>
where
    S: StationStore,
    R: ScheduleStore,
    C: Clock,
{
    /// Create a service over the given stores and clock.
    pub fn new(stations: S, schedules: R, clock: C) -> Self {
        Self {
            stations,
            schedules,
            clock,
        }
    }

    /// Resolve a station by its code.
    ///
    /// Fails with an invalid-code error for blank input and a not-found
    /// error when no station with the code exists. No side effects.
    pub fn resolve_station(&self, code: &str) -> Result<Station, ScheduleError> {
        let code = StationCode::parse(code)?;

        self.stations
            .find_by_code(code.as_str())?
            .ok_or_else(|| ScheduleError::StationNotFound(code.as_str().to_string()))
    }

    /// Search for available schedules between two stations on a date.
    ///
    /// "Now" is captured once at the start; all comparisons in the call
    /// use that snapshot. The date is validated against the search window
    /// rules (no past dates, 30-day horizon), then the store is queried
    /// for schedules arriving strictly after now. Results are returned in
    /// store order; an empty result is a valid outcome.
    pub fn search_schedules(
        &self,
        source: &Station,
        destination: &Station,
        date: NaiveDate,
    ) -> Result<Vec<ScheduleSummary>, ScheduleError> {
        let now = self.clock.now();
        let window = SearchWindow::compute(now, date)?;

        tracing::debug!(
            source = %source.code,
            destination = %destination.code,
            %date,
            earliest = %window.earliest(),
            "searching schedules"
        );

        let schedules = self
            .schedules
            .find_arriving_after(source, destination, now)?;

        Ok(schedules.iter().map(ScheduleSummary::from_schedule).collect())
    }

    /// Create a new travel schedule from a request.
    ///
    /// Both station codes are resolved before anything is persisted;
    /// either resolution failing aborts the operation with no record
    /// created. Returns `true` iff the saved record carries an
    /// identifier.
    pub fn create_schedule(&self, request: &CreateScheduleRequest) -> Result<bool, ScheduleError> {
        tracing::info!(
            source = %request.source_code,
            destination = %request.destination_code,
            "creating travel schedule"
        );

        let destination = self.resolve_station(&request.destination_code)?;
        let source = self.resolve_station(&request.source_code)?;

        let schedule = TravelSchedule::new(source, destination, request.estimated_arrival);
        let saved = self.schedules.save(schedule)?;

        tracing::info!(id = ?saved.id(), "created travel schedule");
        Ok(saved.id().is_some())
    }
}
