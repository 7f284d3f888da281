//! Persistence collaborator contracts.
//!
//! The schedule service owns no storage. It talks to these traits, which
//! the surrounding application implements against its database. Store
//! failures are never handled here; they propagate to the caller as-is.

mod memory;

pub use memory::{MemoryScheduleStore, MemoryStationStore};

use chrono::NaiveDateTime;

use crate::domain::{Station, TravelSchedule};

/// Errors from the persistence layer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// The backing store could not be reached
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The record violated a storage constraint
    #[error("constraint violation: {0}")]
    Constraint(String),
}

/// Read access to station records.
pub trait StationStore {
    /// Look up a station by its exact code.
    fn find_by_code(&self, code: &str) -> Result<Option<Station>, StoreError>;
}

/// Read and write access to travel schedule records.
pub trait ScheduleStore {
    /// All schedules between `source` and `destination` whose estimated
    /// arrival is strictly after `after`, in store order.
    fn find_arriving_after(
        &self,
        source: &Station,
        destination: &Station,
        after: NaiveDateTime,
    ) -> Result<Vec<TravelSchedule>, StoreError>;

    /// Persist a schedule, returning it with its identifier populated.
    ///
    /// The identifier is assigned synchronously on success, never
    /// partially.
    fn save(&self, schedule: TravelSchedule) -> Result<TravelSchedule, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StoreError::Unavailable("connection refused".into());
        assert_eq!(err.to_string(), "store unavailable: connection refused");

        let err = StoreError::Constraint("duplicate code".into());
        assert_eq!(err.to_string(), "constraint violation: duplicate code");
    }
}
