//! Schedule service error types.

use crate::domain::InvalidStationCode;
use crate::store::StoreError;

use super::window::WindowError;

/// Errors from the schedule operations.
///
/// Every error is terminal for the current operation: no retries, no
/// partial results, no silent fallback.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ScheduleError {
    /// Station code failed validation (blank input)
    #[error(transparent)]
    InvalidCode(#[from] InvalidStationCode),

    /// No station with the given code exists
    #[error("station with code {0} not found")]
    StationNotFound(String),

    /// Search date failed window validation
    #[error(transparent)]
    Window(#[from] WindowError),

    /// Persistence failure, propagated unmodified
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ScheduleError {
    /// Whether this error is a caller input problem (as opposed to a
    /// missing record or a store failure).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidCode(_) | Self::Window(_))
    }
}
