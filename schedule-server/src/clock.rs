//! Time source abstraction.
//!
//! Every operation captures "now" exactly once, at its start, and uses
//! that single snapshot for all comparisons. Injecting the clock keeps
//! the date-window logic deterministic under test.

use chrono::NaiveDateTime;

/// A source of the current local date and time.
pub trait Clock {
    /// Returns the current moment.
    fn now(&self) -> NaiveDateTime;
}

/// Clock backed by the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Clock that always returns the same instant.
///
/// Used in tests and demos to pin "now".
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
