//! Search-window computation for schedule lookups.
//!
//! Given a single "now" snapshot and a requested calendar date, computes
//! the earliest acceptable departure instant and enforces the search
//! horizon. The window is a derived value, never persisted.

use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Maximum distance between "now" and a requested search date.
pub const MAX_SEARCH_DAYS: i64 = 30;

/// Minimum lead time for same-day searches, in hours.
const SAME_DAY_LEAD_HOURS: i64 = 1;

/// Error from search-window validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    /// Requested date is before today
    #[error("cannot search for schedules in the past")]
    PastSearchDate,

    /// Requested date is beyond the search horizon
    #[error("cannot search for schedules more than {MAX_SEARCH_DAYS} days in the future")]
    BeyondSearchHorizon,
}

/// A validated search window.
///
/// `earliest` is the earliest acceptable departure instant for the
/// requested date; `horizon` is the hard cap `now + 30 days`. Both are
/// derived from the same "now" snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWindow {
    earliest: NaiveDateTime,
    horizon: NaiveDateTime,
}

impl SearchWindow {
    /// Compute the window for a requested date, validating it against `now`.
    ///
    /// Validation is a single up-front pass; the first violated rule wins,
    /// and the past-date check precedes the horizon check.
    ///
    /// For a same-day search the earliest instant is the requested date at
    /// `now`'s time of day plus one hour. The addition wraps at midnight
    /// without advancing the date, so a search at 23:30 yields 00:30 on
    /// the same date. For a future date the earliest instant is midnight
    /// of that date.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use schedule_server::schedules::SearchWindow;
    ///
    /// let now = NaiveDate::from_ymd_opt(2024, 3, 15)
    ///     .unwrap()
    ///     .and_hms_opt(10, 0, 0)
    ///     .unwrap();
    ///
    /// // Same-day search: earliest is now + 1 hour
    /// let window = SearchWindow::compute(now, now.date()).unwrap();
    /// assert_eq!(window.earliest(), now + chrono::Duration::hours(1));
    ///
    /// // Future date: earliest is midnight of that date
    /// let tomorrow = NaiveDate::from_ymd_opt(2024, 3, 16).unwrap();
    /// let window = SearchWindow::compute(now, tomorrow).unwrap();
    /// assert_eq!(window.earliest(), tomorrow.and_hms_opt(0, 0, 0).unwrap());
    ///
    /// // Past dates are rejected
    /// let yesterday = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
    /// assert!(SearchWindow::compute(now, yesterday).is_err());
    /// ```
    pub fn compute(now: NaiveDateTime, search_date: NaiveDate) -> Result<Self, WindowError> {
        let today = now.date();

        if search_date < today {
            return Err(WindowError::PastSearchDate);
        }

        let earliest = if search_date == today {
            // NaiveTime addition wraps at midnight and stays on search_date
            search_date.and_time(now.time() + Duration::hours(SAME_DAY_LEAD_HOURS))
        } else {
            search_date.and_time(chrono::NaiveTime::MIN)
        };

        let horizon = now + Duration::days(MAX_SEARCH_DAYS);
        if earliest > horizon {
            return Err(WindowError::BeyondSearchHorizon);
        }

        Ok(Self { earliest, horizon })
    }

    /// The earliest acceptable departure instant.
    pub fn earliest(&self) -> NaiveDateTime {
        self.earliest
    }

    /// The search horizon: `now + 30 days`.
    pub fn horizon(&self) -> NaiveDateTime {
        self.horizon
    }
}
