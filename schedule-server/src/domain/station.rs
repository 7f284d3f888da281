//! Station code types.

use std::fmt;

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// A valid station code.
///
/// Station codes are free-form but must not be blank: empty and
/// whitespace-only strings are rejected at construction, so any
/// `StationCode` value is valid by construction. Codes are case-sensitive
/// and compared exactly; non-blank input is stored as given, with no
/// trimming or normalization.
///
/// # Examples
///
/// ```
/// use schedule_server::domain::StationCode;
///
/// let nyc = StationCode::parse("NYC").unwrap();
/// assert_eq!(nyc.as_str(), "NYC");
///
/// // Blank input is rejected
/// assert!(StationCode::parse("").is_err());
/// assert!(StationCode::parse("   ").is_err());
///
/// // Case matters
/// assert_ne!(StationCode::parse("nyc").unwrap(), nyc);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationCode(String);

impl StationCode {
    /// Parse a station code from a string.
    ///
    /// The input must contain at least one non-whitespace character.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        if s.trim().is_empty() {
            return Err(InvalidStationCode {
                reason: "must not be blank",
            });
        }

        Ok(StationCode(s.to_string()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.0)
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A station record.
///
/// Owned by the persistence layer and immutable from this crate's
/// perspective. Two stations are the same station exactly when their
/// codes match (codes are unique in storage).
#[derive(Debug, Clone)]
pub struct Station {
    /// Unique station code.
    pub code: StationCode,

    /// Human-readable station name.
    pub name: String,
}

impl Station {
    /// Create a new station.
    pub fn new(code: StationCode, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
        }
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Station {}
