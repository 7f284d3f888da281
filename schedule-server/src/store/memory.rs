//! In-memory store implementations for testing and demos.
//!
//! These stand in for the real database the way the surrounding
//! application would provide it. Data is held behind a `Mutex`, so a
//! single store can be shared between callers.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::NaiveDateTime;

use crate::domain::{ScheduleId, Station, TravelSchedule};

use super::{ScheduleStore, StationStore, StoreError};

/// Station store backed by a map from code to station.
#[derive(Debug, Default)]
pub struct MemoryStationStore {
    stations: Mutex<HashMap<String, Station>>,
}

impl MemoryStationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station, replacing any existing station with the same code.
    pub fn insert(&self, station: Station) {
        let mut stations = self.stations.lock().expect("station store lock poisoned");
        stations.insert(station.code.as_str().to_string(), station);
    }
}

impl StationStore for MemoryStationStore {
    fn find_by_code(&self, code: &str) -> Result<Option<Station>, StoreError> {
        let stations = self.stations.lock().expect("station store lock poisoned");
        Ok(stations.get(code).cloned())
    }
}

/// Schedule store backed by a vector, with a monotonic id counter.
#[derive(Debug, Default)]
pub struct MemoryScheduleStore {
    inner: Mutex<ScheduleData>,
}

#[derive(Debug, Default)]
struct ScheduleData {
    schedules: Vec<TravelSchedule>,
    next_id: i64,
}

impl MemoryScheduleStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of persisted schedules.
    pub fn len(&self) -> usize {
        let data = self.inner.lock().expect("schedule store lock poisoned");
        data.schedules.len()
    }

    /// Whether the store holds no schedules.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ScheduleStore for MemoryScheduleStore {
    fn find_arriving_after(
        &self,
        source: &Station,
        destination: &Station,
        after: NaiveDateTime,
    ) -> Result<Vec<TravelSchedule>, StoreError> {
        let data = self.inner.lock().expect("schedule store lock poisoned");

        let matches = data
            .schedules
            .iter()
            .filter(|s| {
                s.source().code == source.code
                    && s.destination().code == destination.code
                    && s.estimated_arrival() > after
            })
            .cloned()
            .collect();

        Ok(matches)
    }

    fn save(&self, schedule: TravelSchedule) -> Result<TravelSchedule, StoreError> {
        let mut data = self.inner.lock().expect("schedule store lock poisoned");

        data.next_id += 1;
        let saved = schedule.with_id(ScheduleId(data.next_id));
        data.schedules.push(saved.clone());

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationCode;
    use chrono::NaiveDate;

    fn station(code: &str, name: &str) -> Station {
        Station::new(StationCode::parse(code).unwrap(), name)
    }

    fn instant(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn find_by_code_exact_match() {
        let store = MemoryStationStore::new();
        store.insert(station("NYC", "New York"));

        let found = store.find_by_code("NYC").unwrap();
        assert_eq!(found.unwrap().name, "New York");

        assert!(store.find_by_code("nyc").unwrap().is_none());
        assert!(store.find_by_code("BOS").unwrap().is_none());
    }

    #[test]
    fn save_assigns_increasing_ids() {
        let store = MemoryScheduleStore::new();
        let nyc = station("NYC", "New York");
        let bos = station("BOS", "Boston");

        let first = store
            .save(TravelSchedule::new(nyc.clone(), bos.clone(), instant(15, 10)))
            .unwrap();
        let second = store
            .save(TravelSchedule::new(nyc, bos, instant(15, 12)))
            .unwrap();

        assert_eq!(first.id(), Some(ScheduleId(1)));
        assert_eq!(second.id(), Some(ScheduleId(2)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn save_keeps_existing_id() {
        let store = MemoryScheduleStore::new();
        let schedule = TravelSchedule::new(
            station("NYC", "New York"),
            station("BOS", "Boston"),
            instant(15, 10),
        )
        .with_id(ScheduleId(42));

        let saved = store.save(schedule).unwrap();
        assert_eq!(saved.id(), Some(ScheduleId(42)));
    }

    #[test]
    fn find_arriving_after_filters_by_pair_and_time() {
        let store = MemoryScheduleStore::new();
        let nyc = station("NYC", "New York");
        let bos = station("BOS", "Boston");
        let phl = station("PHL", "Philadelphia");

        store
            .save(TravelSchedule::new(nyc.clone(), bos.clone(), instant(15, 8)))
            .unwrap();
        store
            .save(TravelSchedule::new(nyc.clone(), bos.clone(), instant(15, 14)))
            .unwrap();
        store
            .save(TravelSchedule::new(nyc.clone(), phl, instant(15, 14)))
            .unwrap();

        let found = store
            .find_arriving_after(&nyc, &bos, instant(15, 10))
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].estimated_arrival(), instant(15, 14));
    }

    #[test]
    fn arrival_exactly_at_cutoff_is_excluded() {
        let store = MemoryScheduleStore::new();
        let nyc = station("NYC", "New York");
        let bos = station("BOS", "Boston");

        store
            .save(TravelSchedule::new(nyc.clone(), bos.clone(), instant(15, 10)))
            .unwrap();

        // Strictly-after filter: equality does not match
        let found = store
            .find_arriving_after(&nyc, &bos, instant(15, 10))
            .unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn empty_store_returns_empty() {
        let store = MemoryScheduleStore::new();
        let found = store
            .find_arriving_after(
                &station("NYC", "New York"),
                &station("BOS", "Boston"),
                instant(15, 10),
            )
            .unwrap();
        assert!(found.is_empty());
        assert!(store.is_empty());
    }
}
