use chrono::Duration;

use schedule_server::clock::{Clock, SystemClock};
use schedule_server::domain::{Station, StationCode, TravelSchedule};
use schedule_server::schedules::{CreateScheduleRequest, ScheduleService};
use schedule_server::store::{MemoryScheduleStore, MemoryStationStore, ScheduleStore};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let clock = SystemClock;
    let now = clock.now();

    // Seed an in-memory store with a handful of stations and schedules.
    // A real deployment implements the store traits against its database.
    let nyc = Station::new(StationCode::parse("NYC").unwrap(), "New York");
    let bos = Station::new(StationCode::parse("BOS").unwrap(), "Boston");
    let phl = Station::new(StationCode::parse("PHL").unwrap(), "Philadelphia");

    let stations = MemoryStationStore::new();
    for station in [&nyc, &bos, &phl] {
        stations.insert(station.clone());
    }

    let schedules = MemoryScheduleStore::new();
    for (source, destination, hours) in [
        (&nyc, &bos, 2),
        (&nyc, &bos, 5),
        (&nyc, &phl, 3),
    ] {
        schedules
            .save(TravelSchedule::new(
                source.clone(),
                destination.clone(),
                now + Duration::hours(hours),
            ))
            .expect("memory store save cannot fail");
    }

    let service = ScheduleService::new(stations, schedules, clock);

    // Search today's NYC -> BOS schedules
    let source = service.resolve_station("NYC").expect("seeded station");
    let destination = service.resolve_station("BOS").expect("seeded station");

    match service.search_schedules(&source, &destination, now.date()) {
        Ok(results) => {
            println!("NYC -> BOS today: {} schedule(s)", results.len());
            for summary in &results {
                let json = serde_json::to_string(summary).expect("summary serializes");
                println!("  {json}");
            }
        }
        Err(e) => eprintln!("search failed: {e}"),
    }

    // Create a new schedule and report the outcome
    let request = CreateScheduleRequest {
        source_code: "BOS".into(),
        destination_code: "PHL".into(),
        estimated_arrival: now + Duration::hours(8),
    };

    match service.create_schedule(&request) {
        Ok(created) => println!("created BOS -> PHL schedule: {created}"),
        Err(e) => eprintln!("create failed: {e}"),
    }
}
