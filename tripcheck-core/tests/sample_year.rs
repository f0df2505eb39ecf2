use tripcheck_core::source::{DirHolidaySource, HolidaySource};
use tripcheck_core::store::{JsonFileTripStore, TripStore, load_or_seed};
use tripcheck_core::{Trip, detect_conflicts, years_referenced};

const US_2024: &str = r#"[
  {"date":"2024-01-01","localName":"New Year's Day","name":"New Year's Day","countryCode":"US","fixed":false,"global":true,"counties":null,"launchYear":null,"types":["Public"]},
  {"date":"2024-05-27","localName":"Memorial Day","name":"Memorial Day","countryCode":"US","fixed":false,"global":true,"counties":null,"launchYear":null,"types":["Public"]},
  {"date":"2024-07-04","localName":"Independence Day","name":"Independence Day","countryCode":"US","fixed":false,"global":true,"counties":null,"launchYear":null,"types":["Public"]},
  {"date":"2024-11-28","localName":"Thanksgiving Day","name":"Thanksgiving Day","countryCode":"US","fixed":false,"global":true,"counties":null,"launchYear":1863,"types":["Public"]},
  {"date":"2024-12-25","localName":"Christmas Day","name":"Christmas Day","countryCode":"US","fixed":false,"global":true,"counties":null,"launchYear":null,"types":["Public"]}
]"#;

#[tokio::test]
async fn seeded_trips_against_us_holidays() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("holidays/2024")).unwrap();
    std::fs::write(dir.path().join("holidays/2024/US.json"), US_2024).unwrap();

    let store = JsonFileTripStore::in_dir(dir.path());
    let trips = load_or_seed(&store, 2024).unwrap();
    let holidays = DirHolidaySource::new(dir.path().join("holidays"))
        .holidays(2024, "US")
        .await;

    let conflicts = detect_conflicts(&trips, &holidays).unwrap();
    let summary: Vec<(&str, Vec<&str>)> = conflicts
        .iter()
        .map(|c| {
            (
                c.trip.title.as_str(),
                c.conflicting_holidays.iter().map(|h| h.name.as_str()).collect(),
            )
        })
        .collect();

    assert_eq!(
        summary,
        vec![
            ("Summer Vacation", vec!["Independence Day"]),
            ("Christmas Holiday", vec!["Christmas Day"]),
            ("Memorial Day Weekend", vec!["Memorial Day"]),
        ]
    );
    assert_eq!(years_referenced(&trips).unwrap(), vec![2024]);
}

#[tokio::test]
async fn edited_trip_moves_into_conflicts_until_deleted() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("2024")).unwrap();
    std::fs::write(dir.path().join("2024/US.json"), US_2024).unwrap();
    let source = DirHolidaySource::new(dir.path());

    let store = JsonFileTripStore::in_dir(dir.path());
    let trip = Trip::new("Spring break", "Austin", "2024-03-10", "2024-03-17", None).unwrap();
    store.upsert(trip.clone()).unwrap();

    let mut moved = trip.clone();
    moved.start_date = "2024-12-24".to_string();
    moved.end_date = "2025-01-02".to_string();
    moved.validate().unwrap();
    store.upsert(moved).unwrap();

    let trips = store.all().unwrap();
    assert_eq!(trips.len(), 1);

    let holidays = source.holidays(2024, "US").await;
    let conflicts = detect_conflicts(&trips, &holidays).unwrap();
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].conflicting_holidays[0].name, "Christmas Day");
    assert_eq!(years_referenced(&trips).unwrap(), vec![2024, 2025]);

    assert!(store.delete(&trip.id).unwrap());
    assert!(detect_conflicts(&store.all().unwrap(), &holidays).unwrap().is_empty());
}
