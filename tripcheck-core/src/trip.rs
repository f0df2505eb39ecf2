//! User-planned trips.

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::error::{ConflictError, TripError};

/// A travel interval. Both dates are inclusive.
///
/// Dates are kept as the ISO strings the trip source supplied; they are
/// parsed (and rejected if malformed) when the trip is checked for conflicts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub title: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Trip {
    /// Create a validated trip with a fresh id.
    pub fn new(
        title: impl Into<String>,
        destination: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, TripError> {
        let trip = Trip {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            destination: destination.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            description: description.filter(|d| !d.trim().is_empty()),
        };
        trip.validate()?;
        Ok(trip)
    }

    /// Required fields are present, dates are strict ISO and start <= end.
    pub fn validate(&self) -> Result<(), TripError> {
        if self.title.trim().is_empty() {
            return Err(TripError::Empty { field: "title" });
        }
        if self.destination.trim().is_empty() {
            return Err(TripError::Empty { field: "destination" });
        }

        let start = CalendarDate::parse(&self.start_date)
            .map_err(|source| TripError::InvalidDate { field: "start date", source })?;
        let end = CalendarDate::parse(&self.end_date)
            .map_err(|source| TripError::InvalidDate { field: "end date", source })?;

        if end < start {
            return Err(TripError::EndsBeforeStart {
                start: self.start_date.clone(),
                end: self.end_date.clone(),
            });
        }

        Ok(())
    }

    pub fn start(&self) -> Result<CalendarDate, ConflictError> {
        self.parse_field("start date", &self.start_date)
    }

    pub fn end(&self) -> Result<CalendarDate, ConflictError> {
        self.parse_field("end date", &self.end_date)
    }

    fn parse_field(&self, field: &'static str, value: &str) -> Result<CalendarDate, ConflictError> {
        CalendarDate::parse(value).map_err(|_| ConflictError::InvalidTripDate {
            trip_id: self.id.clone(),
            field,
            value: value.to_string(),
        })
    }
}

/// Demonstration trips used to seed an empty store.
pub fn sample_trips(year: i32) -> Vec<Trip> {
    let trip = |id: &str, title: &str, destination: &str, start: &str, end: &str, desc: &str| Trip {
        id: id.to_string(),
        title: title.to_string(),
        destination: destination.to_string(),
        start_date: format!("{year:04}-{start}"),
        end_date: format!("{year:04}-{end}"),
        description: Some(desc.to_string()),
    };

    vec![
        trip("1", "Summer Vacation", "Hawaii", "07-04", "07-10", "Relaxing beach vacation"),
        trip("2", "Christmas Holiday", "New York", "12-23", "12-27", "Holiday season in the city"),
        trip("3", "Memorial Day Weekend", "Chicago", "05-25", "05-28", "Long weekend getaway"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let a = Trip::new("A", "Paris", "2024-01-01", "2024-01-02", None).unwrap();
        let b = Trip::new("B", "Rome", "2024-01-01", "2024-01-02", None).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_new_rejects_blank_fields() {
        assert_eq!(
            Trip::new("  ", "Paris", "2024-01-01", "2024-01-02", None),
            Err(TripError::Empty { field: "title" })
        );
        assert_eq!(
            Trip::new("Trip", "", "2024-01-01", "2024-01-02", None),
            Err(TripError::Empty { field: "destination" })
        );
    }

    #[test]
    fn test_new_rejects_bad_dates() {
        let err = Trip::new("Trip", "Paris", "2024-1-01", "2024-01-02", None).unwrap_err();
        assert!(matches!(err, TripError::InvalidDate { field: "start date", .. }));

        let err = Trip::new("Trip", "Paris", "2024-01-05", "2024-01-02", None).unwrap_err();
        assert!(matches!(err, TripError::EndsBeforeStart { .. }));
    }

    #[test]
    fn test_single_day_trip_is_valid() {
        assert!(Trip::new("Day trip", "Bath", "2024-03-01", "2024-03-01", None).is_ok());
    }

    #[test]
    fn test_blank_description_dropped() {
        let trip = Trip::new("Trip", "Paris", "2024-01-01", "2024-01-02", Some(" ".into())).unwrap();
        assert_eq!(trip.description, None);
    }

    #[test]
    fn test_json_field_names() {
        let json = r#"{"id":"1","title":"T","destination":"D","startDate":"2024-07-04","endDate":"2024-07-10"}"#;
        let trip: Trip = serde_json::from_str(json).unwrap();
        assert_eq!(trip.start_date, "2024-07-04");
        assert_eq!(trip.description, None);
        assert_eq!(serde_json::to_string(&trip).unwrap(), json);
    }

    #[test]
    fn test_start_error_names_trip() {
        let mut trip = sample_trips(2024).remove(0);
        trip.start_date = "2024-02-30".into();
        assert_eq!(
            trip.start(),
            Err(ConflictError::InvalidTripDate {
                trip_id: "1".into(),
                field: "start date",
                value: "2024-02-30".into(),
            })
        );
    }

    #[test]
    fn test_sample_trips_are_valid() {
        let trips = sample_trips(2025);
        assert_eq!(trips.len(), 3);
        assert_eq!(trips[0].start_date, "2025-07-04");
        assert!(trips.iter().all(|t| t.validate().is_ok()));
    }
}
