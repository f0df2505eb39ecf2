//! Error types for tripcheck.

use thiserror::Error;

/// A string that is not a strict `YYYY-MM-DD` calendar date.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid date '{value}'. Expected YYYY-MM-DD")]
pub struct DateError {
    pub value: String,
}

/// Trip record failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TripError {
    #[error("Trip {field} must not be empty")]
    Empty { field: &'static str },

    #[error("Trip {field}: {source}")]
    InvalidDate {
        field: &'static str,
        #[source]
        source: DateError,
    },

    #[error("Trip ends ({end}) before it starts ({start})")]
    EndsBeforeStart { start: String, end: String },
}

/// A record reaching the conflict detector carried a malformed date.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConflictError {
    #[error("Trip '{trip_id}' has an invalid {field} '{value}'")]
    InvalidTripDate {
        trip_id: String,
        field: &'static str,
        value: String,
    },

    #[error("Holiday '{name}' has an invalid date '{value}'")]
    InvalidHolidayDate { name: String, value: String },
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Could not access trip store at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Trip store at {path} is corrupt: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not serialize trips: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
#[error("Configuration error: {0}")]
pub struct ConfigError(pub String);
