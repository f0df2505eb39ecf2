//! Public holiday records, in the public-holiday provider's JSON shape.

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::error::ConflictError;

/// A single-date public holiday for a country. Read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub name: String,
    pub local_name: String,
    pub date: String,
    #[serde(default)]
    pub country: String,
    pub country_code: String,
    #[serde(default)]
    pub fixed: bool,
    /// Observed nationwide
    #[serde(default)]
    pub global: bool,
    /// Subregions the holiday applies to (ISO 3166-2), when not global
    #[serde(default)]
    pub counties: Option<Vec<String>>,
    #[serde(default)]
    pub launch_year: Option<i32>,
    #[serde(default)]
    pub types: Vec<String>,
}

impl Holiday {
    pub fn date(&self) -> Result<CalendarDate, ConflictError> {
        CalendarDate::parse(&self.date).map_err(|_| ConflictError::InvalidHolidayDate {
            name: self.name.clone(),
            value: self.date.clone(),
        })
    }
}

/// An entry from the provider's available-countries list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub country_code: String,
    pub name: String,
}

impl Country {
    pub fn fallback() -> Self {
        Country {
            country_code: "US".to_string(),
            name: "United States".to_string(),
        }
    }
}
