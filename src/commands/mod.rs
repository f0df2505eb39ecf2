pub mod add;
pub mod conflicts;
pub mod countries;
pub mod edit;
pub mod holidays;
pub mod remove;
pub mod trips;
pub mod years;

use anyhow::{Context, Result};
use tripcheck_core::config::TripcheckConfig;
use tripcheck_core::source::HolidaySource;
use tripcheck_core::store::load_or_seed;
use tripcheck_core::{CalendarDate, Holiday, Trip};

/// Stored trips, seeding the sample trips on first use.
pub fn load_trips(config: &TripcheckConfig) -> Result<Vec<Trip>> {
    let store = config.trip_store();
    load_or_seed(&store, CalendarDate::today().year())
        .with_context(|| format!("Could not load trips from {}", store.path().display()))
}

pub async fn load_holidays(config: &TripcheckConfig, country: &str, year: i32) -> Vec<Holiday> {
    let holidays = config.holiday_source().holidays(year, country).await;
    if holidays.is_empty() {
        tracing::warn!(country, year, "no holiday data available");
    }
    holidays
}
