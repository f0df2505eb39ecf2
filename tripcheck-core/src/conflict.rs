//! Trip/holiday conflict detection.
//!
//! A trip conflicts when at least one holiday date falls inside its
//! `[start, end]` interval, both ends inclusive. The result is recomputed
//! from scratch on every call; nothing is cached.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::error::ConflictError;
use crate::holiday::Holiday;
use crate::trip::Trip;

/// A trip paired with the holidays that fall inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    pub trip: Trip,
    pub conflicting_holidays: Vec<Holiday>,
}

/// Find every trip that overlaps one or more holidays.
///
/// Conflicts keep the input trip order, and holidays within a conflict keep
/// the input holiday order. Trips without a match are left out. All dates are
/// validated up front, so a malformed date fails the call even if it would
/// never have matched anything.
pub fn detect_conflicts(trips: &[Trip], holidays: &[Holiday]) -> Result<Vec<Conflict>, ConflictError> {
    let holiday_dates = holidays
        .iter()
        .map(Holiday::date)
        .collect::<Result<Vec<_>, _>>()?;

    let intervals = trips
        .iter()
        .map(|trip| -> Result<_, ConflictError> { Ok((trip.start()?, trip.end()?)) })
        .collect::<Result<Vec<_>, _>>()?;

    let conflicts: Vec<Conflict> = trips
        .iter()
        .zip(intervals)
        .filter_map(|(trip, (start, end))| {
            let conflicting_holidays: Vec<Holiday> = holidays
                .iter()
                .zip(&holiday_dates)
                .filter(|(_, date)| start <= **date && **date <= end)
                .map(|(holiday, _)| holiday.clone())
                .collect();

            (!conflicting_holidays.is_empty()).then(|| Conflict {
                trip: trip.clone(),
                conflicting_holidays,
            })
        })
        .collect();

    tracing::debug!(
        trips = trips.len(),
        holidays = holidays.len(),
        conflicts = conflicts.len(),
        "detected trip conflicts"
    );

    Ok(conflicts)
}

/// Distinct years touched by any trip's start or end date, ascending.
/// Falls back to the current year when there are no trips.
pub fn years_referenced(trips: &[Trip]) -> Result<Vec<i32>, ConflictError> {
    years_referenced_at(trips, CalendarDate::today().year())
}

/// Like [`years_referenced`], with an explicit fallback year.
pub fn years_referenced_at(trips: &[Trip], fallback_year: i32) -> Result<Vec<i32>, ConflictError> {
    let mut years = BTreeSet::new();
    for trip in trips {
        years.insert(trip.start()?.year());
        years.insert(trip.end()?.year());
    }

    if years.is_empty() {
        years.insert(fallback_year);
    }

    Ok(years.into_iter().collect())
}
