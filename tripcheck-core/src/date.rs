//! Calendar dates with a strict ISO-8601 parser.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::DateError;

/// A day in the proleptic Gregorian calendar, without time or zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from its parts, or `None` if the day does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(CalendarDate)
    }

    /// Parse exactly `YYYY-MM-DD`.
    ///
    /// Rejects anything else: short or long fields, signs, whitespace,
    /// trailing time components and days that don't exist (`2023-02-29`).
    pub fn parse(s: &str) -> Result<Self, DateError> {
        let invalid = || DateError { value: s.to_string() };

        let bytes = s.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(invalid());
        }

        let digits = |range: std::ops::Range<usize>| -> Option<u32> {
            bytes[range].iter().try_fold(0u32, |acc, b| {
                b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
            })
        };

        let year = digits(0..4).ok_or_else(invalid)?;
        let month = digits(5..7).ok_or_else(invalid)?;
        let day = digits(8..10).ok_or_else(invalid)?;

        Self::from_ymd(year as i32, month, day).ok_or_else(invalid)
    }

    pub fn today() -> Self {
        CalendarDate(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalendarDate::parse(s)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = DateError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        CalendarDate::parse(&s)
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}

/// Human-friendly form, e.g. `Jul 04, 2024`.
pub fn format_date(date: CalendarDate) -> String {
    date.0.format("%b %d, %Y").to_string()
}

/// `Jul 04, 2024 - Jul 10, 2024`
pub fn format_date_range(start: CalendarDate, end: CalendarDate) -> String {
    format!("{} - {}", format_date(start), format_date(end))
}
