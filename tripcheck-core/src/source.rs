//! Where holidays come from.
//!
//! Sources follow the public-holiday provider's contract: a failed lookup
//! is logged and yields an empty list, never an error.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::holiday::{Country, Holiday};

#[allow(async_fn_in_trait)]
pub trait HolidaySource {
    /// Holidays for one (year, country) pair, in provider order.
    async fn holidays(&self, year: i32, country_code: &str) -> Vec<Holiday>;

    async fn countries(&self) -> Vec<Country>;
}

/// Reads provider-format JSON from a directory:
///
/// ```text
/// <dir>/countries.json
/// <dir>/<year>/<CC>.json
/// ```
pub struct DirHolidaySource {
    dir: PathBuf,
}

impl DirHolidaySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirHolidaySource { dir: dir.into() }
    }

    pub fn holidays_path(&self, year: i32, country_code: &str) -> PathBuf {
        self.dir
            .join(year.to_string())
            .join(format!("{}.json", country_code.to_uppercase()))
    }

    pub fn countries_path(&self) -> PathBuf {
        self.dir.join("countries.json")
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| e.to_string())?;
    serde_json::from_str(&content).map_err(|e| e.to_string())
}

impl HolidaySource for DirHolidaySource {
    async fn holidays(&self, year: i32, country_code: &str) -> Vec<Holiday> {
        let path = self.holidays_path(year, country_code);

        match read_json(&path).await {
            Ok(holidays) => holidays,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "error fetching holidays");
                Vec::new()
            }
        }
    }

    async fn countries(&self) -> Vec<Country> {
        let path = self.countries_path();

        match read_json(&path).await {
            Ok(countries) => countries,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "error fetching countries");
                vec![Country::fallback()]
            }
        }
    }
}

/// In-memory holidays keyed by (year, country code).
#[derive(Default)]
pub struct StaticHolidaySource {
    holidays: HashMap<(i32, String), Vec<Holiday>>,
    countries: Vec<Country>,
}

impl StaticHolidaySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_holidays(mut self, year: i32, country_code: &str, holidays: Vec<Holiday>) -> Self {
        self.holidays
            .insert((year, country_code.to_uppercase()), holidays);
        self
    }

    pub fn with_country(mut self, country: Country) -> Self {
        self.countries.push(country);
        self
    }
}

impl HolidaySource for StaticHolidaySource {
    async fn holidays(&self, year: i32, country_code: &str) -> Vec<Holiday> {
        self.holidays
            .get(&(year, country_code.to_uppercase()))
            .cloned()
            .unwrap_or_default()
    }

    async fn countries(&self) -> Vec<Country> {
        if self.countries.is_empty() {
            vec![Country::fallback()]
        } else {
            self.countries.clone()
        }
    }
}
