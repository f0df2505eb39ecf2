use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use tripcheck_core::config::TripcheckConfig;
use tripcheck_core::store::TripStore;
use tripcheck_core::Trip;

use crate::render::Render;

/// Fields to overwrite. `None` keeps the current value.
#[derive(Default)]
pub struct Changes {
    pub title: Option<String>,
    pub destination: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub description: Option<String>,
}

impl Changes {
    pub fn apply(self, trip: &mut Trip) {
        if let Some(title) = self.title {
            trip.title = title;
        }
        if let Some(destination) = self.destination {
            trip.destination = destination;
        }
        if let Some(start) = self.start {
            trip.start_date = start;
        }
        if let Some(end) = self.end {
            trip.end_date = end;
        }
        if let Some(description) = self.description {
            trip.description = (!description.trim().is_empty()).then_some(description);
        }
    }
}

pub fn run(config: &TripcheckConfig, id: &str, changes: Changes) -> Result<()> {
    let store = config.trip_store();

    let Some(mut trip) = store.get(id)? else {
        bail!("Trip '{}' not found", id);
    };

    changes.apply(&mut trip);
    trip.validate()?;
    store.upsert(trip.clone())?;

    println!("{} {}", "Updated".yellow(), trip.render());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_keeps_unset_fields() {
        let mut trip = tripcheck_core::trip::sample_trips(2024).remove(1);
        Changes {
            end: Some("2024-12-31".to_string()),
            description: Some(String::new()),
            ..Default::default()
        }
        .apply(&mut trip);

        assert_eq!(trip.title, "Christmas Holiday");
        assert_eq!(trip.start_date, "2024-12-23");
        assert_eq!(trip.end_date, "2024-12-31");
        assert_eq!(trip.description, None);
    }
}
