use std::collections::HashMap;

use anyhow::Result;
use owo_colors::OwoColorize;
use tripcheck_core::config::TripcheckConfig;
use tripcheck_core::detect_conflicts;

use super::{load_holidays, load_trips};
use crate::render::{Render, pluralize};

pub async fn run(config: &TripcheckConfig, country: &str, year: i32) -> Result<()> {
    let trips = load_trips(config)?;
    let holidays = load_holidays(config, country, year).await;
    let conflicts = detect_conflicts(&trips, &holidays)?;

    let conflict_counts: HashMap<&str, usize> = conflicts
        .iter()
        .map(|c| (c.trip.id.as_str(), c.conflicting_holidays.len()))
        .collect();

    println!(
        "{}",
        format!("{} {} ({country}, {year})", trips.len(), pluralize("trip", trips.len())).dimmed()
    );

    for trip in &trips {
        let marker = match conflict_counts.get(trip.id.as_str()) {
            Some(&n) => format!("{n} {}", pluralize("conflict", n)).red().to_string(),
            None => "ok".green().to_string(),
        };
        println!("{} {} {}", trip.id.dimmed(), marker, trip.render());
    }

    Ok(())
}
