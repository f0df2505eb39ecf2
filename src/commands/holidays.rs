use anyhow::Result;
use owo_colors::OwoColorize;
use tripcheck_core::config::TripcheckConfig;
use tripcheck_core::detect_conflicts;

use super::{load_holidays, load_trips};
use crate::render::{Render, pluralize};

pub async fn run(config: &TripcheckConfig, country: &str, year: i32) -> Result<()> {
    let holidays = load_holidays(config, country, year).await;
    if holidays.is_empty() {
        println!(
            "{}",
            format!(
                "No holidays for {country} {year}. Expected {}",
                config.holiday_source().holidays_path(year, country).display()
            )
            .dimmed()
        );
        return Ok(());
    }

    let trips = load_trips(config)?;
    let conflicts = detect_conflicts(&trips, &holidays)?;

    println!(
        "{}",
        format!("{} public {} ({country}, {year})", holidays.len(), pluralize("holiday", holidays.len()))
            .dimmed()
    );

    for holiday in &holidays {
        let during: Vec<&str> = conflicts
            .iter()
            .filter(|c| c.conflicting_holidays.contains(holiday))
            .map(|c| c.trip.title.as_str())
            .collect();

        if during.is_empty() {
            println!("  {}", holiday.render());
        } else {
            println!(
                "{} {} {}",
                "!".red(),
                holiday.render(),
                format!("during {}", during.join(", ")).red()
            );
        }
    }

    Ok(())
}
