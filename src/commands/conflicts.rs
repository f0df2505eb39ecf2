use anyhow::Result;
use tripcheck_core::config::TripcheckConfig;
use tripcheck_core::detect_conflicts;

use super::{load_holidays, load_trips};
use crate::render::{Render, render_conflict_summary};

pub async fn run(config: &TripcheckConfig, country: &str, year: i32, json: bool) -> Result<()> {
    let trips = load_trips(config)?;
    let holidays = load_holidays(config, country, year).await;
    let conflicts = detect_conflicts(&trips, &holidays)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&conflicts)?);
        return Ok(());
    }

    println!("{}", render_conflict_summary(&conflicts));
    for conflict in &conflicts {
        println!();
        println!("{}", conflict.render());
    }

    Ok(())
}
