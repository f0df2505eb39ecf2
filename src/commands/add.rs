use anyhow::Result;
use owo_colors::OwoColorize;
use tripcheck_core::Trip;
use tripcheck_core::config::TripcheckConfig;
use tripcheck_core::store::TripStore;

use crate::render::Render;

pub fn run(
    config: &TripcheckConfig,
    title: String,
    destination: String,
    start: String,
    end: String,
    description: Option<String>,
) -> Result<()> {
    let trip = Trip::new(title, destination, start, end, description)?;

    config.trip_store().upsert(trip.clone())?;
    tracing::info!(id = %trip.id, "added trip");

    println!("{} {}", "Added".green(), trip.render());
    println!("   {}", format!("id: {}", trip.id).dimmed());
    Ok(())
}
