use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use tripcheck_core::config::TripcheckConfig;
use tripcheck_core::store::TripStore;

pub fn run(config: &TripcheckConfig, id: &str) -> Result<()> {
    if !config.trip_store().delete(id)? {
        bail!("Trip '{}' not found", id);
    }

    println!("{} {}", "Removed".red(), id);
    Ok(())
}
