use anyhow::Result;
use tripcheck_core::config::TripcheckConfig;
use tripcheck_core::years_referenced;

use super::load_trips;

pub fn run(config: &TripcheckConfig) -> Result<()> {
    let trips = load_trips(config)?;

    for year in years_referenced(&trips)? {
        println!("{year}");
    }

    Ok(())
}
