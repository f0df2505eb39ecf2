use anyhow::Result;
use owo_colors::OwoColorize;
use tripcheck_core::config::TripcheckConfig;
use tripcheck_core::source::HolidaySource;

pub async fn run(config: &TripcheckConfig) -> Result<()> {
    for country in config.holiday_source().countries().await {
        let marker = if country.country_code == config.default_country {
            "*".green().to_string()
        } else {
            " ".to_string()
        };
        println!("{} {} {}", marker, country.country_code.bold(), country.name);
    }

    Ok(())
}
