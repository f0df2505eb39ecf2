mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tripcheck_core::CalendarDate;
use tripcheck_core::config::TripcheckConfig;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tripcheck")]
#[command(about = "Plan trips and see which public holidays they run into")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List trips with their holiday conflict counts
    Trips {
        #[command(flatten)]
        scope: Scope,
    },
    /// Add a trip
    Add {
        title: String,

        #[arg(short, long)]
        destination: String,

        /// First day of the trip (YYYY-MM-DD)
        #[arg(short, long)]
        start: String,

        /// Last day of the trip, inclusive (YYYY-MM-DD)
        #[arg(short, long)]
        end: String,

        #[arg(long)]
        description: Option<String>,
    },
    /// Change fields of an existing trip
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(short, long)]
        destination: Option<String>,

        #[arg(short, long)]
        start: Option<String>,

        #[arg(short, long)]
        end: Option<String>,

        /// New description ("" to clear)
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a trip
    Remove { id: String },
    /// List public holidays, marking those that fall inside a trip
    Holidays {
        #[command(flatten)]
        scope: Scope,
    },
    /// Show trips that overlap public holidays
    Conflicts {
        #[command(flatten)]
        scope: Scope,

        /// Print conflicts as JSON
        #[arg(long)]
        json: bool,
    },
    /// Years covered by your trips
    Years,
    /// Countries with holiday data
    Countries,
}

#[derive(clap::Args)]
struct Scope {
    /// Country code (defaults to the configured country)
    #[arg(short, long)]
    country: Option<String>,

    /// Holiday year (defaults to the current year)
    #[arg(short, long)]
    year: Option<i32>,
}

impl Scope {
    fn resolve(self, config: &TripcheckConfig) -> (String, i32) {
        let country = self
            .country
            .unwrap_or_else(|| config.default_country.clone())
            .to_uppercase();
        let year = self.year.unwrap_or_else(|| CalendarDate::today().year());
        (country, year)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = TripcheckConfig::load()?;

    match cli.command {
        Commands::Trips { scope } => {
            let (country, year) = scope.resolve(&config);
            commands::trips::run(&config, &country, year).await
        }
        Commands::Add {
            title,
            destination,
            start,
            end,
            description,
        } => commands::add::run(&config, title, destination, start, end, description),
        Commands::Edit {
            id,
            title,
            destination,
            start,
            end,
            description,
        } => commands::edit::run(
            &config,
            &id,
            commands::edit::Changes {
                title,
                destination,
                start,
                end,
                description,
            },
        ),
        Commands::Remove { id } => commands::remove::run(&config, &id),
        Commands::Holidays { scope } => {
            let (country, year) = scope.resolve(&config);
            commands::holidays::run(&config, &country, year).await
        }
        Commands::Conflicts { scope, json } => {
            let (country, year) = scope.resolve(&config);
            commands::conflicts::run(&config, &country, year, json).await
        }
        Commands::Years => commands::years::run(&config),
        Commands::Countries => commands::countries::run(&config).await,
    }
}
