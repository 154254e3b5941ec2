mod recommend;

use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use travelsmart_core::Preference;

#[derive(Debug, Parser)]
#[command(name = "travelsmart")]
#[command(about = "Find the quietest, cleanest-air hotels in a city")]
struct Cli {
    /// Hotel dataset CSV; overrides `TRAVELSMART_DATASET_PATH`.
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the cities present in the dataset.
    Cities,
    /// Rank hotels in a city by noise, air quality, and guest rating.
    Recommend {
        /// City name exactly as listed by `cities`.
        #[arg(long)]
        city: String,
        /// What matters most: "quiet-area", "clean-air", or "both".
        #[arg(long, default_value = "quiet-area")]
        preference: Preference,
        /// Only consider hotels whose name contains this text (case-insensitive).
        #[arg(long)]
        search: Option<String>,
        /// Write a Leaflet map of the results to this HTML file.
        #[arg(long)]
        map: Option<PathBuf>,
        /// Print results as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = travelsmart_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let dataset_path = cli.dataset.unwrap_or_else(|| config.dataset_path.clone());
    let dataset = travelsmart_core::load_dataset(&dataset_path)
        .with_context(|| format!("failed to load hotel dataset {}", dataset_path.display()))?;

    match command {
        Commands::Cities => {
            for city in dataset.cities() {
                println!("{city}");
            }
        }
        Commands::Recommend {
            city,
            preference,
            search,
            map,
            json,
        } => {
            let options = recommend::RecommendOptions {
                city,
                preference,
                search,
                map_path: map,
                json,
            };
            recommend::run_recommend(&config, &dataset, options).await?;
        }
    }

    Ok(())
}
