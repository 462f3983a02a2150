//! Place Atlas - CLI
//!
//! Fetches historically significant places from Wikidata and prints the
//! per-category grouping as JSON.

use anyhow::Result;
use clap::{Parser, Subcommand};
use place_atlas::places::PlacesService;
use place_atlas::wikidata::query::{normalize_query, PLACES_QUERY};
use place_atlas::wikidata::WikidataClient;
use place_atlas::Config;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "place-atlas")]
#[command(about = "Wikidata-backed atlas of historical police-terror sites")]
struct Cli {
    /// Path to the YAML config file (default: ./config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch all places and print the per-category grouping as JSON
    Fetch {
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Print the normalized place-discovery SPARQL query
    Query,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,place_atlas=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch { pretty } => {
            let config = Config::from_yaml_and_env(cli.config.as_deref())?;
            tracing::info!("Querying {}", config.wikidata_url);

            let client = WikidataClient::new(&config.wikidata_url, &config.user_agent)?;
            let service = PlacesService::new(Arc::new(client));

            let grouped = service.query_places().await?;
            let total: usize = grouped.values().map(Vec::len).sum();
            tracing::info!("Grouped {} place entries", total);

            let json = if pretty {
                serde_json::to_string_pretty(&grouped)?
            } else {
                serde_json::to_string(&grouped)?
            };
            println!("{json}");
        }

        Commands::Query => {
            println!("{}", normalize_query(PLACES_QUERY));
        }
    }

    Ok(())
}
