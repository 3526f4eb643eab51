mod commands;
mod output;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sepush_api::{Client, ClientConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "sepush")]
#[command(about = "Query load-shedding status and schedules from EskomSePush")]
struct Cli {
    /// API token
    #[arg(long, env = "SEPUSH_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    /// API host, for pointing at a mock server
    #[arg(long, env = "SEPUSH_BASE_URL", global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds; 0 keeps the default
    #[arg(long, env = "SEPUSH_TIMEOUT_SECS", global = true)]
    timeout: Option<u64>,

    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the remaining API allowance
    #[command(alias = "quota")]
    Allowance,
    /// Show the current load-shedding stage
    Status,
    /// Search areas by name
    Search(commands::areas::SearchArgs),
    /// Show events and schedule for one area
    Area(commands::areas::AreaArgs),
    /// List areas near a coordinate
    AreasNearby(commands::areas::NearbyArgs),
    /// List community topics near a coordinate
    TopicsNearby(commands::areas::NearbyArgs),
}

impl Cli {
    fn client(&self) -> Result<Client> {
        let mut config = ClientConfig::new(self.token.as_deref())?;
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url);
        }
        if let Some(secs) = self.timeout.filter(|secs| *secs > 0) {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(Client::with_config(config)?)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sepush=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = OutputFormat::from_arg(&cli.output);

    let client = cli.client()?;

    let result = match &cli.command {
        Commands::Allowance => commands::status::run_allowance(&client, &format).await,
        Commands::Status => commands::status::run_status(&client, &format).await,
        Commands::Search(args) => commands::areas::run_search(args, &client, &format).await,
        Commands::Area(args) => commands::areas::run_area(args, &client, &format).await,
        Commands::AreasNearby(args) => commands::areas::run_nearby(args, &client, &format).await,
        Commands::TopicsNearby(args) => commands::topics::run(args, &client, &format).await,
    };

    if let Err(err) = &result {
        if let Some(detail) = err
            .downcast_ref::<sepush_api::Error>()
            .and_then(sepush_api::Error::upstream_message)
        {
            tracing::warn!("API said: {}", detail);
        }
    }
    result
}
