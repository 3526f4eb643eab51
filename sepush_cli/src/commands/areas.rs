use anyhow::Result;
use clap::Args;
use sepush_api::types::{AreaInformation, AreasResponse};
use sepush_api::{parse_as, AreaTest, Client};

use crate::output::{print_area_table, print_areas_table, print_json, OutputFormat};

#[derive(Args)]
pub struct SearchArgs {
    /// Area name to search for, e.g. "Sea Point"
    #[arg(long)]
    pub text: String,
}

#[derive(Args)]
pub struct AreaArgs {
    /// Area ID as returned by `search` or `areas-nearby`
    #[arg(long)]
    pub id: String,

    /// Schedule to return: current, or future for generated test events
    #[arg(long, default_value = "current")]
    pub test: AreaTest,
}

#[derive(Args)]
pub struct NearbyArgs {
    /// Latitude, e.g. -33.9
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude, e.g. 18.4
    #[arg(long, allow_hyphen_values = true)]
    pub long: f64,
}

pub async fn run_search(args: &SearchArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let payload = client.areas_search(args.text.as_str()).await?;
    print_areas(payload, format)
}

pub async fn run_area(args: &AreaArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let payload = client.area_information(args.id.as_str(), Some(args.test)).await?;
    match format {
        OutputFormat::Json => print_json(&payload)?,
        OutputFormat::Table => print_area_table(&parse_as::<AreaInformation>(payload)?),
    }
    Ok(())
}

pub async fn run_nearby(args: &NearbyArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let payload = client.areas_nearby(args.lat, args.long).await?;
    print_areas(payload, format)
}

fn print_areas(payload: serde_json::Value, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&payload)?,
        OutputFormat::Table => {
            let resp: AreasResponse = parse_as(payload)?;
            if resp.areas.is_empty() {
                println!("No areas found");
            } else {
                print_areas_table(&resp.areas);
            }
        }
    }
    Ok(())
}
