use anyhow::Result;
use sepush_api::types::TopicsResponse;
use sepush_api::{parse_as, Client};

use super::areas::NearbyArgs;
use crate::output::{print_json, print_topics_table, OutputFormat};

pub async fn run(args: &NearbyArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let payload = client.topics_nearby(args.lat, args.long).await?;
    match format {
        OutputFormat::Json => print_json(&payload)?,
        OutputFormat::Table => {
            let resp: TopicsResponse = parse_as(payload)?;
            print_topics_table(&resp.topics);
        }
    }
    Ok(())
}
