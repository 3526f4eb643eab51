use anyhow::Result;
use sepush_api::types::{AllowanceResponse, StatusResponse};
use sepush_api::{parse_as, Client};

use crate::output::{print_allowance_table, print_json, print_status_table, OutputFormat};

pub async fn run_allowance(client: &Client, format: &OutputFormat) -> Result<()> {
    let payload = client.check_allowance().await?;
    match format {
        OutputFormat::Json => print_json(&payload)?,
        OutputFormat::Table => {
            let resp: AllowanceResponse = parse_as(payload)?;
            if resp.allowance.remaining() == 0 {
                tracing::warn!(
                    "API allowance used up for this {} window",
                    resp.allowance.allowance_type
                );
            }
            print_allowance_table(&resp);
        }
    }
    Ok(())
}

pub async fn run_status(client: &Client, format: &OutputFormat) -> Result<()> {
    let payload = client.status().await?;
    match format {
        OutputFormat::Json => print_json(&payload)?,
        OutputFormat::Table => print_status_table(&parse_as::<StatusResponse>(payload)?),
    }
    Ok(())
}
