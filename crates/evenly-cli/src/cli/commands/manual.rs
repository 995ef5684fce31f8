//! Server-side analysis of manually entered data.

use anyhow::Result;
use evenly_core::config::Config;

use super::{authed_client, fail};

pub async fn analyze(config: &Config) -> Result<()> {
    let client = authed_client(config)?;
    let summary = client.analyze().await.map_err(fail)?;

    println!("{}", summary.message);
    println!(
        "Insights generated: {}   predictions generated: {}",
        summary.insights_generated, summary.predictions_generated
    );
    Ok(())
}
