//! Transaction sync.

use anyhow::Result;
use evenly_core::config::Config;

use super::{authed_client, fail};

pub async fn run(config: &Config) -> Result<()> {
    let client = authed_client(config)?;

    let summary = client.sync_transactions().await.map_err(fail)?;
    println!("{}", summary.message);

    let generated = client.generate_predictions().await.map_err(fail)?;
    println!("Regenerated {} predictions.", generated.predictions_generated);
    Ok(())
}
