//! Bulk CSV import.

use anyhow::{Context, Result};
use evenly_core::bulk;
use evenly_core::config::Config;
use uuid::Uuid;

use super::{authed_client, fail};

pub async fn run(
    config: &Config,
    account: Option<Uuid>,
    file: Option<&str>,
    template: bool,
) -> Result<()> {
    if template {
        std::fs::write(bulk::TEMPLATE_FILENAME, bulk::TEMPLATE)
            .with_context(|| format!("write {}", bulk::TEMPLATE_FILENAME))?;
        println!("Template written to {}.", bulk::TEMPLATE_FILENAME);
        return Ok(());
    }

    let Some(file) = file else {
        anyhow::bail!("Pass --file <path> with CSV data, or --template for a starting point.");
    };

    let client = authed_client(config)?;

    let account_id = match account {
        Some(id) => id,
        None => {
            // With exactly one account there is nothing to choose.
            let accounts = client.bank_accounts().await.map_err(fail)?;
            match accounts.as_slice() {
                [] => anyhow::bail!("No bank accounts. Add one with `evenly accounts add`."),
                [only] => only.account_id,
                _ => anyhow::bail!(
                    "Multiple bank accounts; pass --account <id> (see `evenly accounts list`)."
                ),
            }
        }
    };

    let input = std::fs::read_to_string(file).with_context(|| format!("read {file}"))?;
    let txns = bulk::parse_transactions(account_id, &input)?;

    let created = client.create_transactions_bulk(&txns).await.map_err(fail)?;
    println!("Imported {} transactions.", created.len());
    Ok(())
}
