//! Bank accounts.

use anyhow::Result;
use comfy_table::Table;
use evenly_core::config::Config;
use evenly_tui::common::text::format_inr;
use evenly_types::NewBankAccount;

use super::{authed_client, fail};

pub async fn list(config: &Config) -> Result<()> {
    let client = authed_client(config)?;
    let accounts = client.bank_accounts().await.map_err(fail)?;

    if accounts.is_empty() {
        println!("No bank accounts. Add one with `evenly accounts add`.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Id", "Bank", "Type", "Balance", "Primary"]);
    for account in &accounts {
        table.add_row(vec![
            account.account_id.to_string(),
            account.bank_name.clone(),
            account.account_type.clone(),
            format_inr(account.current_balance_inr),
            if account.is_primary { "yes" } else { "" }.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub async fn add(
    config: &Config,
    bank: String,
    number: String,
    account_type: String,
    primary: bool,
) -> Result<()> {
    let client = authed_client(config)?;
    let account = client
        .create_bank_account(&NewBankAccount {
            account_number: number,
            bank_name: bank,
            account_type,
            is_primary: primary,
        })
        .await
        .map_err(fail)?;

    println!("Added {} ({})", account.bank_name, account.account_id);
    Ok(())
}
