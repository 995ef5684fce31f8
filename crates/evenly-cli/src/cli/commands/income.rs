//! Income sources breakdown.

use anyhow::Result;
use comfy_table::Table;
use evenly_core::config::Config;
use evenly_tui::common::text::{format_inr, format_opt_date};

use super::{authed_client, fail};

pub async fn list(config: &Config) -> Result<()> {
    let client = authed_client(config)?;
    let sources = client.income_sources().await.map_err(fail)?;

    if sources.is_empty() {
        println!("No income sources detected yet. Add transactions and run `evenly analyze`.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        "Source",
        "Category",
        "Avg monthly",
        "Share",
        "Stability",
        "Last payment",
    ]);
    for s in &sources {
        table.add_row(vec![
            s.source_name.clone(),
            s.source_category.clone(),
            format_inr(s.avg_monthly_inr),
            format!("{:.1}%", s.contribution_pct),
            format!("{:.2}", s.stability_score),
            format_opt_date(s.last_payment_date),
        ]);
    }
    println!("{table}");
    Ok(())
}
