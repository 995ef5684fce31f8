//! Smoothing buffer and weekly releases.

use anyhow::Result;
use comfy_table::Table;
use evenly_core::config::Config;
use evenly_tui::common::text::{format_date, format_inr, format_opt_date};

use super::{authed_client, fail};

pub async fn buffer(config: &Config) -> Result<()> {
    let client = authed_client(config)?;
    let buffer = client.buffer().await.map_err(fail)?;

    println!("Buffer balance:  {}", format_inr(buffer.buffer_balance_inr));
    println!("Total deposited: {}", format_inr(buffer.total_deposited_inr));
    println!("Total released:  {}", format_inr(buffer.total_released_inr));
    println!(
        "Threshold/capacity: {} / {}",
        format_inr(buffer.min_buffer_threshold_inr),
        format_inr(buffer.max_buffer_capacity_inr)
    );
    println!("Risk score: {:.2}", buffer.buffer_risk_score);
    println!(
        "Last deposit {}   last release {}",
        format_opt_date(buffer.last_deposit_date),
        format_opt_date(buffer.last_release_date)
    );
    Ok(())
}

pub async fn releases(config: &Config) -> Result<()> {
    let client = authed_client(config)?;
    let releases = client.weekly_releases().await.map_err(fail)?;

    if releases.is_empty() {
        println!("No weekly releases recorded yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        "Week", "Recommended", "Actual", "Before", "After", "Status",
    ]);
    for r in &releases {
        table.add_row(vec![
            format_date(r.week_start_date),
            format_inr(r.recommended_weekly_release_inr),
            format_inr(r.actual_release_inr),
            format_inr(r.buffer_balance_before_inr),
            format_inr(r.buffer_balance_after_inr),
            if r.is_released { "released" } else { "pending" }.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub async fn calculate(config: &Config) -> Result<()> {
    let client = authed_client(config)?;
    let calc = client.calculate_release().await.map_err(fail)?;

    println!(
        "Recommended weekly release: {}",
        format_inr(calc.recommended_weekly_release_inr)
    );
    println!(
        "Buffer {}   health {:.0}%   risk {:.2}",
        format_inr(calc.buffer_balance_inr),
        calc.buffer_health * 100.0,
        calc.buffer_risk_score
    );
    println!("{}", calc.explanation);
    Ok(())
}
