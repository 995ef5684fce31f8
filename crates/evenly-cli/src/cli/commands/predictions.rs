//! Cashflow predictions.

use anyhow::Result;
use comfy_table::Table;
use evenly_core::config::Config;
use evenly_tui::common::text::format_inr;

use super::{authed_client, fail};

pub async fn list(config: &Config) -> Result<()> {
    let client = authed_client(config)?;
    let predictions = client.predictions().await.map_err(fail)?;

    if predictions.is_empty() {
        println!("No predictions yet. Run `evenly predictions generate`.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        "Window", "Inflow", "Outflow", "Net", "Lower", "Upper", "Risk", "Confidence", "Model",
    ]);
    for p in &predictions {
        table.add_row(vec![
            format!("{}d", p.prediction_window_days),
            format_inr(p.expected_inflow_inr),
            format_inr(p.expected_outflow_inr),
            format_inr(p.net_cashflow_inr),
            format_inr(p.lower_bound_inr),
            format_inr(p.upper_bound_inr),
            p.risk_level.label().to_string(),
            format!("{:.0}%", p.confidence_score * 100.0),
            p.model_used.clone(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub async fn generate(config: &Config) -> Result<()> {
    let client = authed_client(config)?;
    let summary = client.generate_predictions().await.map_err(fail)?;
    println!("Generated {} predictions.", summary.predictions_generated);
    Ok(())
}
