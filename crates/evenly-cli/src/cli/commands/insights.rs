//! AI insights.

use anyhow::Result;
use comfy_table::Table;
use evenly_core::config::Config;
use evenly_tui::common::text::format_date;
use uuid::Uuid;

use super::{authed_client, fail};

pub async fn list(config: &Config, unread_only: bool) -> Result<()> {
    let client = authed_client(config)?;
    let insights = client.insights(unread_only).await.map_err(fail)?;

    if insights.is_empty() {
        println!("No insights. Run `evenly sync` or `evenly analyze` to generate some.");
        return Ok(());
    }

    let score = client.stability_score().await.map_err(fail)?;
    println!(
        "Income stability: {:.0}% ({})",
        score.stability_score * 100.0,
        score.interpretation
    );

    let mut table = Table::new();
    table.set_header(vec!["Id", "Date", "Severity", "Type", "Read", "Insight"]);
    for insight in &insights {
        table.add_row(vec![
            insight.insight_id.to_string(),
            format_date(insight.created_at),
            insight.severity.label().to_string(),
            insight.insight_type.clone(),
            if insight.is_read { "yes" } else { "no" }.to_string(),
            insight.explanation_text.clone(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub async fn mark_read(config: &Config, id: Uuid) -> Result<()> {
    let client = authed_client(config)?;
    client.mark_insight_read(id).await.map_err(fail)?;
    println!("Marked {id} as read.");
    Ok(())
}

pub async fn dismiss(config: &Config, id: Uuid) -> Result<()> {
    let client = authed_client(config)?;
    client.dismiss_insight(id).await.map_err(fail)?;
    println!("Dismissed {id}.");
    Ok(())
}
