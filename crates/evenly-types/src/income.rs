//! Income source payloads.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One entry of the `GET /features/income-sources` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeSource {
    pub source_id: Uuid,
    pub source_name: String,
    pub source_category: String,
    pub avg_monthly_inr: f64,
    /// Share of total income, 0-100.
    pub contribution_pct: f64,
    /// 0.0 (erratic) to 1.0 (steady).
    pub stability_score: f64,
    pub last_payment_date: Option<NaiveDateTime>,
}
