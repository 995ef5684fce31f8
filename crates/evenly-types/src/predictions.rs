//! Cashflow prediction payloads.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Server-assigned risk bucket for a prediction window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Short display label.
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// `GET /predictions/safe-to-spend` response.
///
/// A server-computed conservative daily/weekly spendable amount, with the
/// inputs that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafeToSpend {
    pub daily_safe_spend_inr: f64,
    pub weekly_safe_spend_inr: f64,
    pub predicted_cash_exhaustion_date: Option<NaiveDateTime>,
    pub buffer_balance_inr: f64,
    pub worst_case_income_7d: f64,
    pub fixed_expenses_weekly: f64,
    pub volatility_multiplier: f64,
    pub explanation: String,
}

/// One entry of the `GET /predictions/` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashflowPrediction {
    pub prediction_id: Uuid,
    pub prediction_window_days: i32,
    pub expected_inflow_inr: f64,
    pub expected_outflow_inr: f64,
    pub net_cashflow_inr: f64,
    pub lower_bound_inr: f64,
    pub upper_bound_inr: f64,
    pub risk_level: RiskLevel,
    pub model_used: String,
    pub confidence_score: f64,
    pub created_at: NaiveDateTime,
}

/// `POST /predictions/generate` acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateSummary {
    pub status: String,
    pub predictions_generated: u32,
}
