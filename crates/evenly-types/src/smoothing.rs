//! Smoothing buffer payloads.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `GET /smoothing/buffer` response.
///
/// The server-maintained reserve used to even out irregular income.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmoothingBuffer {
    pub buffer_id: Uuid,
    pub buffer_balance_inr: f64,
    pub total_deposited_inr: f64,
    pub total_released_inr: f64,
    pub buffer_risk_score: f64,
    pub min_buffer_threshold_inr: f64,
    pub max_buffer_capacity_inr: f64,
    pub last_deposit_date: Option<NaiveDateTime>,
    pub last_release_date: Option<NaiveDateTime>,
    pub updated_at: NaiveDateTime,
}

/// One entry of the `GET /smoothing/weekly-releases` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyRelease {
    pub release_id: Uuid,
    pub week_start_date: NaiveDateTime,
    pub recommended_weekly_release_inr: f64,
    pub actual_release_inr: f64,
    pub buffer_balance_before_inr: f64,
    pub buffer_balance_after_inr: f64,
    pub is_released: bool,
    pub released_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

/// `POST /smoothing/calculate-release` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseCalculation {
    pub recommended_weekly_release_inr: f64,
    pub buffer_balance_inr: f64,
    /// 0.0 to 1.0 relative to the minimum threshold.
    pub buffer_health: f64,
    pub buffer_risk_score: f64,
    pub worst_case_income: f64,
    pub avg_weekly_income: f64,
    pub explanation: String,
}
