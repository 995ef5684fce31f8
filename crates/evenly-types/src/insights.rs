//! AI insight payloads.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Severity tag attached by the insight generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightSeverity {
    Info,
    Warning,
    Critical,
}

impl InsightSeverity {
    pub fn label(self) -> &'static str {
        match self {
            InsightSeverity::Info => "info",
            InsightSeverity::Warning => "warning",
            InsightSeverity::Critical => "critical",
        }
    }
}

/// A server-generated observation about the user's financial pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub insight_id: Uuid,
    pub insight_type: String,
    pub severity: InsightSeverity,
    pub explanation_text: String,
    /// Free-form metrics backing the insight; shape varies per insight type.
    #[serde(default)]
    pub supporting_metrics: Map<String, Value>,
    pub is_read: bool,
    pub is_dismissed: bool,
    pub created_at: NaiveDateTime,
}

/// `GET /insights/stability-score` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StabilityScore {
    /// 0.0 to 1.0.
    pub stability_score: f64,
    /// Server-side bucket: "High", "Medium" or "Low".
    pub interpretation: String,
}

/// Bare `{"status": "success"}` acknowledgement used by the PATCH endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusAck {
    pub status: String,
}
