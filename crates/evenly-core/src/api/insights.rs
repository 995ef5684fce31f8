//! `/insights` endpoints.

use evenly_types::{Insight, StabilityScore, StatusAck};
use uuid::Uuid;

use super::{ApiClient, ApiResult};

impl ApiClient {
    /// `GET /insights/`, optionally restricted to unread entries.
    pub async fn insights(&self, unread_only: bool) -> ApiResult<Vec<Insight>> {
        let unread = if unread_only { "true" } else { "false" };
        self.get_with_query("/insights/", &[("unread_only", unread)])
            .await
    }

    /// `GET /insights/stability-score`.
    pub async fn stability_score(&self) -> ApiResult<StabilityScore> {
        self.get("/insights/stability-score").await
    }

    /// `PATCH /insights/{id}/read`.
    pub async fn mark_insight_read(&self, insight_id: Uuid) -> ApiResult<StatusAck> {
        self.patch_empty(&format!("/insights/{insight_id}/read"))
            .await
    }

    /// `PATCH /insights/{id}/dismiss`.
    pub async fn dismiss_insight(&self, insight_id: Uuid) -> ApiResult<StatusAck> {
        self.patch_empty(&format!("/insights/{insight_id}/dismiss"))
            .await
    }
}
