//! `/predictions` endpoints.

use evenly_types::{CashflowPrediction, GenerateSummary, SafeToSpend};

use super::{ApiClient, ApiResult};

impl ApiClient {
    /// `GET /predictions/safe-to-spend`.
    pub async fn safe_to_spend(&self) -> ApiResult<SafeToSpend> {
        self.get("/predictions/safe-to-spend").await
    }

    /// `GET /predictions/`.
    pub async fn predictions(&self) -> ApiResult<Vec<CashflowPrediction>> {
        self.get("/predictions/").await
    }

    /// `POST /predictions/generate`. Regenerates the 7/30/60-day windows
    /// server-side.
    pub async fn generate_predictions(&self) -> ApiResult<GenerateSummary> {
        self.post_empty("/predictions/generate").await
    }
}
