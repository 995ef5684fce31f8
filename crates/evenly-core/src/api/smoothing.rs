//! `/smoothing` endpoints.

use evenly_types::{ReleaseCalculation, SmoothingBuffer, WeeklyRelease};

use super::{ApiClient, ApiResult};

impl ApiClient {
    /// `GET /smoothing/buffer`.
    pub async fn buffer(&self) -> ApiResult<SmoothingBuffer> {
        self.get("/smoothing/buffer").await
    }

    /// `GET /smoothing/weekly-releases`.
    pub async fn weekly_releases(&self) -> ApiResult<Vec<WeeklyRelease>> {
        self.get("/smoothing/weekly-releases").await
    }

    /// `POST /smoothing/calculate-release`.
    pub async fn calculate_release(&self) -> ApiResult<ReleaseCalculation> {
        self.post_empty("/smoothing/calculate-release").await
    }
}
