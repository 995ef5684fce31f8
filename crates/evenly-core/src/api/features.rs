//! `/features` endpoints.

use evenly_types::IncomeSource;

use super::{ApiClient, ApiResult};

impl ApiClient {
    /// `GET /features/income-sources`.
    pub async fn income_sources(&self) -> ApiResult<Vec<IncomeSource>> {
        self.get("/features/income-sources").await
    }
}
