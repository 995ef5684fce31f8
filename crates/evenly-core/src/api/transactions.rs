//! `/transactions` endpoints.

use evenly_types::{BankAccount, SyncSummary};

use super::{ApiClient, ApiResult};

impl ApiClient {
    /// `POST /transactions/sync`. Triggers server-side feature extraction
    /// and insight generation over the stored transactions.
    pub async fn sync_transactions(&self) -> ApiResult<SyncSummary> {
        self.post_empty("/transactions/sync").await
    }

    /// `GET /transactions/bank-accounts`.
    pub async fn bank_accounts(&self) -> ApiResult<Vec<BankAccount>> {
        self.get("/transactions/bank-accounts").await
    }
}
