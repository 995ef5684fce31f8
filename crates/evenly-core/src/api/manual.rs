//! `/manual` endpoints (manually entered data).

use evenly_types::{AnalyzeSummary, BankAccount, NewBankAccount, NewTransaction, Transaction};

use super::{ApiClient, ApiResult};

impl ApiClient {
    /// `POST /manual/transactions`.
    pub async fn create_transaction(&self, txn: &NewTransaction) -> ApiResult<Transaction> {
        self.post_json("/manual/transactions", txn).await
    }

    /// `POST /manual/transactions/bulk`. One batch call for the whole
    /// import, however many lines it holds.
    pub async fn create_transactions_bulk(
        &self,
        txns: &[NewTransaction],
    ) -> ApiResult<Vec<Transaction>> {
        self.post_json("/manual/transactions/bulk", txns).await
    }

    /// `POST /manual/bank-accounts`.
    pub async fn create_bank_account(&self, account: &NewBankAccount) -> ApiResult<BankAccount> {
        self.post_json("/manual/bank-accounts", account).await
    }

    /// `POST /manual/analyze`. Runs feature extraction, insight generation
    /// and prediction refresh over the manually entered data.
    pub async fn analyze(&self) -> ApiResult<AnalyzeSummary> {
        self.post_empty("/manual/analyze").await
    }
}
