//! Bank account and transaction payloads.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxnType {
    /// Money in.
    Credit,
    /// Money out.
    Debit,
}

impl std::str::FromStr for TxnType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "credit" => Ok(TxnType::Credit),
            "debit" => Ok(TxnType::Debit),
            _ => Err(format!("Unknown transaction type: {value}")),
        }
    }
}

/// One entry of the `GET /transactions/bank-accounts` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub account_id: Uuid,
    pub bank_name: String,
    pub account_type: String,
    pub is_primary: bool,
    pub current_balance_inr: f64,
    pub last_synced_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

/// Request body for `POST /manual/bank-accounts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBankAccount {
    pub account_number: String,
    pub bank_name: String,
    pub account_type: String,
    pub is_primary: bool,
}

/// Request body for `POST /manual/transactions` (and each element of the
/// bulk variant).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub account_id: Uuid,
    pub txn_timestamp: NaiveDateTime,
    pub amount_inr: f64,
    pub txn_type: TxnType,
    pub balance_after_txn: f64,
    pub description: String,
    pub merchant_category: String,
}

/// Stored transaction as the server reports it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: Uuid,
    pub account_id: Uuid,
    pub txn_timestamp: NaiveDateTime,
    pub amount_inr: f64,
    pub txn_type: TxnType,
    pub balance_after_txn: f64,
    pub description: String,
    pub merchant_category: String,
    pub is_income: bool,
    pub created_at: NaiveDateTime,
}

/// `POST /transactions/sync` acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncSummary {
    pub status: String,
    pub message: String,
}

/// `POST /manual/analyze` acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeSummary {
    pub status: String,
    pub message: String,
    pub insights_generated: u32,
    pub predictions_generated: u32,
}
