//! Typed records for the Evenly REST API.
//!
//! One module per backend resource. Every endpoint's request and response
//! body has a named record here; the only open-ended field in the whole
//! contract is `Insight::supporting_metrics`, which stays a JSON object map.

pub mod auth;
pub mod income;
pub mod insights;
pub mod predictions;
pub mod smoothing;
pub mod transactions;

pub use auth::{RegisterRequest, TokenResponse, UserProfile};
pub use income::IncomeSource;
pub use insights::{Insight, InsightSeverity, StabilityScore, StatusAck};
pub use predictions::{CashflowPrediction, GenerateSummary, RiskLevel, SafeToSpend};
pub use smoothing::{ReleaseCalculation, SmoothingBuffer, WeeklyRelease};
pub use transactions::{
    AnalyzeSummary, BankAccount, NewBankAccount, NewTransaction, SyncSummary, Transaction, TxnType,
};
