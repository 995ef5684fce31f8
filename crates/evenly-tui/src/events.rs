//! Events consumed by the reducer.
//!
//! Terminal input and async fetch results funnel into one enum; effect
//! handlers send completions through the runtime inbox.

use crossterm::event::KeyEvent;
use evenly_core::api::ApiError;
use evenly_types::{
    AnalyzeSummary, BankAccount, IncomeSource, Insight, ReleaseCalculation, StatusAck,
    SyncSummary, TokenResponse, Transaction, UserProfile,
};

use crate::features::dashboard::DashboardData;
use crate::features::smoothing::SmoothingData;

/// Which insight action an ack belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightAction {
    MarkRead,
    Dismiss,
}

#[derive(Debug)]
pub enum UiEvent {
    /// Periodic timer tick (spinner animation).
    Tick,
    /// Key press from the terminal.
    Key(KeyEvent),

    // ========================================================================
    // Async results (sent by effect handlers through the inbox)
    // ========================================================================
    ProfileFetched(Result<UserProfile, ApiError>),
    LoginFinished(Result<TokenResponse, ApiError>),
    RegisterFinished(Result<UserProfile, ApiError>),

    DashboardLoaded(Box<Result<DashboardData, ApiError>>),
    IncomeLoaded(Result<Vec<IncomeSource>, ApiError>),
    SmoothingLoaded(Result<SmoothingData, ApiError>),
    InsightsLoaded(Result<Vec<Insight>, ApiError>),
    AccountsLoaded(Result<Vec<BankAccount>, ApiError>),

    SyncFinished(Result<SyncSummary, ApiError>),
    ReleaseCalculated(Result<ReleaseCalculation, ApiError>),
    InsightUpdated(InsightAction, Result<StatusAck, ApiError>),
    TransactionSubmitted(Result<Transaction, ApiError>),
    BulkSubmitted(Result<Vec<Transaction>, ApiError>),
    /// Bulk import failed before reaching the server (file/parse error).
    BulkRejected(String),
    AccountCreated(Result<BankAccount, ApiError>),
    AnalyzeFinished(Result<AnalyzeSummary, ApiError>),
    TemplateSaved(Result<String, String>),
}
