//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations), so
//! the reducer stays synchronous: it mutates state and returns effects,
//! never performs network or file I/O itself.
//!
//! The one exception to "no I/O in the reducer" is the session's token
//! store: persisting the token is part of the session ops' contract, so it
//! happens wherever `set_token`/`logout` are called.

use evenly_types::{NewBankAccount, NewTransaction, RegisterRequest};
use uuid::Uuid;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Fetch the current user profile (after login or session restore).
    FetchProfile,

    /// Exchange credentials for a bearer token.
    Login { email: String, password: String },

    /// Create an account.
    Register { request: Box<RegisterRequest> },

    /// Load the dashboard's three data sets (wait-all join).
    LoadDashboard,

    /// Load income sources.
    LoadIncome,

    /// Load buffer and weekly releases (wait-all join).
    LoadSmoothing,

    /// Load insights, optionally unread-only.
    LoadInsights { unread_only: bool },

    /// Load bank accounts for the manual entry view.
    LoadAccounts,

    /// Trigger a transaction sync plus prediction regeneration.
    SyncData,

    /// Ask the server for this week's recommended release.
    CalculateRelease,

    /// Mark an insight read.
    MarkInsightRead { insight_id: Uuid },

    /// Dismiss an insight.
    DismissInsight { insight_id: Uuid },

    /// Submit a manually entered transaction.
    SubmitTransaction { txn: Box<NewTransaction> },

    /// Read, parse and submit a CSV file as one bulk call.
    SubmitBulk { path: String, account_id: Uuid },

    /// Create a bank account.
    SubmitAccount { account: NewBankAccount },

    /// Run server-side analysis over manually entered data.
    Analyze,

    /// Write the CSV template next to the current directory.
    SaveTemplate,
}
