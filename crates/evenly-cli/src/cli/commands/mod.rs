//! Command implementations.

pub mod accounts;
pub mod auth;
pub mod config;
pub mod import;
pub mod income;
pub mod insights;
pub mod manual;
pub mod predictions;
pub mod smoothing;
pub mod sync;

use anyhow::Result;
use evenly_core::api::{ApiClient, ApiError};
use evenly_core::auth::{Session, TokenStore};
use evenly_core::config::Config;

/// Builds a client carrying the stored token, refusing to proceed without
/// one.
pub(crate) fn authed_client(config: &Config) -> Result<ApiClient> {
    let session = Session::restore(TokenStore::new());
    if !session.is_authenticated() {
        anyhow::bail!("Not logged in. Run `evenly login --email <email>` first.");
    }
    Ok(ApiClient::from_config(config)?.with_token(session.token().map(str::to_string)))
}

/// Converts an API error into the command's failure.
///
/// The headless counterpart of the TUI's session coordinator: a rejected
/// token clears the store so the next invocation starts anonymous, and the
/// user is pointed at `evenly login`.
pub(crate) fn fail(err: ApiError) -> anyhow::Error {
    if err.is_unauthorized() {
        if let Err(clear_err) = TokenStore::new().clear() {
            tracing::warn!("failed to clear token store: {clear_err:#}");
        }
        anyhow::anyhow!("Session expired. Run `evenly login` to sign in again.")
    } else {
        anyhow::Error::new(err)
    }
}
