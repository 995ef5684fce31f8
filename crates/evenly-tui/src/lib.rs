//! Full-screen TUI dashboard for Evenly.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod route;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
use evenly_core::api::ApiClient;
use evenly_core::auth::Session;
use evenly_core::config::Config;
pub use route::View;
pub use runtime::TuiRuntime;

/// Runs the interactive dashboard.
///
/// The session is passed in by the caller (restored from the token store);
/// the initial view comes from the route guard, so an anonymous session
/// lands on the login form rather than an empty dashboard.
pub fn run_dashboard(config: &Config, session: Session) -> Result<()> {
    // The dashboard requires a terminal to render
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The dashboard requires a terminal.\n\
             Use the `evenly` subcommands for non-interactive use."
        );
    }

    let client = ApiClient::from_config(config)?;
    let mut runtime = TuiRuntime::new(client, session)?;
    runtime.run()
}
