//! Log setup.
//!
//! Logs go to daily-rotated files under `$EVENLY_HOME/logs`, never to the
//! terminal: the TUI owns stdout/stderr while it runs. The `EVENLY_LOG`
//! environment variable carries the filter directives (tracing env-filter
//! syntax, default `info`).

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::paths;

/// Env var holding the log filter directives.
const FILTER_ENV: &str = "EVENLY_LOG";

/// Initializes the global tracing subscriber with a file writer.
///
/// Returns the appender guard; the caller must keep it alive for the
/// process lifetime or buffered log lines are dropped on exit.
///
/// # Errors
/// Returns an error if the log directory cannot be created.
pub fn init() -> Result<WorkerGuard> {
    let dir = paths::logs_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(dir, "evenly.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .init();

    Ok(guard)
}
