//! Bearer token storage and retrieval.
//!
//! Stores the token in `<base>/token.json` with restricted permissions
//! (0600). The token is never logged or displayed in full. No expiry logic
//! lives here; the token's lifetime is managed entirely by [`Session`].
//!
//! [`Session`]: super::Session

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::paths;

/// On-disk shape of the token file.
#[derive(Debug, Serialize, Deserialize)]
struct StoredToken {
    access_token: String,
}

/// Durable single-slot store for the bearer token.
///
/// The sole source of truth for session restoration across restarts.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Creates a store at the default location under `$EVENLY_HOME`.
    pub fn new() -> Self {
        Self::at(paths::token_path())
    }

    /// Creates a store at a specific path (used by tests).
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads the persisted token, if any.
    ///
    /// A missing file means no token. An unreadable or malformed file is
    /// treated the same way, with a warning; the next `write` replaces it.
    pub fn read(&self) -> Option<String> {
        if !self.path.exists() {
            return None;
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                tracing::warn!("unreadable token file {}: {err}", self.path.display());
                return None;
            }
        };

        match serde_json::from_str::<StoredToken>(&contents) {
            Ok(stored) if !stored.access_token.is_empty() => Some(stored.access_token),
            Ok(_) => None,
            Err(err) => {
                tracing::warn!("malformed token file {}: {err}", self.path.display());
                None
            }
        }
    }

    /// Persists a token with restricted permissions (0600).
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn write(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(&StoredToken {
            access_token: token.to_string(),
        })
        .context("Failed to serialize token")?;

        // Write with restricted permissions
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.path)
                .with_context(|| format!("Failed to open {} for writing", self.path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        #[cfg(not(unix))]
        {
            fs::write(&self.path, contents)
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        Ok(())
    }

    /// Deletes the persisted token. A no-op if none exists.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        }
        Ok(())
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}
