//! Configuration management for Evenly.
//!
//! Loads configuration from ${EVENLY_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
pub fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for Evenly configuration and data directories.
    //!
    //! EVENLY_HOME resolution order:
    //! 1. EVENLY_HOME environment variable (if set)
    //! 2. ~/.config/evenly (default)

    use std::path::PathBuf;

    /// Returns the Evenly home directory.
    ///
    /// Checks EVENLY_HOME env var first, falls back to ~/.config/evenly
    pub fn evenly_home() -> PathBuf {
        if let Ok(home) = std::env::var("EVENLY_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("evenly"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        evenly_home().join("config.toml")
    }

    /// Returns the path to the persisted bearer token file.
    pub fn token_path() -> PathBuf {
        evenly_home().join("token.json")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        evenly_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the backend API (no trailing slash)
    pub api_base_url: String,

    /// Request timeout in seconds (0 disables)
    pub request_timeout_secs: u32,
}

impl Config {
    pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
    const DEFAULT_TIMEOUT_SECS: u32 = 30;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Resolves the API base URL with precedence: env > config > default.
    ///
    /// # Errors
    /// Returns an error if the resolved value is not a valid URL.
    pub fn resolve_base_url(&self) -> Result<String> {
        let env_url = std::env::var("EVENLY_API_URL").ok();
        resolve_base_url_from(env_url.as_deref(), &self.api_base_url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: Self::DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: Self::DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn resolve_base_url_from(env_value: Option<&str>, config_value: &str) -> Result<String> {
    // Try env var first
    if let Some(env_url) = env_value {
        let trimmed = env_url.trim();
        if !trimmed.is_empty() {
            validate_url(trimmed)?;
            return Ok(trimmed.trim_end_matches('/').to_string());
        }
    }

    // Then config value
    let trimmed = config_value.trim();
    if !trimmed.is_empty() {
        validate_url(trimmed)?;
        return Ok(trimmed.trim_end_matches('/').to_string());
    }

    Ok(Config::DEFAULT_BASE_URL.to_string())
}

/// Validates that a URL is well-formed.
fn validate_url(url: &str) -> Result<()> {
    url::Url::parse(url).with_context(|| format!("Invalid API base URL: {url}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    /// Missing config file yields defaults.
    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.api_base_url, Config::DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout_secs, 30);
    }

    /// Partial config files fall back to serde defaults for missing fields.
    #[test]
    fn test_load_partial_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_base_url = \"https://api.evenly.example\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api_base_url, "https://api.evenly.example");
        assert_eq!(config.request_timeout_secs, 30);
    }

    /// Garbage config files surface a parse error, not defaults.
    #[test]
    fn test_load_invalid_config_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_base_url = [not toml").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    /// Env value wins over the config value and trailing slashes are dropped.
    #[test]
    fn test_resolve_base_url_env_precedence() {
        let resolved =
            resolve_base_url_from(Some("https://env.example/"), "https://config.example").unwrap();
        assert_eq!(resolved, "https://env.example");
    }

    /// Blank env values fall through to the config value.
    #[test]
    fn test_resolve_base_url_blank_env_falls_back() {
        let resolved = resolve_base_url_from(Some("  "), "https://config.example").unwrap();
        assert_eq!(resolved, "https://config.example");
    }

    /// Malformed URLs are rejected.
    #[test]
    fn test_resolve_base_url_invalid() {
        assert!(resolve_base_url_from(None, "not a url").is_err());
    }

    /// The embedded template parses to the same values as Config::default().
    #[test]
    fn test_default_template_matches_defaults() {
        let from_template: Config = toml::from_str(default_config_template()).unwrap();
        assert_eq!(from_template.api_base_url, Config::default().api_base_url);
    }
}
