//! Typed API client errors.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Categories of API errors for consistent handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    /// Credential rejection (401) on a token-bearing call. The coordinator
    /// clears the session when it sees this.
    Unauthorized,
    /// Any other non-success HTTP status; carries the server's detail
    /// message when one was sent.
    Status,
    /// Connection, DNS or timeout failure before a status was received.
    Network,
    /// The response body did not match the expected record.
    Decode,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Unauthorized => write!(f, "unauthorized"),
            ApiErrorKind::Status => write!(f, "status"),
            ApiErrorKind::Network => write!(f, "network"),
            ApiErrorKind::Decode => write!(f, "decode"),
        }
    }
}

/// Structured error from the API client with kind and details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error category
    pub kind: ApiErrorKind,
    /// HTTP status, when one was received
    pub status: Option<u16>,
    /// One-line summary suitable for display
    pub message: String,
    /// Optional additional details (e.g., raw error body)
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a credential-rejection error from a 401 response body.
    pub fn unauthorized(body: &str) -> Self {
        Self {
            kind: ApiErrorKind::Unauthorized,
            status: Some(401),
            message: extract_detail(body).unwrap_or_else(|| "Not authenticated".to_string()),
            details: non_empty(body),
        }
    }

    /// Creates an HTTP status error, extracting the server's `detail`
    /// message when the body carries one.
    pub fn status(status: u16, body: &str) -> Self {
        let message = match extract_detail(body) {
            Some(detail) => detail,
            None => format!("HTTP {status}"),
        };
        Self {
            kind: ApiErrorKind::Status,
            status: Some(status),
            message,
            details: non_empty(body),
        }
    }

    /// Creates a transport-level error.
    pub fn network(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "Request timed out".to_string()
        } else {
            "Request failed".to_string()
        };
        Self {
            kind: ApiErrorKind::Network,
            status: None,
            message,
            details: Some(err.to_string()),
        }
    }

    /// Creates a body-decode error.
    pub fn decode(err: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Decode,
            status: None,
            message: "Unexpected response from server".to_string(),
            details: Some(err.to_string()),
        }
    }

    /// Returns true if this is the credential-rejection variant the
    /// coordinator must react to.
    pub fn is_unauthorized(&self) -> bool {
        self.kind == ApiErrorKind::Unauthorized
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for API operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Pulls the `detail` string out of a FastAPI-style error body.
fn extract_detail(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    json.get("detail")
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn non_empty(body: &str) -> Option<String> {
    if body.is_empty() {
        None
    } else {
        Some(body.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The server's detail message is surfaced verbatim.
    #[test]
    fn test_status_extracts_detail() {
        let err = ApiError::status(400, r#"{"detail":"Email already registered"}"#);
        assert_eq!(err.message, "Email already registered");
        assert_eq!(err.status, Some(400));
        assert!(!err.is_unauthorized());
    }

    /// Bodies without a detail field fall back to the status line.
    #[test]
    fn test_status_without_detail() {
        let err = ApiError::status(502, "<html>bad gateway</html>");
        assert_eq!(err.message, "HTTP 502");
        assert_eq!(err.details.as_deref(), Some("<html>bad gateway</html>"));
    }

    /// Unauthorized keeps its kind even when the body has a detail.
    #[test]
    fn test_unauthorized_kind() {
        let err = ApiError::unauthorized(r#"{"detail":"Could not validate credentials"}"#);
        assert!(err.is_unauthorized());
        assert_eq!(err.message, "Could not validate credentials");
    }
}
