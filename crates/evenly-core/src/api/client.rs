//! Request plumbing shared by every endpoint module.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{ApiError, ApiResult};
use crate::config::Config;

/// Standard User-Agent header for Evenly API requests.
pub const USER_AGENT: &str = concat!("evenly/", env!("CARGO_PKG_VERSION"));

/// How a 401 response is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum AuthPolicy {
    /// 401 means the stored credential was rejected; map to
    /// `ApiErrorKind::Unauthorized` so the coordinator can log out.
    Bearer,
    /// The call itself is a credential exchange (login/register): a 401 is
    /// an ordinary form error and must never cascade into a forced logout.
    CredentialExchange,
}

/// Evenly API client.
///
/// Cheap to clone (the inner reqwest client is reference-counted); the
/// runtime hands a clone with the current token snapshot to each spawned
/// fetch task.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Creates a client against the given base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Creates a client from config, resolving the base URL
    /// (env > config > default) and applying the request timeout.
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be constructed.
    pub fn from_config(config: &Config) -> Result<Self> {
        let base_url = config.resolve_base_url()?;

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if config.request_timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.request_timeout_secs.into()));
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url,
            token: None,
        })
    }

    /// Sets or clears the bearer token attached to subsequent requests.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Returns a clone carrying the given token.
    pub fn with_token(&self, token: Option<String>) -> Self {
        let mut client = self.clone();
        client.set_token(token);
        client
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    // ========================================================================
    // Request helpers
    // ========================================================================

    pub(super) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.execute(self.http.get(self.url(path)), AuthPolicy::Bearer)
            .await
    }

    pub(super) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ApiResult<T> {
        self.execute(self.http.get(self.url(path)).query(query), AuthPolicy::Bearer)
            .await
    }

    pub(super) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.execute(self.http.post(self.url(path)), AuthPolicy::Bearer)
            .await
    }

    pub(super) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.execute(self.http.post(self.url(path)).json(body), AuthPolicy::Bearer)
            .await
    }

    pub(super) async fn patch_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.execute(self.http.patch(self.url(path)), AuthPolicy::Bearer)
            .await
    }

    /// Form-encoded POST on the credential-exchange path (login).
    pub(super) async fn post_form_credential<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> ApiResult<T> {
        self.execute(
            self.http.post(self.url(path)).form(form),
            AuthPolicy::CredentialExchange,
        )
        .await
    }

    /// JSON POST on the credential-exchange path (register).
    pub(super) async fn post_json_credential<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.execute(
            self.http.post(self.url(path)).json(body),
            AuthPolicy::CredentialExchange,
        )
        .await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        policy: AuthPolicy,
    ) -> ApiResult<T> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await.map_err(ApiError::network)?;
        let status = response.status();

        if status.is_success() {
            return response.json().await.map_err(ApiError::decode);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), %body, "API call failed");

        if status == reqwest::StatusCode::UNAUTHORIZED && policy == AuthPolicy::Bearer {
            Err(ApiError::unauthorized(&body))
        } else {
            Err(ApiError::status(status.as_u16(), &body))
        }
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{bearer_token, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::ApiErrorKind;

    async fn server_with(m: Mock) -> MockServer {
        let server = MockServer::start().await;
        m.mount(&server).await;
        server
    }

    /// The bearer token is attached to every token-bearing call.
    #[tokio::test]
    async fn test_bearer_header_attached() {
        let server = server_with(
            Mock::given(method("GET"))
                .and(path("/insights/stability-score"))
                .and(bearer_token("abc123"))
                .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "stability_score": 0.82,
                    "interpretation": "High"
                }))),
        )
        .await;

        let client = ApiClient::new(server.uri()).with_token(Some("abc123".to_string()));
        let score = client.stability_score().await.unwrap();
        assert_eq!(score.interpretation, "High");
    }

    /// A 401 on a token-bearing call maps to Unauthorized, whatever the
    /// endpoint.
    #[tokio::test]
    async fn test_401_maps_to_unauthorized() {
        let server = server_with(
            Mock::given(method("GET")).respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(serde_json::json!({"detail": "Could not validate credentials"})),
            ),
        )
        .await;

        let client = ApiClient::new(server.uri()).with_token(Some("stale".to_string()));
        let err = client.safe_to_spend().await.unwrap_err();
        assert!(err.is_unauthorized());

        let err = client.buffer().await.unwrap_err();
        assert!(err.is_unauthorized());
    }

    /// A 401 from the login exchange is a plain status error: a bad
    /// password must not cascade into a forced logout.
    #[tokio::test]
    async fn test_login_401_is_not_unauthorized() {
        let server = server_with(
            Mock::given(method("POST")).and(path("/auth/login")).respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(serde_json::json!({"detail": "Incorrect email or password"})),
            ),
        )
        .await;

        let client = ApiClient::new(server.uri());
        let err = client
            .login("testuser1@example.com", "wrong")
            .await
            .unwrap_err();

        assert_eq!(err.kind, ApiErrorKind::Status);
        assert_eq!(err.message, "Incorrect email or password");
    }

    /// Login posts form-encoded credentials and returns the token.
    #[tokio::test]
    async fn test_login_success() {
        let server = server_with(
            Mock::given(method("POST"))
                .and(path("/auth/login"))
                .and(wiremock::matchers::body_string_contains(
                    "username=testuser1%40example.com",
                ))
                .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "access_token": "abc123",
                    "token_type": "bearer"
                }))),
        )
        .await;

        let client = ApiClient::new(server.uri());
        let token = client
            .login("testuser1@example.com", "TestPass123")
            .await
            .unwrap();

        assert_eq!(token.access_token, "abc123");
    }

    /// Non-401 failures carry the server's detail message verbatim.
    #[tokio::test]
    async fn test_validation_error_detail() {
        let server = server_with(
            Mock::given(method("POST")).and(path("/manual/transactions")).respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"detail": "Bank account not found"})),
            ),
        )
        .await;

        let client = ApiClient::new(server.uri()).with_token(Some("abc123".to_string()));
        let txn: evenly_types::NewTransaction = serde_json::from_value(serde_json::json!({
            "account_id": "3eed1f5a-93a8-4a5f-8d3e-2b8b1a33d502",
            "txn_timestamp": "2026-02-01T00:00:00",
            "amount_inr": 50000.0,
            "txn_type": "credit",
            "balance_after_txn": 50000.0,
            "description": "Freelance payment",
            "merchant_category": "freelancing"
        }))
        .unwrap();

        let err = client.create_transaction(&txn).await.unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Status);
        assert_eq!(err.message, "Bank account not found");
    }

    /// Connection failures map to the network kind.
    #[tokio::test]
    async fn test_connection_refused_is_network() {
        // Port 1 is never listening.
        let client = ApiClient::new("http://127.0.0.1:1");
        let err = client.safe_to_spend().await.unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Network);
    }
}
