//! `/auth` endpoints.
//!
//! Login and register are credential exchanges: they go through the path
//! that never maps a 401 to the global unauthorized variant, so a bad
//! password stays a form error.

use evenly_types::{RegisterRequest, TokenResponse, UserProfile};

use super::{ApiClient, ApiResult};

impl ApiClient {
    /// `POST /auth/login` with form-encoded credentials.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<TokenResponse> {
        let form = [("username", email), ("password", password)];
        self.post_form_credential("/auth/login", &form).await
    }

    /// `POST /auth/register`.
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<UserProfile> {
        self.post_json_credential("/auth/register", request).await
    }

    /// `GET /auth/me`.
    pub async fn me(&self) -> ApiResult<UserProfile> {
        self.get("/auth/me").await
    }
}
