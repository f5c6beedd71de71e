//! # HTTP client for the check-in API
//!
//! [`ApiClient`] wraps a [`reqwest::Client`] plus the configured base URL and
//! exposes one method per endpoint. Requests carry `Authorization: Bearer ...`
//! when a token is passed. Every response goes through [`ApiClient::send`],
//! which decodes 2xx bodies and turns everything else into
//! [`ApiError::Server`] with the server's `detail` message attached.
//!
//! | Method | Endpoint | Auth |
//! |--------|----------|------|
//! | [`login`](ApiClient::login) | `POST /token` (form) or `POST /auth/login` (JSON), per [`LoginRoute`] | |
//! | [`signup`](ApiClient::signup) | `POST /users/` | |
//! | [`fetch_profile`](ApiClient::fetch_profile) | `GET /users/me/` | bearer |
//! | [`give_consent`](ApiClient::give_consent) | `PATCH /users/me/consent` | bearer |
//! | [`log_mood`](ApiClient::log_mood) | `POST /moods/` | bearer |
//! | [`submit_screening`](ApiClient::submit_screening) | `POST /screenings/` | bearer |
//!
//! There is no retry and no timeout beyond what the transport applies.

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use store::{ApiConfig, LoginRoute};

use crate::error::{extract_detail, ApiError};
use crate::models::{
    ConsentUpdate, Credentials, MoodEntry, MoodRecord, NewUser, TokenResponse, UserProfile,
};
use crate::questionnaire::{ScreeningResult, ScreeningSubmission};
use crate::Backend;

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    login_route: LoginRoute,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(http: reqwest::Client, config: &ApiConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            login_route: config.login_route,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn login_route(&self) -> LoginRoute {
        self.login_route
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        tracing::debug!(%method, path, authenticated = token.is_some(), "API request");
        let builder = self.http.request(method, format!("{}{}", self.base_url, path));
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let detail = extract_detail(&body);
            tracing::warn!(status = status.as_u16(), detail = ?detail, "API request failed");
            return Err(ApiError::Server {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Exchange credentials for a bearer token using the configured route.
    pub async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        self.login_via(self.login_route, credentials).await
    }

    /// Exchange credentials for a bearer token using an explicit route.
    pub async fn login_via(
        &self,
        route: LoginRoute,
        credentials: &Credentials,
    ) -> Result<TokenResponse, ApiError> {
        let builder = self.request(Method::POST, route.path(), None);
        let builder = match route {
            LoginRoute::Token => builder.form(&[
                ("username", credentials.email.as_str()),
                ("password", credentials.password.as_str()),
            ]),
            LoginRoute::AuthLogin => builder.json(credentials),
        };
        Self::send(builder).await
    }

    pub async fn signup(&self, user: &NewUser) -> Result<UserProfile, ApiError> {
        Self::send(self.request(Method::POST, "/users/", None).json(user)).await
    }

    pub async fn fetch_profile(&self, token: Option<&str>) -> Result<UserProfile, ApiError> {
        Self::send(self.request(Method::GET, "/users/me/", token)).await
    }

    pub async fn give_consent(&self, token: Option<&str>) -> Result<UserProfile, ApiError> {
        let body = ConsentUpdate {
            consent_given: true,
        };
        Self::send(self.request(Method::PATCH, "/users/me/consent", token).json(&body)).await
    }

    pub async fn log_mood(
        &self,
        token: Option<&str>,
        entry: &MoodEntry,
    ) -> Result<MoodRecord, ApiError> {
        Self::send(self.request(Method::POST, "/moods/", token).json(entry)).await
    }

    pub async fn submit_screening(
        &self,
        token: Option<&str>,
        submission: &ScreeningSubmission,
    ) -> Result<ScreeningResult, ApiError> {
        Self::send(self.request(Method::POST, "/screenings/", token).json(submission)).await
    }
}

impl Backend for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        ApiClient::login(self, credentials).await
    }

    async fn signup(&self, user: &NewUser) -> Result<UserProfile, ApiError> {
        ApiClient::signup(self, user).await
    }

    async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError> {
        ApiClient::fetch_profile(self, Some(token)).await
    }

    async fn give_consent(&self, token: &str) -> Result<UserProfile, ApiError> {
        ApiClient::give_consent(self, Some(token)).await
    }

    async fn log_mood(&self, token: &str, entry: &MoodEntry) -> Result<MoodRecord, ApiError> {
        ApiClient::log_mood(self, Some(token), entry).await
    }

    async fn submit_screening(
        &self,
        token: &str,
        submission: &ScreeningSubmission,
    ) -> Result<ScreeningResult, ApiError> {
        ApiClient::submit_screening(self, Some(token), submission).await
    }
}
