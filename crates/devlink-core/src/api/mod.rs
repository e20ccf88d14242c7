//! HTTP client for the profile API.
//!
//! One method per endpoint. Each call is sent once; failures are returned
//! as [`ApiError`] and never retried.

mod error;

use anyhow::{Context, Result};
use devlink_types::{EducationForm, ExperienceForm, GithubRepo, Profile, ProfileForm};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

pub use error::{ApiError, ApiResult, ValidationError};

use crate::config::Config;

/// Standard User-Agent header for devlink API requests.
pub const USER_AGENT: &str = concat!("devlink/", env!("CARGO_PKG_VERSION"));

/// Header carrying the session token.
pub const AUTH_HEADER: &str = "x-auth-token";

/// Connection settings for [`ProfileClient`].
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: Option<String>,
}

impl ApiConfig {
    /// Resolves base URL and token from config and environment.
    ///
    /// Environment variables:
    /// - `DEVLINK_API_URL` (optional, overrides `api_url`)
    /// - `DEVLINK_TOKEN` (optional, overrides `token`)
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            base_url: config.effective_api_url()?,
            token: config.effective_token(),
        })
    }
}

/// Profile API client.
#[derive(Debug, Clone)]
pub struct ProfileClient {
    http: reqwest::Client,
    base: Url,
    token: Option<String>,
}

impl ProfileClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid API base URL: {}", config.base_url))?;
        if base.cannot_be_a_base() {
            anyhow::bail!("Invalid API base URL: {}", config.base_url);
        }
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            base,
            token: config.token,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// `GET /api/profile/me`
    pub async fn current_profile(&self) -> ApiResult<Profile> {
        self.fetch(Method::GET, &["me"]).await
    }

    /// `GET /api/profile`
    pub async fn profiles(&self) -> ApiResult<Vec<Profile>> {
        self.fetch(Method::GET, &[]).await
    }

    /// `GET /api/profile/user/{user_id}`
    pub async fn profile_by_user(&self, user_id: &str) -> ApiResult<Profile> {
        self.fetch(Method::GET, &["user", user_id]).await
    }

    /// `GET /api/profile/github/{username}`
    pub async fn github_repos(&self, username: &str) -> ApiResult<Vec<GithubRepo>> {
        self.fetch(Method::GET, &["github", username]).await
    }

    /// `POST /api/profile` (create or update)
    pub async fn upsert_profile(&self, form: &ProfileForm) -> ApiResult<Profile> {
        let request = self.request(Method::POST, &[])?.json(form);
        self.send(request).await
    }

    /// `PUT /api/profile/experience`
    pub async fn add_experience(&self, form: &ExperienceForm) -> ApiResult<Profile> {
        let request = self.request(Method::PUT, &["experience"])?.json(form);
        self.send(request).await
    }

    /// `PUT /api/profile/education`
    pub async fn add_education(&self, form: &EducationForm) -> ApiResult<Profile> {
        let request = self.request(Method::PUT, &["education"])?.json(form);
        self.send(request).await
    }

    /// `DELETE /api/profile/experience/{id}`
    pub async fn delete_experience(&self, id: &str) -> ApiResult<Profile> {
        self.fetch(Method::DELETE, &["experience", id]).await
    }

    /// `DELETE /api/profile/education/{id}`
    pub async fn delete_education(&self, id: &str) -> ApiResult<Profile> {
        self.fetch(Method::DELETE, &["education", id]).await
    }

    /// `DELETE /api/profile/profile`
    ///
    /// Removes the profile, its posts and the user. The body is ignored.
    pub async fn delete_account(&self) -> ApiResult<()> {
        let request = self.request(Method::DELETE, &["profile"])?;
        self.execute(request).await.map(drop)
    }

    /// Builds `/api/profile/<segments...>` on the base URL.
    ///
    /// Segments are percent-encoded, so ids and usernames cannot escape the path.
    fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::transport(format!("Invalid API base URL: {}", self.base)))?
            .pop_if_empty()
            .extend(["api", "profile"])
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> ApiResult<RequestBuilder> {
        let url = self.endpoint(segments)?;
        tracing::debug!(%method, path = url.path(), "profile api request");
        let mut request = self.http.request(method, url);
        if let Some(token) = &self.token {
            request = request.header(AUTH_HEADER, token);
        }
        Ok(request)
    }

    async fn fetch<T: DeserializeOwned>(&self, method: Method, segments: &[&str]) -> ApiResult<T> {
        let request = self.request(method, segments)?;
        self.send(request).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = self.execute(request).await?;
        let status = response.status();
        response.json::<T>().await.map_err(|e| {
            tracing::warn!(status = status.as_u16(), error = %e, "undecodable response body");
            ApiError::invalid_body(status)
        })
    }

    async fn execute(&self, request: RequestBuilder) -> ApiResult<reqwest::Response> {
        let response = request.send().await.map_err(|e| {
            let err = error::classify_reqwest_error(&e);
            tracing::warn!(error = %err, "profile api request failed");
            err
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            let err = ApiError::http_status(status, &error_body);
            tracing::warn!(
                status = err.status,
                validation_errors = err.errors.len(),
                "profile api returned an error status"
            );
            return Err(err);
        }

        Ok(response)
    }
}
