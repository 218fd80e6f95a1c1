//! GitHub REST API v3 client.
//!
//! All requests are anonymous GETs against public endpoints; responses are
//! deserialized into the types in [`crate::types`].

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::types::{CommitActivityWeek, Contributor, RepoIdentifier, RepoMetadata};

const API_BASE: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("repoinsight/", env!("CARGO_PKG_VERSION"));

/// Failure modes of a single API request.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered outside the success range, or with 202 while
    /// statistics are still being computed. Carries the status code so call
    /// sites can apply their own policy per endpoint.
    #[error("GitHub API returned HTTP {status}")]
    Status { status: StatusCode },

    /// The request could not complete or the body could not be decoded.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl FetchError {
    /// The HTTP status code, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status } => Some(status.as_u16()),
            FetchError::Transport(_) => None,
        }
    }
}

/// Thin wrapper around a [`reqwest::Client`] bound to one API base URL.
pub struct GitHubClient {
    http: Client,
    base_url: String,
}

impl GitHubClient {
    /// Build a client against the public GitHub API.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(API_BASE)
    }

    /// Build a client against an alternate base URL. Used by the test suite
    /// to point at a local mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();
        // 202 means GitHub has not finished computing statistics yet and the
        // body is empty. Surface it as a status failure so the caller can
        // message accordingly instead of choking on the missing body.
        if status == StatusCode::ACCEPTED || !status.is_success() {
            return Err(FetchError::Status { status });
        }

        Ok(response.json::<T>().await?)
    }

    /// `GET /repos/{owner}/{repo}`
    pub async fn fetch_repository(&self, id: &RepoIdentifier) -> Result<RepoMetadata, FetchError> {
        self.get_json(&format!("/repos/{}/{}", id.owner, id.repo))
            .await
    }

    /// `GET /repos/{owner}/{repo}/contributors`, first page only, capped at
    /// the ten entries the contributor view displays.
    pub async fn fetch_contributors(
        &self,
        id: &RepoIdentifier,
    ) -> Result<Vec<Contributor>, FetchError> {
        self.get_json(&format!(
            "/repos/{}/{}/contributors?per_page=10",
            id.owner, id.repo
        ))
        .await
    }

    /// `GET /repos/{owner}/{repo}/stats/commit_activity`, one year of weekly
    /// buckets, oldest first.
    pub async fn fetch_commit_activity(
        &self,
        id: &RepoIdentifier,
    ) -> Result<Vec<CommitActivityWeek>, FetchError> {
        self.get_json(&format!(
            "/repos/{}/{}/stats/commit_activity",
            id.owner, id.repo
        ))
        .await
    }
}
