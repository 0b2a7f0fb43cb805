/// GitHub Client: the single point of entry for public profile API calls.
///
/// One attempt per request, no retries. Callers treat any error as
/// "upstream unavailable" and fall back to estimates.
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;
use tracing::{debug, warn};

const ACCEPT: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = concat!("compass-api/", env!("CARGO_PKG_VERSION"));
const REPOS_PER_PAGE: u32 = 100;

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// What the analysis needs from one account.
#[derive(Debug, Clone)]
pub struct GitHubProfile {
    pub user: GitHubUser,
    pub repos: Vec<GitHubRepo>,
}

/// Source of profile data. `GitHubClient` in production; tests swap in stubs.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profile(&self, username: &str) -> Result<GitHubProfile, GitHubError>;
}

#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, GitHubError> {
        Ok(Self {
            client: Client::builder()
                .timeout(timeout)
                .user_agent(USER_AGENT)
                .build()?,
            base_url: base_url.into(),
            token,
        })
    }

    fn user_url(&self, username: &str) -> String {
        format!("{}/users/{username}", self.base_url)
    }

    fn repos_url(&self, username: &str) -> String {
        format!(
            "{}/users/{username}/repos?per_page={REPOS_PER_PAGE}&sort=updated",
            self.base_url
        )
    }

    fn get(&self, url: &str) -> RequestBuilder {
        let request = self.client.get(url).header("Accept", ACCEPT);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, GitHubError> {
        let response = self.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GitHubError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl ProfileSource for GitHubClient {
    /// Fetches the user and their repositories concurrently.
    /// The user is required; a failed repository listing degrades to no repositories.
    async fn fetch_profile(&self, username: &str) -> Result<GitHubProfile, GitHubError> {
        let user_url = self.user_url(username);
        let repos_url = self.repos_url(username);

        let (user, repos) = tokio::join!(
            self.get_json::<GitHubUser>(&user_url),
            self.get_json::<Vec<GitHubRepo>>(&repos_url),
        );

        let user = user?;
        let repos = repos.unwrap_or_else(|e| {
            warn!("GitHub repository listing for {username} failed: {e}");
            Vec::new()
        });

        debug!(
            "GitHub profile fetched: login={}, public_repos={}, listed_repos={}, latest_repo={}",
            user.login,
            user.public_repos,
            repos.len(),
            latest_repo(&repos).unwrap_or("none")
        );

        Ok(GitHubProfile { user, repos })
    }
}

/// Name of the first listed repository. The listing is requested with
/// `sort=updated`, so this is the most recently updated one.
fn latest_repo(repos: &[GitHubRepo]) -> Option<&str> {
    repos.first().map(|r| r.name.as_str())
}
