use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};

use crate::data::{CommentResponse, IssueRef, IssueResponse};

const API_BASE: &str = "https://api.github.com";

/// Every request shares this one timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Get the GitHub API token from the environment, if configured.
/// Unauthenticated requests work too, at a lower rate limit.
pub fn get_github_token() -> Option<String> {
    env::var("GITHUB_TOKEN").ok()
}

/// Create an HTTP client with GitHub API headers and the shared timeout
pub fn create_client() -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, HeaderValue::from_static("bugview"));
    if let Some(token) = get_github_token() {
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))?,
        );
    }

    Ok(reqwest::Client::builder()
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .build()?)
}

fn issue_url(target: &IssueRef) -> String {
    format!(
        "{}/repos/{}/{}/issues/{}",
        API_BASE, target.owner, target.repo, target.number
    )
}

fn comments_url(target: &IssueRef) -> String {
    format!("{}/comments", issue_url(target))
}

pub async fn fetch_issue(client: &reqwest::Client, target: &IssueRef) -> Result<IssueResponse> {
    let response = client.get(issue_url(target)).send().await?;
    if !response.status().is_success() {
        anyhow::bail!(
            "GitHub returned {} for issue #{}",
            response.status(),
            target.number
        );
    }

    let body = response.text().await?;
    serde_json::from_str(&body).context("malformed issue response")
}

pub async fn fetch_comments(
    client: &reqwest::Client,
    target: &IssueRef,
) -> Result<Vec<CommentResponse>> {
    let response = client.get(comments_url(target)).send().await?;
    if !response.status().is_success() {
        anyhow::bail!(
            "GitHub returned {} for issue #{} comments",
            response.status(),
            target.number
        );
    }

    let body = response.text().await?;
    serde_json::from_str(&body).context("malformed comments response")
}
