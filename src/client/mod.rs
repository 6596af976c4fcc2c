use anyhow::Context;
use reqwest::{Client, Url};

use crate::{error::FetchError, models::RepositoryInfo};

pub struct GithubClient {
    http: Client,
    base_url: Url,
}

impl GithubClient {
    pub fn new(api_base: &str) -> anyhow::Result<Self> {
        let base_url =
            Url::parse(api_base.trim_end_matches('/')).context("Invalid GitHub API base URL")?;

        let http = Client::builder()
            .user_agent(format!(
                "{}/{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, base_url })
    }

    /// Fetches `repos/{owner}/{repo}` once.
    ///
    /// Only transport failures are errors. Any HTTP status is accepted and its
    /// body decoded, so a 404 comes back as an empty [`RepositoryInfo`].
    pub async fn get_repo(&self, owner: &str, repo: &str) -> Result<RepositoryInfo, FetchError> {
        let url = self.build_url(&["repos", owner, repo])?;
        tracing::debug!(%url, "requesting repository metadata");

        let response = self.base_request(url).send().await?;

        let status = response.status();
        tracing::debug!(%status, "received response");
        if !status.is_success() {
            tracing::debug!(%status, "non-success status, decoding body anyway");
        }

        // Reading the body to the end consumes the response and frees the connection.
        let info = match response.bytes().await {
            Ok(body) => RepositoryInfo::from_json_bytes(&body),
            Err(err) => {
                tracing::debug!(error = %err, "failed to read response body");
                RepositoryInfo::default()
            }
        };

        Ok(info)
    }

    fn build_url(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        {
            let mut parts = url
                .path_segments_mut()
                .map_err(|_| FetchError::InvalidBaseUrl(self.base_url.to_string()))?;
            parts.pop_if_empty();
            for segment in segments {
                parts.push(segment);
            }
        }
        Ok(url)
    }

    fn base_request(&self, url: Url) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
    }
}
