//! reqwest-backed fetcher with a caller-supplied timeout and retry policy

use super::Fetch;
use crate::error::FetchError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Default per-request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Delay before the first retry; grows linearly with the attempt number
const RETRY_BACKOFF: Duration = Duration::from_millis(500);

/// Timeout and retry policy applied to every request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchPolicy {
    /// Timeout for a single request, including reading the body
    pub timeout: Duration,
    /// Extra attempts after a transport error or a 5xx response
    pub retries: u32,
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            retries: 2,
        }
    }
}

/// Fetcher talking HTTP through a shared reqwest client
pub struct HttpFetcher {
    client: reqwest::Client,
    policy: FetchPolicy,
}

impl HttpFetcher {
    /// Create a new fetcher with a custom user agent
    pub fn new(user_agent: &str, policy: FetchPolicy) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(policy.timeout)
            .build()
            .unwrap_or_else(|err| {
                warn!(
                    error = %err,
                    timeout = ?policy.timeout,
                    "HTTP client setup failed, falling back to defaults without a timeout"
                );
                reqwest::Client::new()
            });
        Self { client, policy }
    }

    pub fn policy(&self) -> FetchPolicy {
        self.policy
    }

    /// Send a GET, retrying transport errors and server errors
    async fn get(&self, url: &Url) -> Result<reqwest::Response, FetchError> {
        let mut attempt = 0;
        loop {
            debug!(%url, attempt, "fetching");
            let outcome = self.client.get(url.clone()).send().await;

            let retryable = match &outcome {
                Ok(response) => response.status().is_server_error(),
                Err(_) => true,
            };
            if retryable && attempt < self.policy.retries {
                attempt += 1;
                warn!(%url, attempt, "request failed, retrying");
                tokio::time::sleep(RETRY_BACKOFF * attempt).await;
                continue;
            }

            let response = outcome.map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

            if !response.status().is_success() {
                return Err(FetchError::Status {
                    url: url.to_string(),
                    status: response.status(),
                });
            }
            return Ok(response);
        }
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch_text(&self, url: &Url) -> Result<String, FetchError> {
        let response = self.get(url).await?;
        response.text().await.map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })
    }

    async fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        let response = self.get(url).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;
        Ok(bytes.to_vec())
    }
}
