//! HTTP transport for `/api/runs` with bounded exponential-backoff retry.
//!
//! Retrying lives here, below the fetcher: callers see a single
//! `Result` per fetch regardless of how many attempts it took.

use crate::api::error::FetchError;
use crate::api::parser;
use crate::app::Run;
use crate::traits::RunSource;
use async_trait::async_trait;
use std::time::Duration;
use tokio::time;
use url::Url;

pub const RUNS_PATH: &str = "api/runs";

pub const DEFAULT_RETRIES: u32 = 5;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 100;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Upper bound on a single backoff sleep.
const MAX_BACKOFF_MS: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first one.
    pub retries: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: DEFAULT_RETRIES,
            base_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `attempt` (0-based):
    /// `min(base * 2^attempt, MAX_BACKOFF_MS)`.
    pub fn delay(&self, attempt: u32) -> Duration {
        let base_ms = u64::try_from(self.base_delay.as_millis()).unwrap_or(u64::MAX);
        let multiplier = 1u64.checked_shl(attempt).unwrap_or(u64::MAX);
        Duration::from_millis(base_ms.saturating_mul(multiplier).min(MAX_BACKOFF_MS))
    }
}

pub struct HttpRunSource {
    client: reqwest::Client,
    url: Url,
    policy: RetryPolicy,
}

impl HttpRunSource {
    pub fn new(base_url: &str, policy: RetryPolicy, timeout: Duration) -> Result<Self, FetchError> {
        let url = runs_url(base_url)?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url,
            policy,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn attempt(&self) -> Result<Vec<Run>, FetchError> {
        let resp = self.client.get(self.url.clone()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        let body = resp.text().await?;
        parser::parse_runs(&body)
    }
}

#[async_trait]
impl RunSource for HttpRunSource {
    async fn fetch_runs(&self) -> Result<Vec<Run>, FetchError> {
        let mut attempt: u32 = 0;
        loop {
            tracing::debug!(url = %self.url, attempt, "fetching runs");
            match self.attempt().await {
                Ok(runs) => return Ok(runs),
                Err(e) if e.is_retryable() && attempt < self.policy.retries => {
                    let delay = self.policy.delay(attempt);
                    tracing::warn!(
                        "fetch attempt {} failed: {e}, retrying in {}ms",
                        attempt + 1,
                        delay.as_millis()
                    );
                    time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Resolves the runs endpoint against a base URL, keeping any path prefix.
pub fn runs_url(base_url: &str) -> Result<Url, FetchError> {
    let invalid = |source| FetchError::InvalidUrl {
        url: base_url.to_string(),
        source,
    };
    let mut base = Url::parse(base_url).map_err(invalid)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(RUNS_PATH).map_err(invalid)
}
