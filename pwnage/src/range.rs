use std::future::Future;
use std::time::Duration;

use crate::error::Error;

/// Base endpoint of the k-anonymity range API.
pub const RANGE_API_BASE: &str = "https://api.pwnedpasswords.com/range/";

/// Upper bound on the single range request. The remote call is the only
/// suspend point in a check and must never block indefinitely.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches the candidate breach records for a 5-character hash prefix.
///
/// Abstracted as a trait so the matcher can be exercised against an
/// in-memory candidate list without any network dependency.
pub trait RangeQuery {
    /// Returns the raw `suffix:count` lines for every known hash sharing
    /// `prefix`, with empty lines discarded.
    fn fetch_candidates(
        &self,
        prefix: &str,
    ) -> impl Future<Output = Result<Vec<String>, Error>> + Send;
}

/// Range API client backed by [`reqwest`]. Performs exactly one GET per
/// check, with no authentication, no caching, and no retries.
pub struct HibpClient {
    http: reqwest::Client,
    base_url: String,
}

impl HibpClient {
    /// Wraps an existing HTTP client. The caller is responsible for building
    /// `http` with a finite timeout (see [`DEFAULT_TIMEOUT`]) and an
    /// identifying user agent, which the upstream service requires.
    pub fn new(http: reqwest::Client) -> Self {
        Self { http, base_url: RANGE_API_BASE.to_string() }
    }

    /// Points the client at a different backend implementing the same
    /// "5-char prefix in, suffix:count lines out" contract.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn range_url(&self, prefix: &str) -> String {
        format!("{}{}", self.base_url, prefix)
    }
}

impl RangeQuery for HibpClient {
    async fn fetch_candidates(&self, prefix: &str) -> Result<Vec<String>, Error> {
        let url = self.range_url(prefix);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| Error::Network { prefix: prefix.to_string(), source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::RemoteStatus {
                prefix: prefix.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| Error::RemoteBody { prefix: prefix.to_string(), source })?;

        let lines: Vec<String> =
            body.lines().filter(|line| !line.is_empty()).map(str::to_owned).collect();

        // Only the prefix is loggable; it is the one password-derived value
        // that already went over the wire.
        tracing::debug!(prefix, candidates = lines.len(), "fetched range bucket");

        Ok(lines)
    }
}
