// src/core/client.rs

use tracing::{debug, error, info, warn};
use url::Url;

use crate::core::error::ScanError;
use crate::core::models::{HealthStatus, ScanPayload, ScanResult, ScanType};

/// Client for the remote scanning service.
///
/// Holds the service's base address and a pooled HTTP client; cloning is
/// cheap and clones share the connection pool. Each call is a single
/// request/response round trip: no retries, no caching, no timeout.
#[derive(Debug, Clone)]
pub struct ScanClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ScanClient {
    /// Creates a client talking to the service at `base_url`.
    pub fn new(base_url: Url) -> Result<Self, ScanError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("domscan/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                error!(error = %e, "Failed to build HTTP client.");
                ScanError::from(e)
            })?;
        Ok(Self::with_http_client(base_url, http))
    }

    /// Creates a client reusing an already configured `reqwest::Client`.
    pub fn with_http_client(base_url: Url, http: reqwest::Client) -> Self {
        Self { http, base_url }
    }

    /// Builds `<base>/scan/<scan_type>?domain=<domain>`.
    ///
    /// The domain goes in as one form-encoded query pair, so characters such
    /// as `&`, `=` or `#` stay inside the `domain` value.
    pub fn scan_url(&self, domain: &str, scan_type: ScanType) -> Result<Url, ScanError> {
        let mut url = self.endpoint(&["scan", scan_type.as_ref()])?;
        url.query_pairs_mut().clear().append_pair("domain", domain);
        debug!(url = %url, "Built scan URL.");
        Ok(url)
    }

    /// Runs one scan and returns the service's results in the order received.
    ///
    /// `domain` is expected to have gone through
    /// [`validate_domain`](crate::core::validator::validate_domain) already;
    /// it is not checked again here. The call fails as a whole: either every
    /// result of the response is returned, or a [`ScanError`].
    pub async fn scan(&self, domain: &str, scan_type: ScanType) -> Result<Vec<ScanResult>, ScanError> {
        info!(domain, scan_type = %scan_type, "Starting remote scan.");
        let url = self.scan_url(domain, scan_type)?;
        let body = self.fetch(url).await?;
        let results = parse_scan_payload(&body)?;
        info!(domain, count = results.len(), "Remote scan finished.");
        Ok(results)
    }

    /// Queries the service's `/health` endpoint.
    pub async fn health(&self) -> Result<HealthStatus, ScanError> {
        let url = self.endpoint(&["health"])?;
        let body = self.fetch(url).await?;
        let health: HealthStatus = serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "Health payload could not be parsed.");
            ScanError::from(e)
        })?;
        debug!(status = %health.status, "Health check answered.");
        Ok(health)
    }

    // Appends `segments` to the base path, keeping any prefix it already has.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ScanError> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| ScanError::Server(format!("base url cannot take a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch(&self, url: Url) -> Result<Vec<u8>, ScanError> {
        debug!(url = %url, "Sending request to scanning service.");
        let response = self.http.get(url.clone()).send().await.map_err(|e| {
            error!(url = %url, error = %e, "Request to scanning service failed.");
            ScanError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "Scanning service answered with an error status.");
            return Err(ScanError::Server(format!("unexpected status {}", status)));
        }

        let body = response.bytes().await.map_err(|e| {
            error!(url = %url, error = %e, "Failed to read response body.");
            ScanError::from(e)
        })?;
        Ok(body.to_vec())
    }
}

/// Turns a scan response body into a list of results.
///
/// A single object becomes a one-element list, an array is kept as is.
/// Anything else, including objects with a missing field, is an error.
pub fn parse_scan_payload(body: &[u8]) -> Result<Vec<ScanResult>, ScanError> {
    let payload: ScanPayload = serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, "Scan payload could not be parsed.");
        ScanError::from(e)
    })?;
    Ok(payload.into_results())
}
