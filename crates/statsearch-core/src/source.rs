//! Remote search source.
//!
//! [`SearchSource`] is the seam between the controller and the network. The
//! production implementation, [`HttpSearchSource`], wraps reqwest, which works
//! on both native and WASM platforms:
//! - Native: hyper with rustls-tls for HTTPS
//! - WASM: the browser fetch() API
//!
//! The endpoint is fixed and takes no parameters. The query has already passed
//! the gate by the time a fetch runs and is never sent.

use std::time::Duration;

use async_trait::async_trait;
use instant::Instant;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::SearchConfig;
use crate::error::FetchError;
use crate::types::{RequestId, ResultItem, SearchResponse};
use crate::workflow::SearchEvent;

/// Anything that can produce the result list for an accepted search.
///
/// Futures are not required to be `Send`: reqwest's WASM futures are not, and
/// the front ends drive fetches from a single UI task.
#[async_trait(?Send)]
pub trait SearchSource {
    async fn fetch_results(&self) -> Result<Vec<ResultItem>, FetchError>;
}

/// Fetches results with a single GET to the configured endpoint.
#[derive(Debug, Clone)]
pub struct HttpSearchSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpSearchSource {
    /// Builds a source from configuration.
    ///
    /// Fails if the endpoint is not an http(s) URL or the client cannot be
    /// constructed.
    pub fn new(config: &SearchConfig) -> Result<Self, FetchError> {
        let endpoint = parse_endpoint(&config.endpoint)?;
        let client = build_client(config.request_timeout)?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl SearchSource for HttpSearchSource {
    async fn fetch_results(&self) -> Result<Vec<ResultItem>, FetchError> {
        debug!("GET {}", self.endpoint);

        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| {
                FetchError::RequestFailed(format!("Failed to fetch {}: {}", self.endpoint, e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(|e| {
            FetchError::RequestFailed(format!("Failed to read response body: {}", e))
        })?;

        decode_response(&bytes)
    }
}

/// Decodes a `{ "items": [...] }` body into the result list.
pub fn decode_response(body: &[u8]) -> Result<Vec<ResultItem>, FetchError> {
    let response: SearchResponse = serde_json::from_slice(body)?;
    Ok(response.items)
}

/// Runs one fetch and turns the outcome into the event that completes
/// `request`.
///
/// Failures are reported through the returned event; the controller decides
/// how they surface.
pub async fn perform_fetch<S>(source: &S, request: RequestId) -> SearchEvent
where
    S: SearchSource + ?Sized,
{
    let start = Instant::now();
    let outcome = source.fetch_results().await;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    match outcome {
        Ok(items) => {
            info!(
                "Fetched {} results for request {} in {:.1}ms",
                items.len(),
                request,
                elapsed_ms
            );
            SearchEvent::FetchSucceeded { request, items }
        }
        Err(e) => {
            warn!(
                "Fetch for request {} failed after {:.1}ms",
                request, elapsed_ms
            );
            SearchEvent::FetchFailed {
                request,
                message: e.to_string(),
            }
        }
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, FetchError> {
    let raw = raw.trim();
    let url = Url::parse(raw).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", raw, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(FetchError::InvalidUrl(format!(
            "Unsupported scheme: {} (only http/https allowed)",
            url.scheme()
        )));
    }

    Ok(url)
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client(timeout: Option<Duration>) -> Result<reqwest::Client, FetchError> {
    let mut builder = reqwest::Client::builder().user_agent(crate::config::USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| FetchError::RequestFailed(format!("Failed to build HTTP client: {}", e)))
}

// The browser owns user agent and request lifetime on wasm.
#[cfg(target_arch = "wasm32")]
fn build_client(_timeout: Option<Duration>) -> Result<reqwest::Client, FetchError> {
    Ok(reqwest::Client::new())
}
