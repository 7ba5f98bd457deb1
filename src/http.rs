//! HTTP GET capability
//!
//! The fetcher never talks to the network directly; it goes through an
//! [`HttpGet`] implementation. [`ReqwestHttpGet`] is the bundled one.

use crate::types::HttpResponse;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Default request timeout for the bundled client
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connect timeout for the bundled client
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Asynchronous HTTP GET capability
///
/// Transport, headers, retries and timeouts are all the implementor's
/// concern; this layer only consumes `status` and `body`.
#[async_trait]
pub trait HttpGet: Send + Sync {
    /// Execute a GET request, returning the status code and body text
    async fn get(&self, url: &str) -> anyhow::Result<HttpResponse>;
}

/// reqwest-backed [`HttpGet`] implementation
pub struct ReqwestHttpGet {
    client: Client,
}

impl ReqwestHttpGet {
    /// Create a client with default timeouts
    pub fn new() -> Self {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    /// Create a client with a custom request timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT)
            .pool_idle_timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }
}

impl Default for ReqwestHttpGet {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpGet for ReqwestHttpGet {
    async fn get(&self, url: &str) -> anyhow::Result<HttpResponse> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        // Non-success statuses are not transport errors here. The status is
        // passed through verbatim for the parser to branch on.
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}
