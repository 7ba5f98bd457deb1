//! Quote fetcher
//!
//! Fans out one HTTP GET per URL, normalizes each response into a
//! [`ParsedQuote`] and joins the batch all-or-nothing: the first failing
//! URL fails the whole call.

use crate::http::{HttpGet, ReqwestHttpGet};
use crate::types::{HttpResponse, ParsedQuote, QuoteBody};
use futures::future::try_join_all;
use thiserror::Error;
use tracing::{debug, error};

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("HTTP request failed for {url}: {cause}")]
    Fetch { url: String, cause: anyhow::Error },

    #[error("Response body was not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Quote batch failed: {0}")]
    Batch(#[source] Box<QuoteError>),
}

pub type Result<T> = std::result::Result<T, QuoteError>;

/// Fetches quote URLs and normalizes every response
pub struct QuoteFetcher<H: HttpGet> {
    http: H,
}

impl QuoteFetcher<ReqwestHttpGet> {
    /// Create a fetcher backed by the bundled reqwest client
    pub fn new() -> Self {
        Self::with_http(ReqwestHttpGet::new())
    }
}

impl Default for QuoteFetcher<ReqwestHttpGet> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: HttpGet> QuoteFetcher<H> {
    /// Create a fetcher over a custom HTTP capability
    pub fn with_http(http: H) -> Self {
        Self { http }
    }

    /// Execute a HTTP GET for one quote URL and return the raw response
    pub async fn fetch_one(&self, url: &str) -> Result<HttpResponse> {
        self.http.get(url).await.map_err(|cause| {
            error!("HTTP GET request failed for quote URL ({}): {}", url, cause);
            QuoteError::Fetch {
                url: url.to_string(),
                cause,
            }
        })
    }

    /// Fetch and parse every URL concurrently
    ///
    /// All per-URL units are launched up front and joined fail-fast: the
    /// first fetch or parse error fails the batch and no partial results
    /// are returned. On success the output order matches the input order,
    /// regardless of completion order.
    pub async fn fetch_quotes(&self, urls: &[impl AsRef<str>]) -> Result<Vec<ParsedQuote>> {
        debug!("Fetching {} quote URLs", urls.len());

        let units = urls.iter().map(|url| async move {
            let response = self.fetch_one(url.as_ref()).await?;
            parse_one(&response)
        });

        try_join_all(units).await.map_err(|cause| {
            error!("Failed to fetch quote batch: {}", cause);
            QuoteError::Batch(Box::new(cause))
        })
    }
}

/// Normalize one HTTP response into a quote result
///
/// Status 200 selects the success variant; any other status maps to the
/// failure variant with no further status-specific branching. The decoded
/// `message` is carried through unchanged, even when absent.
pub fn parse_one(response: &HttpResponse) -> Result<ParsedQuote> {
    let body: QuoteBody = serde_json::from_str(&response.body).map_err(|e| {
        error!(
            "Failed to parse quote response (status {}): {}",
            response.status, e
        );
        QuoteError::Parse(e)
    })?;

    if response.status == 200 {
        Ok(ParsedQuote::ArnieQuote(body.message))
    } else {
        Ok(ParsedQuote::Failure(body.message))
    }
}
