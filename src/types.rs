//! Wire types shared between the HTTP capability and the quote fetcher

use serde::{Deserialize, Serialize};

/// HTTP response as returned by the [`HttpGet`](crate::http::HttpGet) capability
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,

    /// Response body, expected to be JSON-encoded text
    pub body: String,
}

/// Decoded quote response body
///
/// Only `message` is read; every other field in the body is ignored. A body
/// without a `message` field decodes to `None` and is carried through as-is.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteBody {
    pub message: Option<String>,
}

/// Normalized result for a single quote URL
///
/// Serializes with the variant tag as the only key, so a success renders as
/// `{"Arnie Quote": "..."}` and everything else as `{"FAILURE": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParsedQuote {
    /// The quote endpoint answered with status 200
    #[serde(rename = "Arnie Quote")]
    ArnieQuote(Option<String>),

    /// Any non-200 status
    #[serde(rename = "FAILURE")]
    Failure(Option<String>),
}

impl ParsedQuote {
    /// Message carried by either variant
    pub fn message(&self) -> Option<&str> {
        match self {
            ParsedQuote::ArnieQuote(message) | ParsedQuote::Failure(message) => {
                message.as_deref()
            }
        }
    }

    /// True for the success variant
    pub fn is_success(&self) -> bool {
        matches!(self, ParsedQuote::ArnieQuote(_))
    }
}
