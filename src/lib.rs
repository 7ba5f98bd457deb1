//! Arnie quote fetcher
//!
//! Fetches a set of quote URLs concurrently and normalizes each JSON
//! response into an "Arnie Quote" or a "FAILURE" value. The batch is
//! all-or-nothing: the first failing URL fails the whole call.
//!
//! ```no_run
//! use arnie_quotes::QuoteFetcher;
//!
//! # async fn run() -> arnie_quotes::Result<()> {
//! let fetcher = QuoteFetcher::new();
//! let quotes = fetcher
//!     .fetch_quotes(&["http://localhost:8000/quote/1"])
//!     .await?;
//! println!("{}", serde_json::to_string(&quotes).unwrap());
//! # Ok(())
//! # }
//! ```

pub mod fetcher;
pub mod http;
pub mod types;

pub use fetcher::{parse_one, QuoteError, QuoteFetcher, Result};
pub use http::{HttpGet, ReqwestHttpGet};
pub use types::{HttpResponse, ParsedQuote, QuoteBody};
