//! Shared fixtures for quote fetcher integration tests

use anyhow::anyhow;
use arnie_quotes::{HttpGet, HttpResponse};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// Install a subscriber so `RUST_LOG` controls test log output
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// What the scripted capability should do for one URL
pub enum Script {
    /// Answer with this status and body, optionally after a delay
    Respond {
        status: u16,
        body: String,
        delay: Duration,
    },
    /// Fail at the transport level
    Fail,
}

/// Deterministic [`HttpGet`] implementation
///
/// Each URL maps to a scripted outcome; an unscripted URL behaves like a
/// transport fault. Delays let tests force units to complete out of input
/// order.
pub struct ScriptedHttp {
    scripts: HashMap<String, Script>,
}

impl ScriptedHttp {
    pub fn new() -> Self {
        Self {
            scripts: HashMap::new(),
        }
    }

    /// Script a 200 response with a `{"message": ...}` body
    pub fn ok(self, url: &str, message: &str) -> Self {
        self.status(url, 200, message)
    }

    /// Script a response with the given status and a `{"message": ...}` body
    pub fn status(self, url: &str, status: u16, message: &str) -> Self {
        let body = serde_json::json!({ "message": message }).to_string();
        self.respond(url, status, &body)
    }

    /// Script a raw response body
    pub fn respond(mut self, url: &str, status: u16, body: &str) -> Self {
        self.scripts.insert(
            url.to_string(),
            Script::Respond {
                status,
                body: body.to_string(),
                delay: Duration::ZERO,
            },
        );
        self
    }

    /// Delay the already-scripted response for `url`
    pub fn delayed_by(mut self, url: &str, delay: Duration) -> Self {
        if let Some(Script::Respond { delay: d, .. }) = self.scripts.get_mut(url) {
            *d = delay;
        }
        self
    }

    /// Script a transport fault
    pub fn failing(mut self, url: &str) -> Self {
        self.scripts.insert(url.to_string(), Script::Fail);
        self
    }
}

#[async_trait]
impl HttpGet for ScriptedHttp {
    async fn get(&self, url: &str) -> anyhow::Result<HttpResponse> {
        match self.scripts.get(url) {
            Some(Script::Respond {
                status,
                body,
                delay,
            }) => {
                if !delay.is_zero() {
                    tokio::time::sleep(*delay).await;
                }
                Ok(HttpResponse {
                    status: *status,
                    body: body.clone(),
                })
            }
            Some(Script::Fail) => Err(anyhow!("connection refused: {}", url)),
            None => Err(anyhow!("no route to host: {}", url)),
        }
    }
}
