//! Outbound webhook transport
//!
//! Thin wrapper over `reqwest` for JSON posts to Telex webhooks and
//! caller-supplied return URLs.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::error;

use crate::errors::VerseError;

#[async_trait]
pub trait WebhookTransport: Send + Sync {
    /// POST `body` as JSON to `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the destination
    /// answers with a non-success status.
    async fn post_json(&self, url: &str, body: &Value) -> Result<(), VerseError>;
}

/// Build the shared HTTP client with the configured timeout.
#[must_use]
pub fn build_http_client(timeout_secs: u64) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .unwrap_or_else(|_| Client::new())
}

pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    #[must_use]
    pub fn new(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl WebhookTransport for HttpTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<(), VerseError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let resp = self
            .http
            .post(url)
            .headers(headers)
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let err = VerseError::dispatch(status.as_u16(), resp.text().await);
            error!("Webhook POST to {} failed: {}", url, err);
            return Err(err);
        }

        Ok(())
    }
}
