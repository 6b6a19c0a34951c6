//! Bible API client
//!
//! Issues exactly one request per [`QueryPlan`] and normalizes whatever shape
//! comes back. Failures are surfaced as-is; nothing is retried.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{error, info};
use url::Url;

use super::models::{CanonicalVerse, UpstreamResponse};
use super::source::QueryPlan;
use crate::errors::VerseError;

#[async_trait]
pub trait VerseFetcher: Send + Sync {
    /// Fetch the verse described by `plan` in `translation`.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, non-success status or a body
    /// that matches neither response shape.
    async fn fetch_verse(
        &self,
        plan: &QueryPlan,
        translation: &str,
    ) -> Result<CanonicalVerse, VerseError>;
}

pub struct BibleApiClient {
    http: Client,
    base_url: String,
}

impl BibleApiClient {
    #[must_use]
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Builds the request URL for a plan:
    /// `<base>/data/<translation>/random[/<BOOKS>]` or
    /// `<base>/<passage>?translation=<translation>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be extended with path segments.
    pub fn request_url(&self, plan: &QueryPlan, translation: &str) -> Result<Url, VerseError> {
        let mut url = Url::parse(&self.base_url)?;
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                VerseError::ConfigError(format!("Bible API URL cannot be a base: {}", self.base_url))
            })?;
            segments.pop_if_empty();

            match plan {
                QueryPlan::Random { books } => {
                    segments.extend(["data", translation, "random"]);
                    if !books.is_empty() {
                        segments.push(&books.join(","));
                    }
                }
                QueryPlan::Passage(passage) => {
                    segments.push(passage);
                }
            }
        }

        if plan.fixed_passage().is_some() {
            url.query_pairs_mut().append_pair("translation", translation);
        }

        Ok(url)
    }
}

#[async_trait]
impl VerseFetcher for BibleApiClient {
    async fn fetch_verse(
        &self,
        plan: &QueryPlan,
        translation: &str,
    ) -> Result<CanonicalVerse, VerseError> {
        let url = self.request_url(plan, translation)?;
        info!(url = %url, "Fetching verse from Bible API");

        let resp = self.http.get(url.clone()).send().await.map_err(|e| {
            error!("Error fetching Bible verse from {}: {}", url, e);
            VerseError::from(e)
        })?;

        let status = resp.status();
        if !status.is_success() {
            let err = VerseError::upstream(status.as_u16(), resp.text().await);
            error!("Bible API request failed: {}", err);
            return Err(err);
        }

        let body = resp.text().await?;
        parse_verse_body(&body)
    }
}

/// Parse a successful Bible API body into the canonical record.
///
/// # Errors
///
/// Returns [`VerseError::ParseError`] when the body is not JSON or matches
/// neither response shape.
pub fn parse_verse_body(body: &str) -> Result<CanonicalVerse, VerseError> {
    serde_json::from_str::<UpstreamResponse>(body)
        .map(UpstreamResponse::normalize)
        .map_err(|e| VerseError::ParseError(format!("Bible API response: {}", e)))
}
