//! Tick orchestration
//!
//! One tick runs source selection, a single verse fetch, formatting and a
//! single webhook post, strictly in that order. Any failure ends the tick and
//! is reported in the returned envelope.

use tracing::{error, info, warn};
use uuid::Uuid;

use crate::core::config::AppConfig;
use crate::core::models::{DeliverySettings, Destination, TickRequest, TickResponse};
use crate::errors::VerseError;
use crate::telex::{
    HttpTransport, WebhookTransport, build_http_client, dispatch_verse, post_tick_result,
};
use crate::verse::{
    BibleApiClient, EntropyPicker, PassagePicker, VerseFetcher, format_verse_message, select_plan,
};

pub const MISSING_DESTINATION: &str = "No return URL or channel ID provided";

/// Collaborators a tick needs. Holds no per-request state.
pub struct TickService {
    fetcher: Box<dyn VerseFetcher>,
    transport: Box<dyn WebhookTransport>,
    picker: Box<dyn PassagePicker>,
    webhook_base_url: String,
}

impl TickService {
    #[must_use]
    pub fn new(
        fetcher: Box<dyn VerseFetcher>,
        transport: Box<dyn WebhookTransport>,
        picker: Box<dyn PassagePicker>,
        webhook_base_url: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            transport,
            picker,
            webhook_base_url: webhook_base_url.into(),
        }
    }

    /// Wire up the real Bible API and webhook clients.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let http = build_http_client(config.http_timeout_secs);
        Self::new(
            Box::new(BibleApiClient::new(http.clone(), config.bible_api_url.clone())),
            Box::new(HttpTransport::new(http)),
            Box::new(EntropyPicker),
            config.webhook_base_url.clone(),
        )
    }

    /// Run one delivery cycle and report the outcome.
    pub async fn handle_tick(&self, request: TickRequest) -> TickResponse {
        let correlation_id = Uuid::new_v4().to_string();
        let return_url = non_blank(request.return_url.as_deref());
        let channel_id = non_blank(request.channel_id.as_deref());

        let destination = match (channel_id, return_url) {
            (Some(channel_id), _) => Destination::Channel(channel_id.to_string()),
            (None, Some(return_url)) => Destination::ReturnUrl(return_url.to_string()),
            (None, None) => {
                warn!(correlation_id = %correlation_id, "Tick rejected: {}", MISSING_DESTINATION);
                return TickResponse::failure(MISSING_DESTINATION);
            }
        };

        let settings = DeliverySettings::from_raw(request.settings.as_ref());
        info!(
            correlation_id = %correlation_id,
            source = %settings.source,
            translation = %settings.translation,
            interval = %settings.interval,
            "Processing tick"
        );

        match self.deliver(&destination, &settings, return_url).await {
            Ok(()) => {
                info!(correlation_id = %correlation_id, "Tick delivered");
                TickResponse::ok()
            }
            Err(failure) => {
                error!(correlation_id = %correlation_id, "Error processing tick: {}", failure.error);
                let response = TickResponse::failure(failure.error.to_string());

                // A return_url that just rejected a post is not posted to again.
                if let Some(return_url) = return_url.filter(|_| !failure.return_url_failed) {
                    if let Err(post_err) =
                        post_tick_result(self.transport.as_ref(), return_url, &response).await
                    {
                        error!(
                            correlation_id = %correlation_id,
                            "Failed to report tick failure to return_url: {}", post_err
                        );
                    }
                }
                response
            }
        }
    }

    /// Select and fetch one verse, then format it for the channel.
    ///
    /// # Errors
    ///
    /// Returns the fetch failure; nothing is retried.
    pub async fn compose_message(&self, settings: &DeliverySettings) -> Result<String, VerseError> {
        let plan = select_plan(settings.source, self.picker.as_ref());
        let verse = self.fetcher.fetch_verse(&plan, &settings.translation).await?;
        Ok(format_verse_message(Some(&verse)))
    }

    async fn deliver(
        &self,
        destination: &Destination,
        settings: &DeliverySettings,
        return_url: Option<&str>,
    ) -> Result<(), TickFailure> {
        let message = self
            .compose_message(settings)
            .await
            .map_err(|error| TickFailure {
                error,
                return_url_failed: false,
            })?;

        dispatch_verse(
            self.transport.as_ref(),
            &self.webhook_base_url,
            destination,
            &message,
        )
        .await
        .map_err(|error| TickFailure {
            error,
            return_url_failed: matches!(destination, Destination::ReturnUrl(_)),
        })?;

        self.acknowledge(destination, return_url)
            .await
            .map_err(|error| TickFailure {
                error,
                return_url_failed: true,
            })
    }

    // When the verse went to a channel webhook, the caller's return_url
    // still expects the outcome envelope.
    async fn acknowledge(
        &self,
        destination: &Destination,
        return_url: Option<&str>,
    ) -> Result<(), VerseError> {
        match (destination, return_url) {
            (Destination::Channel(_), Some(return_url)) => {
                post_tick_result(self.transport.as_ref(), return_url, &TickResponse::ok()).await
            }
            _ => Ok(()),
        }
    }
}

/// Why a tick failed, and whether the failing post went to return_url.
struct TickFailure {
    error: VerseError,
    return_url_failed: bool,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
