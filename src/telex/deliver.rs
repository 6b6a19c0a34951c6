use tracing::info;
use url::Url;

use super::client::WebhookTransport;
use crate::core::models::{Destination, TickResponse, WebhookMessage};
use crate::errors::VerseError;

/// `<webhook_base>/<channel_id>`, with the id kept as a single path segment.
///
/// # Errors
///
/// Returns an error if the base URL is not a valid hierarchical URL.
pub fn channel_webhook_url(webhook_base: &str, channel_id: &str) -> Result<Url, VerseError> {
    let mut url = Url::parse(webhook_base)?;
    url.path_segments_mut()
        .map_err(|()| {
            VerseError::ConfigError(format!("webhook URL cannot be a base: {}", webhook_base))
        })?
        .pop_if_empty()
        .push(channel_id);
    Ok(url)
}

/// Resolve the URL a verse message should be posted to.
///
/// # Errors
///
/// Returns an error if the destination cannot be turned into a URL.
pub fn destination_url(webhook_base: &str, destination: &Destination) -> Result<Url, VerseError> {
    match destination {
        Destination::Channel(channel_id) => channel_webhook_url(webhook_base, channel_id),
        Destination::ReturnUrl(return_url) => Url::parse(return_url).map_err(|e| {
            VerseError::ValidationError(format!("return_url is not a valid URL: {}", e))
        }),
    }
}

/// Post the formatted verse once to its destination. Failures propagate.
///
/// # Errors
///
/// Returns an error if the URL is invalid or the POST fails.
pub async fn dispatch_verse(
    transport: &dyn WebhookTransport,
    webhook_base: &str,
    destination: &Destination,
    message: &str,
) -> Result<(), VerseError> {
    let url = destination_url(webhook_base, destination)?;
    let payload = serde_json::to_value(WebhookMessage::verse(message))?;

    info!(destination = %url, "Posting verse to webhook");
    transport.post_json(url.as_str(), &payload).await
}

/// Echo the tick outcome to the caller's `return_url`.
///
/// # Errors
///
/// Returns an error if the POST fails.
pub async fn post_tick_result(
    transport: &dyn WebhookTransport,
    return_url: &str,
    result: &TickResponse,
) -> Result<(), VerseError> {
    let payload = serde_json::to_value(result)?;
    info!(return_url = %return_url, success = result.success, "Posting tick result");
    transport.post_json(return_url, &payload).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_webhook_url() {
        let url = channel_webhook_url("https://ping.telex.im/v1/webhooks", "channel123").unwrap();
        assert_eq!(url.as_str(), "https://ping.telex.im/v1/webhooks/channel123");
    }

    #[test]
    fn test_channel_id_cannot_escape_its_segment() {
        let url = channel_webhook_url("https://ping.telex.im/v1/webhooks", "a/b?c").unwrap();
        assert_eq!(url.as_str(), "https://ping.telex.im/v1/webhooks/a%2Fb%3Fc");
    }

    #[test]
    fn test_return_url_destination_must_parse() {
        let dest = Destination::ReturnUrl("not a url".to_string());
        let err = destination_url("https://ping.telex.im/v1/webhooks", &dest).unwrap_err();
        assert!(matches!(err, VerseError::ValidationError(_)));

        let dest = Destination::ReturnUrl("https://telex.im/return/abc".to_string());
        let url = destination_url("https://ping.telex.im/v1/webhooks", &dest).unwrap();
        assert_eq!(url.as_str(), "https://telex.im/return/abc");
    }
}
