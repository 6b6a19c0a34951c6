use serde::{Deserialize, Serialize};

use crate::verse::SourceCategory;

pub const DEFAULT_TRANSLATION: &str = "kjv";
pub const DEFAULT_INTERVAL: &str = "* * * * *";

pub const WEBHOOK_EVENT_NAME: &str = "Daily Bible Verse";
pub const WEBHOOK_USERNAME: &str = "Bible Verse Bot";

/// Body of `POST /bible-verse/tick` as sent by the scheduler.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickRequest {
    #[serde(default)]
    pub return_url: Option<String>,
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub settings: Option<TickSettings>,
}

/// Raw settings as they arrive, before defaults are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickSettings {
    #[serde(rename = "Source", default)]
    pub source: Option<String>,
    #[serde(rename = "Translation", default)]
    pub translation: Option<String>,
    #[serde(default)]
    pub interval: Option<String>,
}

/// Settings with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliverySettings {
    pub source: SourceCategory,
    pub translation: String,
    pub interval: String,
}

impl Default for DeliverySettings {
    fn default() -> Self {
        Self {
            source: SourceCategory::Random,
            translation: DEFAULT_TRANSLATION.to_string(),
            interval: DEFAULT_INTERVAL.to_string(),
        }
    }
}

impl DeliverySettings {
    #[must_use]
    pub fn from_raw(raw: Option<&TickSettings>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        let source = raw
            .source
            .as_deref()
            .map_or(SourceCategory::Random, SourceCategory::from_setting);

        let translation = raw
            .translation
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map_or_else(|| DEFAULT_TRANSLATION.to_string(), str::to_lowercase);

        let interval = raw
            .interval
            .as_deref()
            .map(str::trim)
            .filter(|i| !i.is_empty())
            .unwrap_or(DEFAULT_INTERVAL)
            .to_string();

        Self {
            source,
            translation,
            interval,
        }
    }
}

/// Where the verse message is pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Telex channel webhook, addressed by channel id.
    Channel(String),
    /// Caller-supplied URL used directly.
    ReturnUrl(String),
}

/// Envelope returned to the caller and echoed to `return_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TickResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

/// `status` field of a webhook message. Verse posts always carry `Success`;
/// `Failure` exists so messages in the webhook schema round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookMessage {
    pub event_name: String,
    pub username: String,
    pub status: DeliveryStatus,
    pub message: String,
}

impl WebhookMessage {
    #[must_use]
    pub fn verse(message: impl Into<String>) -> Self {
        Self {
            event_name: WEBHOOK_EVENT_NAME.to_string(),
            username: WEBHOOK_USERNAME.to_string(),
            status: DeliveryStatus::Success,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults_when_missing() {
        assert_eq!(DeliverySettings::from_raw(None), DeliverySettings::default());

        let blank = TickSettings {
            source: Some(String::new()),
            translation: Some("   ".to_string()),
            interval: None,
        };
        let settings = DeliverySettings::from_raw(Some(&blank));
        assert_eq!(settings.source, SourceCategory::Random);
        assert_eq!(settings.translation, "kjv");
        assert_eq!(settings.interval, "* * * * *");
    }

    #[test]
    fn test_translation_is_lowercased() {
        let raw = TickSettings {
            source: Some("Hope".to_string()),
            translation: Some(" KJV ".to_string()),
            interval: Some("0 8 * * *".to_string()),
        };
        let settings = DeliverySettings::from_raw(Some(&raw));
        assert_eq!(settings.source, SourceCategory::Hope);
        assert_eq!(settings.translation, "kjv");
        assert_eq!(settings.interval, "0 8 * * *");
    }

    #[test]
    fn test_tick_request_uses_capitalized_setting_keys() {
        let body = r#"{"channel_id":"c1","settings":{"Source":"Gospels","Translation":"web","Delivery Time":"08:00"}}"#;
        let req: TickRequest = serde_json::from_str(body).unwrap();
        let settings = req.settings.unwrap();
        assert_eq!(settings.source.as_deref(), Some("Gospels"));
        assert_eq!(settings.translation.as_deref(), Some("web"));
        assert!(settings.interval.is_none());
    }

    #[test]
    fn test_response_envelopes() {
        assert_eq!(
            serde_json::to_value(TickResponse::ok()).unwrap(),
            serde_json::json!({ "success": true })
        );
        assert_eq!(
            serde_json::to_value(TickResponse::failure("boom")).unwrap(),
            serde_json::json!({ "success": false, "message": "boom" })
        );
    }

    #[test]
    fn test_webhook_message_shape() {
        let value = serde_json::to_value(WebhookMessage::verse("hello")).unwrap();
        assert_eq!(value["event_name"], "Daily Bible Verse");
        assert_eq!(value["username"], "Bible Verse Bot");
        assert_eq!(value["status"], "success");
        assert_eq!(value["message"], "hello");
    }

    #[test]
    fn test_delivery_status_wire_values() {
        assert_eq!(
            serde_json::to_value(DeliveryStatus::Success).unwrap(),
            serde_json::json!("success")
        );

        let message: WebhookMessage = serde_json::from_value(serde_json::json!({
            "event_name": WEBHOOK_EVENT_NAME,
            "username": WEBHOOK_USERNAME,
            "status": "failure",
            "message": "upstream unavailable"
        }))
        .unwrap();
        assert_eq!(message.status, DeliveryStatus::Failure);
        assert_eq!(serde_json::to_value(&message).unwrap()["status"], "failure");
    }
}
