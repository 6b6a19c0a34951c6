use std::env;

use url::Url;

use crate::errors::VerseError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_LOGO_URL: &str =
    "https://i.postimg.cc/qqpSHdMt/Blue-Waves-Surfing-Club-Logo-3.png";
pub const DEFAULT_BIBLE_API_URL: &str = "https://bible-api.com";
pub const DEFAULT_WEBHOOK_BASE_URL: &str = "https://ping.telex.im/v1/webhooks";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_ALLOWED_ORIGINS: &str =
    "https://telex.im,https://telex-bible-verse-bot.onrender.com";

/// Process-wide settings, read once at cold start and never mutated.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: String,
    pub logo_url: String,
    pub bible_api_url: String,
    pub webhook_base_url: String,
    pub http_timeout_secs: u64,
    pub allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            logo_url: DEFAULT_LOGO_URL.to_string(),
            bible_api_url: DEFAULT_BIBLE_API_URL.to_string(),
            webhook_base_url: DEFAULT_WEBHOOK_BASE_URL.to_string(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            allowed_origins: split_origins(DEFAULT_ALLOWED_ORIGINS),
        }
    }
}

impl AppConfig {
    /// Reads the config from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`VerseError::ConfigError`] when a URL or the timeout is set
    /// to an invalid value.
    pub fn from_env() -> Result<Self, VerseError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Unset or blank keys
    /// fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`VerseError::ConfigError`] when a URL does not parse or
    /// `HTTP_TIMEOUT_SECS` is not a whole number of seconds.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, VerseError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let http_timeout_secs = match get("HTTP_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                VerseError::ConfigError(format!("HTTP_TIMEOUT_SECS: {}", e))
            })?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url: url_setting("BASE_URL", get("BASE_URL"), DEFAULT_BASE_URL)?,
            logo_url: url_setting("LOGO_URL", get("LOGO_URL"), DEFAULT_LOGO_URL)?,
            bible_api_url: url_setting(
                "BIBLE_API_URL",
                get("BIBLE_API_URL"),
                DEFAULT_BIBLE_API_URL,
            )?,
            webhook_base_url: url_setting(
                "TELEX_WEBHOOK_URL",
                get("TELEX_WEBHOOK_URL"),
                DEFAULT_WEBHOOK_BASE_URL,
            )?,
            http_timeout_secs,
            allowed_origins: split_origins(
                get("ALLOWED_ORIGINS")
                    .as_deref()
                    .unwrap_or(DEFAULT_ALLOWED_ORIGINS),
            ),
        })
    }

    #[must_use]
    pub fn tick_url(&self) -> String {
        format!("{}/bible-verse/tick", self.base_url)
    }

    #[must_use]
    pub fn is_allowed_origin(&self, origin: &str) -> bool {
        let origin = origin.trim_end_matches('/');
        self.allowed_origins.iter().any(|o| o == origin)
    }
}

fn url_setting(key: &str, value: Option<String>, default: &str) -> Result<String, VerseError> {
    let raw = value.unwrap_or_else(|| default.to_string());
    let trimmed = raw.trim().trim_end_matches('/');
    Url::parse(trimmed).map_err(|e| VerseError::ConfigError(format!("{}: {}", key, e)))?;
    Ok(trimmed.to_string())
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .map(ToString::to_string)
        .collect()
}
