use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerseError {
    #[error("Invalid tick request: {0}")]
    ValidationError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Bible API returned {status}: {body}")]
    UpstreamError { status: u16, body: String },

    #[error("Failed to parse {0}")]
    ParseError(String),

    #[error("Webhook delivery failed with {status}: {body}")]
    DispatchError { status: u16, body: String },
}

/// Stands in for a response body that could not be read.
pub const UNREADABLE_BODY: &str = "<failed to read body>";

impl VerseError {
    /// Non-success answer from the verse provider.
    #[must_use]
    pub fn upstream<E>(status: u16, body: Result<String, E>) -> Self {
        VerseError::UpstreamError {
            status,
            body: body_or_placeholder(body),
        }
    }

    /// Non-success answer from a webhook or return URL.
    #[must_use]
    pub fn dispatch<E>(status: u16, body: Result<String, E>) -> Self {
        VerseError::DispatchError {
            status,
            body: body_or_placeholder(body),
        }
    }
}

fn body_or_placeholder<E>(body: Result<String, E>) -> String {
    body.unwrap_or_else(|_| UNREADABLE_BODY.to_string())
}

impl From<reqwest::Error> for VerseError {
    fn from(error: reqwest::Error) -> Self {
        VerseError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for VerseError {
    fn from(error: serde_json::Error) -> Self {
        VerseError::ParseError(format!("JSON payload: {}", error))
    }
}

impl From<url::ParseError> for VerseError {
    fn from(error: url::ParseError) -> Self {
        VerseError::ConfigError(format!("invalid URL: {}", error))
    }
}
