//! Gateway response builders.

use serde_json::{Value, json};

use crate::core::config::AppConfig;

pub const CORS_METHODS: &str = "GET,HEAD,PUT,PATCH,POST,DELETE";

/// Returns a JSON response with the given status code.
#[must_use]
pub fn json_response(status_code: u16, body: &Value) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": body.to_string()
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json_response(status_code, &json!({ "error": message }))
}

/// Returns a 204 with no body, used for CORS preflight.
#[must_use]
pub fn no_content() -> Value {
    json!({ "statusCode": 204, "headers": {}, "body": "" })
}

#[must_use]
pub fn status_code(response: &Value) -> u16 {
    response
        .get("statusCode")
        .and_then(Value::as_u64)
        .and_then(|s| u16::try_from(s).ok())
        .unwrap_or(200)
}

/// Adds CORS headers when the request's origin is allowed.
#[must_use]
pub fn with_cors(mut response: Value, config: &AppConfig, origin: Option<&str>) -> Value {
    let Some(origin) = origin.filter(|o| config.is_allowed_origin(o)) else {
        return response;
    };

    if !response.get("headers").is_some_and(Value::is_object) {
        response["headers"] = json!({});
    }
    let headers = &mut response["headers"];
    headers["Access-Control-Allow-Origin"] = Value::String(origin.to_string());
    headers["Access-Control-Allow-Credentials"] = Value::String("true".to_string());
    headers["Access-Control-Allow-Methods"] = Value::String(CORS_METHODS.to_string());
    headers["Vary"] = Value::String("Origin".to_string());
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_response_serializes_body() {
        let resp = json_response(200, &json!({ "success": true }));
        assert_eq!(status_code(&resp), 200);
        assert_eq!(resp["body"], "{\"success\":true}");
        assert_eq!(resp["headers"]["Content-Type"], "application/json");
    }

    #[test]
    fn test_cors_only_for_allowed_origins() {
        let config = AppConfig::default();

        let resp = with_cors(no_content(), &config, Some("https://telex.im"));
        assert_eq!(resp["headers"]["Access-Control-Allow-Origin"], "https://telex.im");
        assert_eq!(resp["headers"]["Access-Control-Allow-Methods"], CORS_METHODS);

        let resp = with_cors(err_response(404, "Not found"), &config, Some("https://evil.example"));
        assert!(resp["headers"].get("Access-Control-Allow-Origin").is_none());

        let resp = with_cors(no_content(), &config, None);
        assert!(resp["headers"].get("Access-Control-Allow-Origin").is_none());
    }
}
