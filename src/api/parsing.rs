use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::errors::VerseError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// HTTP method from a 2.0 (`requestContext.http.method`) or 1.0
/// (`httpMethod`) gateway event.
pub fn request_method(payload: &Value) -> Option<&str> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
}

pub fn request_path(payload: &Value) -> Option<&str> {
    v_str(payload, &["rawPath"]).or_else(|| v_str(payload, &["path"]))
}

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

pub fn request_header<'a>(payload: &'a Value, name: &str) -> Option<&'a str> {
    payload
        .get("headers")
        .and_then(|headers| get_header_value(headers, name))
}

/// Request body as text, base64-decoded when the gateway flagged it.
/// A missing or null body is `None`.
pub fn request_body(payload: &Value) -> Result<Option<String>, VerseError> {
    let Some(body) = payload.get("body").filter(|b| !b.is_null()) else {
        return Ok(None);
    };

    let Some(body_str) = body.as_str() else {
        return Err(VerseError::ParseError("request body: not a string".to_string()));
    };

    let encoded = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !encoded {
        return Ok(Some(body_str.to_string()));
    }

    let bytes = STANDARD
        .decode(body_str)
        .map_err(|e| VerseError::ParseError(format!("base64 request body: {}", e)))?;
    String::from_utf8(bytes)
        .map(Some)
        .map_err(|e| VerseError::ParseError(format!("request body encoding: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_and_path_from_v2_event() {
        let event = json!({
            "rawPath": "/bible-verse/tick",
            "requestContext": { "http": { "method": "POST" } }
        });
        assert_eq!(request_method(&event), Some("POST"));
        assert_eq!(request_path(&event), Some("/bible-verse/tick"));
    }

    #[test]
    fn test_method_and_path_from_v1_event() {
        let event = json!({ "path": "/bible-verse/integration-config", "httpMethod": "GET" });
        assert_eq!(request_method(&event), Some("GET"));
        assert_eq!(request_path(&event), Some("/bible-verse/integration-config"));
    }

    #[test]
    fn test_headers_are_case_insensitive() {
        let event = json!({ "headers": { "origin": "https://telex.im" } });
        assert_eq!(request_header(&event, "Origin"), Some("https://telex.im"));
        assert_eq!(request_header(&event, "X-Missing"), None);
    }

    #[test]
    fn test_base64_body_is_decoded() {
        let event = json!({
            "body": STANDARD.encode(r#"{"channel_id":"c1"}"#),
            "isBase64Encoded": true
        });
        assert_eq!(
            request_body(&event).unwrap().as_deref(),
            Some(r#"{"channel_id":"c1"}"#)
        );
    }

    #[test]
    fn test_missing_and_invalid_bodies() {
        assert_eq!(request_body(&json!({})).unwrap(), None);
        assert_eq!(request_body(&json!({ "body": null })).unwrap(), None);
        assert!(request_body(&json!({ "body": 42 })).is_err());
        assert!(request_body(&json!({ "body": "%%%", "isBase64Encoded": true })).is_err());
    }
}
