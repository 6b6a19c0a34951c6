//! API Lambda handler - thin router over the two integration routes.
//!
//! - `GET  /bible-verse/integration-config`
//! - `POST /bible-verse/tick`
//!
//! Every request is logged once with method, path, status and latency.

use std::time::Instant;

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::tick::TickService;
use super::{helpers, parsing};
use crate::core::config::AppConfig;
use crate::core::models::{TickRequest, TickResponse};
use crate::errors::VerseError;
use crate::telex::integration_config;

pub const INTEGRATION_CONFIG_PATH: &str = "/bible-verse/integration-config";
pub const TICK_PATH: &str = "/bible-verse/tick";

/// Read-only state built once per cold start.
pub struct AppState {
    pub config: AppConfig,
    pub ticks: TickService,
}

impl AppState {
    #[must_use]
    pub fn from_config(config: AppConfig) -> Self {
        let ticks = TickService::from_config(&config);
        Self { config, ticks }
    }
}

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never fails in practice; routing and tick failures are encoded in the
/// returned gateway response.
#[tracing::instrument(level = "info", skip(state, event))]
pub async fn function_handler(
    state: &AppState,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    Ok(route(state, &event.payload).await)
}

/// Route a raw gateway event and build its response.
pub async fn route(state: &AppState, payload: &Value) -> Value {
    let started = Instant::now();
    let method = parsing::request_method(payload).unwrap_or("GET").to_ascii_uppercase();
    let path = parsing::request_path(payload).unwrap_or("/");
    let origin = parsing::request_header(payload, "Origin");

    let response = dispatch(state, &method, path, payload).await;
    let response = helpers::with_cors(response, &state.config, origin);

    let status = helpers::status_code(&response);
    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    info!(
        method = %method,
        path = %path,
        status,
        latency_ms,
        "{} {} {} - {}ms",
        method,
        path,
        status,
        latency_ms
    );

    response
}

async fn dispatch(state: &AppState, method: &str, path: &str, payload: &Value) -> Value {
    if method == "OPTIONS" {
        return helpers::no_content();
    }

    let path = path.trim_end_matches('/');

    if path.ends_with(INTEGRATION_CONFIG_PATH) {
        return match method {
            "GET" | "HEAD" => handle_integration_config(&state.config),
            _ => helpers::err_response(405, "Method not allowed"),
        };
    }

    if path.ends_with(TICK_PATH) {
        return match method {
            "POST" => handle_tick(&state.ticks, payload).await,
            _ => helpers::err_response(405, "Method not allowed"),
        };
    }

    helpers::err_response(404, "Not found")
}

fn handle_integration_config(config: &AppConfig) -> Value {
    match serde_json::to_value(integration_config::integration_config(config)) {
        Ok(body) => helpers::json_response(200, &body),
        Err(e) => {
            error!("Failed to serialize integration config: {}", e);
            helpers::err_response(500, "Failed to build integration config")
        }
    }
}

async fn handle_tick(ticks: &TickService, payload: &Value) -> Value {
    let request = match parse_tick_request(payload) {
        Ok(request) => request,
        Err(message) => {
            error!("Invalid tick body: {}", message);
            return envelope(400, &TickResponse::failure(message));
        }
    };

    let response = ticks.handle_tick(request).await;
    envelope(200, &response)
}

fn parse_tick_request(payload: &Value) -> Result<TickRequest, String> {
    let body = parsing::request_body(payload).map_err(|e| e.to_string())?;
    match body.as_deref().map(str::trim) {
        None | Some("") => Ok(TickRequest::default()),
        Some(text) => serde_json::from_str(text)
            .map_err(|e| VerseError::from(e).to_string()),
    }
}

fn envelope(status_code: u16, response: &TickResponse) -> Value {
    let body = serde_json::to_value(response)
        .unwrap_or_else(|_| serde_json::json!({ "success": response.success }));
    helpers::json_response(status_code, &body)
}
