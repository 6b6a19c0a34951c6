use std::sync::Arc;

use bible_verse::api::{AppState, handler};
use bible_verse::core::config::AppConfig;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    bible_verse::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        lambda_runtime::Error::from(e.to_string())
    })?;
    let state = Arc::new(AppState::from_config(config));

    lambda_runtime::run(lambda_runtime::service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(&state, event).await }
    }))
    .await
}
