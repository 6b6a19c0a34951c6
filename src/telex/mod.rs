//! All Telex-specific functionality

pub mod client;
pub mod deliver;
pub mod integration_config;

// Re-export main types for convenience
pub use client::{HttpTransport, WebhookTransport, build_http_client};
pub use deliver::{channel_webhook_url, dispatch_verse, post_tick_result};
pub use integration_config::{IntegrationConfig, build_integration_config, integration_config};
