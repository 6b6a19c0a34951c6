//! Bible Verse Bot - delivers a Bible verse to a Telex channel on every tick.
//!
//! The crate backs a single API Lambda with two routes:
//! 1. `GET /bible-verse/integration-config` describes the integration and its
//!    settings to the Telex platform
//! 2. `POST /bible-verse/tick` picks a verse for the configured source and
//!    translation, fetches it from bible-api.com and posts it to the channel
//!    webhook
//!
//! # Architecture
//!
//! - `verse` maps a source category to a query, fetches and normalizes the
//!   verse, and formats the channel message
//! - `telex` posts webhook messages and builds the integration config
//! - `api` routes gateway events and orchestrates a tick
//!
//! # Example
//!
//! ```no_run
//! use bible_verse::core::models::DeliverySettings;
//! use bible_verse::verse::{BibleApiClient, EntropyPicker, VerseFetcher, format_verse_message, select_plan};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     bible_verse::setup_logging();
//!
//!     let settings = DeliverySettings::default();
//!     let plan = select_plan(settings.source, &EntropyPicker);
//!     let client = BibleApiClient::new(reqwest::Client::new(), "https://bible-api.com");
//!     let verse = client.fetch_verse(&plan, &settings.translation).await?;
//!
//!     println!("{}", format_verse_message(Some(&verse)));
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod core;
pub mod errors;
pub mod telex;
pub mod verse;

pub use errors::VerseError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Log level comes from `RUST_LOG`, defaulting to `info`. Safe to call more
/// than once; later calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// bible_verse::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
