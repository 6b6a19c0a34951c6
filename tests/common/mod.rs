#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bible_verse::api::TickService;
use bible_verse::errors::VerseError;
use bible_verse::telex::WebhookTransport;
use bible_verse::verse::{CanonicalVerse, FixedPicker, QueryPlan, VerseEntry, VerseFetcher};
use serde_json::Value;

pub const WEBHOOK_BASE: &str = "https://ping.telex.im/v1/webhooks";

pub type FetchLog = Arc<Mutex<Vec<(QueryPlan, String)>>>;
pub type PostLog = Arc<Mutex<Vec<(String, Value)>>>;

/// Returns a canned verse (or error text) and records every query.
pub struct FakeFetcher {
    result: Result<CanonicalVerse, String>,
    calls: FetchLog,
}

impl FakeFetcher {
    pub fn returning(verse: CanonicalVerse) -> (Self, FetchLog) {
        let calls = FetchLog::default();
        (
            Self {
                result: Ok(verse),
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }

    pub fn failing(message: &str) -> (Self, FetchLog) {
        let calls = FetchLog::default();
        (
            Self {
                result: Err(message.to_string()),
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

#[async_trait]
impl VerseFetcher for FakeFetcher {
    async fn fetch_verse(
        &self,
        plan: &QueryPlan,
        translation: &str,
    ) -> Result<CanonicalVerse, VerseError> {
        self.calls
            .lock()
            .unwrap()
            .push((plan.clone(), translation.to_string()));
        self.result
            .clone()
            .map_err(VerseError::HttpError)
    }
}

/// Records every POST; URLs starting with one of `failing_prefixes` answer 500.
#[derive(Default)]
pub struct RecordingTransport {
    posts: PostLog,
    failing_prefixes: Vec<String>,
}

impl RecordingTransport {
    pub fn new() -> (Self, PostLog) {
        let posts = PostLog::default();
        (
            Self {
                posts: Arc::clone(&posts),
                failing_prefixes: Vec::new(),
            },
            posts,
        )
    }

    pub fn failing_for(prefix: &str) -> (Self, PostLog) {
        let (mut transport, posts) = Self::new();
        transport.failing_prefixes.push(prefix.to_string());
        (transport, posts)
    }
}

#[async_trait]
impl WebhookTransport for RecordingTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<(), VerseError> {
        self.posts
            .lock()
            .unwrap()
            .push((url.to_string(), body.clone()));
        if self.failing_prefixes.iter().any(|p| url.starts_with(p.as_str())) {
            return Err(VerseError::DispatchError {
                status: 500,
                body: "webhook unavailable".to_string(),
            });
        }
        Ok(())
    }
}

pub fn service(fetcher: FakeFetcher, transport: RecordingTransport) -> TickService {
    TickService::new(
        Box::new(fetcher),
        Box::new(transport),
        Box::new(FixedPicker(0)),
        WEBHOOK_BASE,
    )
}

pub fn john_3_16() -> CanonicalVerse {
    CanonicalVerse {
        reference: "John 3:16".to_string(),
        text: "For God so loved the world...".to_string(),
        translation: "kjv".to_string(),
        verses: vec![VerseEntry {
            book_id: "JHN".to_string(),
            book_name: "John".to_string(),
            chapter: 3,
            verse: 16,
            text: "For God so loved the world...".to_string(),
        }],
    }
}
