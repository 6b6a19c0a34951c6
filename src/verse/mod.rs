//! Verse selection, retrieval and formatting

pub mod client;
pub mod format;
pub mod models;
pub mod source;

// Re-export main types for convenience
pub use client::{BibleApiClient, VerseFetcher, parse_verse_body};
pub use format::{NO_VERSE_FOUND, format_verse_message};
pub use models::{CanonicalVerse, UpstreamResponse, VerseEntry};
pub use source::{
    EntropyPicker, FixedPicker, PassagePicker, QueryPlan, SourceCategory, select_plan,
};
