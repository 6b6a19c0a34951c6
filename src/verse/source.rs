//! Source category selection.
//!
//! Maps the user-facing `Source` setting onto a concrete query against the
//! Bible API. Book-based categories defer the verse choice to the API's
//! filtered random endpoint; themed categories draw one passage from a fixed
//! list through a [`PassagePicker`].

use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::warn;

pub const PSALMS: &str = "PSA";
pub const PROVERBS: &str = "PRO";
pub const MATTHEW: &str = "MAT";
pub const MARK: &str = "MRK";
pub const LUKE: &str = "LUK";
pub const JOHN: &str = "JHN";

pub const GOSPEL_BOOKS: [&str; 4] = [MATTHEW, MARK, LUKE, JOHN];

pub const HOPE_PASSAGES: [&str; 4] = [
    "Romans 15:13",
    "Hebrews 10:23",
    "Psalm 71:14",
    "Isaiah 40:31",
];

pub const COMFORT_PASSAGES: [&str; 4] = [
    "Psalm 23:4",
    "Matthew 11:28",
    "2 Corinthians 1:3-4",
    "Isaiah 41:10",
];

pub const WISDOM_PASSAGES: [&str; 4] = [
    "Proverbs 2:6",
    "James 1:5",
    "Proverbs 9:10",
    "Colossians 3:16",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SourceCategory {
    #[default]
    Random,
    Psalms,
    Proverbs,
    Gospels,
    Hope,
    Comfort,
    Wisdom,
}

impl SourceCategory {
    /// Every category in the order offered to users.
    pub const ALL: [SourceCategory; 7] = [
        SourceCategory::Random,
        SourceCategory::Psalms,
        SourceCategory::Proverbs,
        SourceCategory::Gospels,
        SourceCategory::Hope,
        SourceCategory::Comfort,
        SourceCategory::Wisdom,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SourceCategory::Random => "Random",
            SourceCategory::Psalms => "Psalms",
            SourceCategory::Proverbs => "Proverbs",
            SourceCategory::Gospels => "Gospels",
            SourceCategory::Hope => "Hope",
            SourceCategory::Comfort => "Comfort",
            SourceCategory::Wisdom => "Wisdom",
        }
    }

    /// Parses the `Source` setting. Matching is exact and case-sensitive, so
    /// padded or differently cased values fall back to `Random`.
    #[must_use]
    pub fn from_setting(value: &str) -> Self {
        if value.trim().is_empty() {
            return SourceCategory::Random;
        }
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == value)
            .unwrap_or_else(|| {
                warn!(source = %value, "Unknown verse source, falling back to Random");
                SourceCategory::Random
            })
    }
}

impl fmt::Display for SourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single upstream query. Exactly one strategy is active per plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryPlan {
    /// Random verse, optionally restricted to the listed book codes.
    Random { books: Vec<&'static str> },
    /// A literal passage reference such as `Romans 15:13`.
    Passage(String),
}

impl QueryPlan {
    #[must_use]
    pub fn uses_random_endpoint(&self) -> bool {
        matches!(self, QueryPlan::Random { .. })
    }

    /// Book codes restricting the random draw, if any.
    #[must_use]
    pub fn book_filter(&self) -> Option<&[&'static str]> {
        match self {
            QueryPlan::Random { books } if !books.is_empty() => Some(books.as_slice()),
            _ => None,
        }
    }

    #[must_use]
    pub fn fixed_passage(&self) -> Option<&str> {
        match self {
            QueryPlan::Passage(passage) => Some(passage),
            QueryPlan::Random { .. } => None,
        }
    }
}

/// Draws one passage from a themed list.
pub trait PassagePicker: Send + Sync {
    fn pick(&self, options: &[&'static str]) -> &'static str;
}

/// Uniform draw from a freshly seeded RNG, so no state is shared between
/// ticks.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyPicker;

impl PassagePicker for EntropyPicker {
    fn pick(&self, options: &[&'static str]) -> &'static str {
        let mut rng = StdRng::from_entropy();
        options.choose(&mut rng).copied().unwrap_or_default()
    }
}

/// Always returns the option at a fixed index (wrapping), for reproducible
/// draws.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPicker(pub usize);

impl PassagePicker for FixedPicker {
    fn pick(&self, options: &[&'static str]) -> &'static str {
        if options.is_empty() {
            return "";
        }
        options[self.0 % options.len()]
    }
}

#[must_use]
pub fn select_plan(category: SourceCategory, picker: &dyn PassagePicker) -> QueryPlan {
    match category {
        SourceCategory::Random => QueryPlan::Random { books: Vec::new() },
        SourceCategory::Psalms => QueryPlan::Random {
            books: vec![PSALMS],
        },
        SourceCategory::Proverbs => QueryPlan::Random {
            books: vec![PROVERBS],
        },
        SourceCategory::Gospels => QueryPlan::Random {
            books: GOSPEL_BOOKS.to_vec(),
        },
        SourceCategory::Hope => QueryPlan::Passage(picker.pick(&HOPE_PASSAGES).to_string()),
        SourceCategory::Comfort => QueryPlan::Passage(picker.pick(&COMFORT_PASSAGES).to_string()),
        SourceCategory::Wisdom => QueryPlan::Passage(picker.pick(&WISDOM_PASSAGES).to_string()),
    }
}
