use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One verse inside a canonical record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseEntry {
    pub book_id: String,
    pub book_name: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

/// The single in-memory shape every upstream response is normalized into.
///
/// An empty `verses` list means nothing was found for the query. `reference`
/// and `verses` are required when reading a passage response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalVerse {
    pub reference: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, alias = "translation_id")]
    pub translation: String,
    pub verses: Vec<VerseEntry>,
}

impl CanonicalVerse {
    #[must_use]
    pub fn first_verse(&self) -> Option<&VerseEntry> {
        self.verses.first()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}

/// The verse nested under `random_verse` by the random endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RandomVerse {
    pub book_id: String,
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

/// The random endpoints report the translation either as a bare code or as
/// an object carrying an `identifier`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TranslationField {
    Code(String),
    Info { identifier: String },
}

impl TranslationField {
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            TranslationField::Code(code) => code,
            TranslationField::Info { identifier } => identifier,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RandomVerseResponse {
    pub random_verse: RandomVerse,
    #[serde(default)]
    pub translation: Option<TranslationField>,
}

/// Either response shape the Bible API can produce.
///
/// The shape is chosen by the presence of `random_verse` and then read
/// strictly, so a malformed random verse never falls through to the passage
/// shape. Non-object bodies are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamResponse {
    Random(RandomVerseResponse),
    Passage(CanonicalVerse),
}

impl<'de> Deserialize<'de> for UpstreamResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        let is_random = object.contains_key("random_verse");
        let body = Value::Object(object);

        let parsed = if is_random {
            serde_json::from_value(body).map(UpstreamResponse::Random)
        } else {
            serde_json::from_value(body).map(UpstreamResponse::Passage)
        };
        parsed.map_err(de::Error::custom)
    }
}

impl UpstreamResponse {
    /// Collapses either shape into a [`CanonicalVerse`]. Passage responses
    /// pass through untouched.
    #[must_use]
    pub fn normalize(self) -> CanonicalVerse {
        match self {
            UpstreamResponse::Passage(verse) => verse,
            UpstreamResponse::Random(RandomVerseResponse {
                random_verse,
                translation,
            }) => {
                let reference = format!(
                    "{} {}:{}",
                    random_verse.book, random_verse.chapter, random_verse.verse
                );
                CanonicalVerse {
                    reference,
                    text: random_verse.text.clone(),
                    translation: translation
                        .as_ref()
                        .map(|t| t.code().to_string())
                        .unwrap_or_default(),
                    verses: vec![VerseEntry {
                        book_id: random_verse.book_id,
                        book_name: random_verse.book,
                        chapter: random_verse.chapter,
                        verse: random_verse.verse,
                        text: random_verse.text,
                    }],
                }
            }
        }
    }
}
