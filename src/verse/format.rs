use super::models::CanonicalVerse;

pub const NO_VERSE_FOUND: &str = "No Bible verse found for the provided settings.";

const HEADER: &str = "📖 *Daily Bible Verse* 📖";

/// Render a verse for the channel: header, quoted text, emphasized reference.
///
/// A missing record or one without verse entries yields [`NO_VERSE_FOUND`].
#[must_use]
pub fn format_verse_message(verse: Option<&CanonicalVerse>) -> String {
    let Some((verse, first)) = verse.and_then(|v| v.first_verse().map(|first| (v, first))) else {
        return NO_VERSE_FOUND.to_string();
    };

    format!("{HEADER}\n\n\"{}\"\n\n*{}*", first.text, verse.reference)
}
