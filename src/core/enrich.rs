// SentiScope - core/enrich.rs
//
// Column enrichment: derive language, length, and sentiment from the raw
// review fields. Pure per-row functions, applied exactly once at load time.

use crate::core::model::{Language, Review, Sentiment};
use crate::util::constants::{ARABIC_BLOCK_END, ARABIC_BLOCK_START};

/// Classify the language of a review text.
///
/// Null text is `Unknown`. Text containing at least one character in the
/// Arabic Unicode block (U+0600–U+06FF) is `Arabic`; everything else is
/// `English`. Mixed-script text with a single Arabic character classifies
/// as Arabic.
pub fn classify_language(content: Option<&str>) -> Language {
    match content {
        None => Language::Unknown,
        Some(text) => {
            if text
                .chars()
                .any(|c| (ARABIC_BLOCK_START..=ARABIC_BLOCK_END).contains(&c))
            {
                Language::Arabic
            } else {
                Language::English
            }
        }
    }
}

/// Build an enriched review from its raw fields.
///
/// `length` is the character count of the content (null-propagating);
/// `sentiment` maps the label code through the fixed lookup, with missing
/// or out-of-domain codes becoming `Sentiment::Unknown`.
pub fn enrich(id: u64, content: Option<String>, label: Option<i64>) -> Review {
    let language = classify_language(content.as_deref());
    let length = content.as_ref().map(|text| text.chars().count());
    let sentiment = label.map(Sentiment::from_code).unwrap_or_default();

    Review {
        id,
        content,
        label,
        language,
        length,
        sentiment,
    }
}
