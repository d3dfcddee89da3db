// SentiScope - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

// =============================================================================
// Sentiment
// =============================================================================

/// Human-readable sentiment category derived from the integer label code.
///
/// Codes outside {-1, 0, 1} map to `Unknown` rather than being silently
/// dropped, so malformed rows stay visible and filterable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
    #[default]
    Unknown,
}

impl Sentiment {
    /// Map a raw label code to its sentiment category.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Sentiment::Positive,
            0 => Sentiment::Neutral,
            -1 => Sentiment::Negative,
            _ => Sentiment::Unknown,
        }
    }

    /// All variants in display order. `Unknown` is always last so the
    /// Positive / Neutral / Negative ordering is preserved wherever the
    /// three core categories are shown.
    pub fn all() -> &'static [Sentiment] {
        &[
            Sentiment::Positive,
            Sentiment::Neutral,
            Sentiment::Negative,
            Sentiment::Unknown,
        ]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
            Sentiment::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Language
// =============================================================================

/// Detected review language.
///
/// This is a coarse Arabic-vs-other discriminator, not a true language
/// detector: any text containing a character in the Arabic Unicode block is
/// Arabic, everything else is English. `Unknown` marks rows with no text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum Language {
    Arabic,
    English,
    #[default]
    Unknown,
}

impl Language {
    /// All variants in display order.
    pub fn all() -> &'static [Language] {
        &[Language::Arabic, Language::English, Language::Unknown]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Language::Arabic => "Arabic",
            Language::English => "English",
            Language::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Language filter choice
// =============================================================================

/// The language filter control: show all rows or a single language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LanguageChoice {
    #[default]
    All,
    English,
    Arabic,
}

impl LanguageChoice {
    /// All variants in display order.
    pub fn all() -> &'static [LanguageChoice] {
        &[
            LanguageChoice::All,
            LanguageChoice::English,
            LanguageChoice::Arabic,
        ]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            LanguageChoice::All => "All",
            LanguageChoice::English => "English",
            LanguageChoice::Arabic => "Arabic",
        }
    }

    /// Whether a row with the given language passes this choice.
    pub fn admits(&self, language: Language) -> bool {
        match self {
            LanguageChoice::All => true,
            LanguageChoice::English => language == Language::English,
            LanguageChoice::Arabic => language == Language::Arabic,
        }
    }

    /// Parse a user-supplied choice name (CLI flag), case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "all" => Some(LanguageChoice::All),
            "english" => Some(LanguageChoice::English),
            "arabic" => Some(LanguageChoice::Arabic),
            _ => None,
        }
    }
}

// =============================================================================
// Review (enriched row)
// =============================================================================

/// A single customer review with its derived columns.
///
/// Raw fields (`content`, `label`) are immutable once loaded; the derived
/// columns (`language`, `length`, `sentiment`) are computed exactly once at
/// load time and never recomputed or mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Review {
    /// Monotonically increasing row number assigned at load.
    pub id: u64,

    /// Raw review text. `None` when the source cell was null or missing.
    pub content: Option<String>,

    /// Raw sentiment code from the source table. `None` when the cell was
    /// missing or not an integer.
    pub label: Option<i64>,

    /// Derived: detected language.
    pub language: Language,

    /// Derived: character count of `content`. `None` when content is null.
    pub length: Option<usize>,

    /// Derived: sentiment category from `label`.
    pub sentiment: Sentiment,
}

// =============================================================================
// ReviewDataset (the complete enriched table)
// =============================================================================

/// The full enriched table plus its load summary.
///
/// Built once per load and treated as read-only for the rest of the session;
/// filtering produces index vectors into `reviews`, never a mutation.
#[derive(Debug, Clone)]
pub struct ReviewDataset {
    /// All enriched reviews, in source order.
    pub reviews: Vec<Review>,

    /// Statistics gathered during the load pass.
    pub summary: LoadSummary,
}

impl ReviewDataset {
    /// Build the dataset and its summary from freshly enriched reviews.
    pub fn from_reviews(
        source: PathBuf,
        reviews: Vec<Review>,
        truncated_rows: usize,
        duration: Duration,
    ) -> Self {
        let mut rows_by_language: HashMap<Language, usize> = HashMap::new();
        let mut null_content_rows = 0;
        let mut unknown_label_rows = 0;

        for review in &reviews {
            *rows_by_language.entry(review.language).or_insert(0) += 1;
            if review.content.is_none() {
                null_content_rows += 1;
            }
            if review.sentiment == Sentiment::Unknown {
                unknown_label_rows += 1;
            }
        }

        let summary = LoadSummary {
            source,
            total_rows: reviews.len(),
            null_content_rows,
            unknown_label_rows,
            rows_by_language,
            truncated_rows,
            duration,
        };

        ReviewDataset { reviews, summary }
    }

    /// Number of reviews.
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}

// =============================================================================
// Load summary
// =============================================================================

/// Summary statistics for a completed dataset load.
#[derive(Debug, Clone, Default)]
pub struct LoadSummary {
    /// Path the dataset was loaded from.
    pub source: PathBuf,

    /// Total rows loaded (after any truncation).
    pub total_rows: usize,

    /// Rows with a null/missing review text.
    pub null_content_rows: usize,

    /// Rows whose label code was missing or outside {-1, 0, 1}.
    pub unknown_label_rows: usize,

    /// Row count per detected language.
    pub rows_by_language: HashMap<Language, usize>,

    /// Rows dropped because the dataset exceeded the row cap.
    pub truncated_rows: usize,

    /// Wall-clock load duration.
    pub duration: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_code_mapping_is_bijective_on_domain() {
        assert_eq!(Sentiment::from_code(1), Sentiment::Positive);
        assert_eq!(Sentiment::from_code(0), Sentiment::Neutral);
        assert_eq!(Sentiment::from_code(-1), Sentiment::Negative);
    }

    #[test]
    fn test_out_of_domain_codes_map_to_unknown() {
        for code in [2, 7, -2, i64::MAX, i64::MIN] {
            assert_eq!(Sentiment::from_code(code), Sentiment::Unknown);
        }
    }

    #[test]
    fn test_sentiment_display_order() {
        let labels: Vec<_> = Sentiment::all().iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["Positive", "Neutral", "Negative", "Unknown"]);
    }

    #[test]
    fn test_language_choice_admits() {
        assert!(LanguageChoice::All.admits(Language::Arabic));
        assert!(LanguageChoice::All.admits(Language::Unknown));
        assert!(LanguageChoice::Arabic.admits(Language::Arabic));
        assert!(!LanguageChoice::Arabic.admits(Language::English));
        assert!(!LanguageChoice::English.admits(Language::Unknown));
    }

    #[test]
    fn test_language_choice_parse() {
        assert_eq!(LanguageChoice::parse("Arabic"), Some(LanguageChoice::Arabic));
        assert_eq!(LanguageChoice::parse("ENGLISH"), Some(LanguageChoice::English));
        assert_eq!(LanguageChoice::parse("all"), Some(LanguageChoice::All));
        assert_eq!(LanguageChoice::parse("french"), None);
    }

    #[test]
    fn test_dataset_summary_counts() {
        let reviews = vec![
            Review {
                id: 0,
                content: Some("Great".to_string()),
                label: Some(1),
                language: Language::English,
                length: Some(5),
                sentiment: Sentiment::Positive,
            },
            Review {
                id: 1,
                content: None,
                label: Some(7),
                language: Language::Unknown,
                length: None,
                sentiment: Sentiment::Unknown,
            },
        ];
        let ds = ReviewDataset::from_reviews(
            PathBuf::from("test.csv"),
            reviews,
            0,
            Duration::from_millis(1),
        );
        assert_eq!(ds.summary.total_rows, 2);
        assert_eq!(ds.summary.null_content_rows, 1);
        assert_eq!(ds.summary.unknown_label_rows, 1);
        assert_eq!(ds.summary.rows_by_language[&Language::English], 1);
        assert_eq!(ds.summary.rows_by_language[&Language::Unknown], 1);
    }
}
