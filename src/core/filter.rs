// SentiScope - core/filter.rs
//
// Composable filter engine for reviews.
// All active predicates are AND-combined; applying them in any order gives
// the same subset, so a single pass suffices.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{LanguageChoice, Review, Sentiment};
use std::collections::HashSet;

/// Complete filter selection. All fields are AND-combined when applied.
#[derive(Debug, Clone)]
pub struct FilterState {
    /// Language choice: All passes every row, otherwise exact match.
    pub language: LanguageChoice,

    /// Sentiment categories to include. Plain set membership: an empty set
    /// matches nothing.
    pub sentiments: HashSet<Sentiment>,

    /// Substring text search (case-insensitive). Empty = no filter.
    /// Null review text never matches a non-empty search.
    pub search: String,
}

impl Default for FilterState {
    /// The neutral selection: every language, every sentiment, no search.
    fn default() -> Self {
        Self {
            language: LanguageChoice::All,
            sentiments: Sentiment::all().iter().copied().collect(),
            search: String::new(),
        }
    }
}

impl FilterState {
    /// Create a quick-filter for negative reviews only.
    pub fn negative_only() -> Self {
        let mut sentiments = HashSet::new();
        sentiments.insert(Sentiment::Negative);
        Self {
            sentiments,
            ..Default::default()
        }
    }

    /// Toggle a sentiment's membership in the selected set.
    pub fn toggle_sentiment(&mut self, sentiment: Sentiment) {
        if !self.sentiments.remove(&sentiment) {
            self.sentiments.insert(sentiment);
        }
    }
}

/// Apply the filter selection to a slice of reviews, returning indices of
/// matching rows.
///
/// Returns a Vec of indices into the original slice. This avoids copying
/// reviews and lets the table view page over the filtered subset. The source
/// slice is never modified; each call produces a fresh subset.
pub fn apply_filters(reviews: &[Review], filter: &FilterState) -> Vec<usize> {
    // Lowercase the needle once, not per row.
    let search_lower = filter.search.to_lowercase();

    reviews
        .iter()
        .enumerate()
        .filter(|(_, review)| matches_all(review, filter, &search_lower))
        .map(|(idx, _)| idx)
        .collect()
}

/// Check if a single review matches all predicates.
fn matches_all(review: &Review, filter: &FilterState, search_lower: &str) -> bool {
    // Language predicate
    if !filter.language.admits(review.language) {
        return false;
    }

    // Sentiment predicate (set membership; empty set matches nothing)
    if !filter.sentiments.contains(&review.sentiment) {
        return false;
    }

    // Text search (case-insensitive substring; null content never matches)
    if !search_lower.is_empty() {
        match &review.content {
            Some(text) => {
                if !text.to_lowercase().contains(search_lower) {
                    return false;
                }
            }
            None => return false,
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::enrich::enrich;
    use crate::core::model::Language;

    fn sample_reviews() -> Vec<Review> {
        vec![
            enrich(0, Some("Great service".to_string()), Some(1)),
            enrich(1, Some("خدمة سيئة".to_string()), Some(-1)),
            enrich(2, Some("Okay".to_string()), Some(0)),
            enrich(3, None, Some(1)),
            enrich(4, Some("Cold pizza, slow delivery".to_string()), Some(-1)),
        ]
    }

    #[test]
    fn test_default_filter_returns_all() {
        let reviews = sample_reviews();
        let result = apply_filters(&reviews, &FilterState::default());
        assert_eq!(result, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_language_filter() {
        let reviews = sample_reviews();
        let filter = FilterState {
            language: LanguageChoice::Arabic,
            ..Default::default()
        };
        let result = apply_filters(&reviews, &filter);
        assert_eq!(result, vec![1]);
        assert_eq!(reviews[1].language, Language::Arabic);
    }

    #[test]
    fn test_arabic_negative_selection() {
        let reviews = sample_reviews();
        let mut filter = FilterState {
            language: LanguageChoice::Arabic,
            ..Default::default()
        };
        filter.sentiments = [Sentiment::Negative].into_iter().collect();
        let result = apply_filters(&reviews, &filter);
        assert_eq!(result, vec![1]);
    }

    #[test]
    fn test_empty_sentiment_set_matches_nothing() {
        let reviews = sample_reviews();
        let filter = FilterState {
            sentiments: HashSet::new(),
            ..Default::default()
        };
        assert!(apply_filters(&reviews, &filter).is_empty());
    }

    #[test]
    fn test_search_case_insensitive() {
        let reviews = sample_reviews();
        let filter = FilterState {
            search: "PIZZA".to_string(),
            ..Default::default()
        };
        let result = apply_filters(&reviews, &filter);
        assert_eq!(result, vec![4]);
    }

    #[test]
    fn test_search_never_matches_null_content() {
        let reviews = sample_reviews();
        let filter = FilterState {
            search: "pizza".to_string(),
            ..Default::default()
        };
        // Row 3 has null content; it must be skipped without error.
        let result = apply_filters(&reviews, &filter);
        assert!(!result.contains(&3));
    }

    #[test]
    fn test_arabic_search_text() {
        let reviews = sample_reviews();
        let filter = FilterState {
            search: "خدمة".to_string(),
            ..Default::default()
        };
        let result = apply_filters(&reviews, &filter);
        assert_eq!(result, vec![1]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let reviews = sample_reviews();
        let filter = FilterState {
            search: "a".to_string(),
            ..Default::default()
        };
        let first = apply_filters(&reviews, &filter);

        // Materialise the subset and filter it again with the same selection.
        let subset: Vec<Review> = first.iter().map(|&i| reviews[i].clone()).collect();
        let second = apply_filters(&subset, &filter);
        assert_eq!(second.len(), first.len());
        assert_eq!(second, (0..subset.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_negative_only_quick_filter() {
        let reviews = sample_reviews();
        let result = apply_filters(&reviews, &FilterState::negative_only());
        assert_eq!(result, vec![1, 4]);
    }

    #[test]
    fn test_toggle_sentiment() {
        let mut filter = FilterState::default();
        filter.toggle_sentiment(Sentiment::Neutral);
        assert!(!filter.sentiments.contains(&Sentiment::Neutral));
        filter.toggle_sentiment(Sentiment::Neutral);
        assert!(filter.sentiments.contains(&Sentiment::Neutral));
    }
}
