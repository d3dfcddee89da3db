// SentiScope - core/stats.rs
//
// Aggregate statistics over a filtered subset of reviews.
// All statistics degrade to zero on an empty subset; no division errors.

use crate::core::model::{Language, Review};

/// Headline statistics for the KPI cards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SubsetStats {
    /// Number of reviews in the subset.
    pub total: usize,

    /// Percentage of reviews with label code 1, of the whole subset.
    pub positive_percentage: f64,

    /// Mean character length over reviews with a defined length.
    pub average_length: f64,

    /// Percentage of Arabic-language reviews, of the whole subset.
    pub arabic_percentage: f64,
}

/// Compute subset statistics in a single pass over the index vector.
///
/// `indices` selects rows of `reviews`; out-of-range indices are ignored.
pub fn aggregate(reviews: &[Review], indices: &[usize]) -> SubsetStats {
    let mut total = 0usize;
    let mut positive = 0usize;
    let mut arabic = 0usize;
    let mut length_sum = 0usize;
    let mut length_count = 0usize;

    for &idx in indices {
        let Some(review) = reviews.get(idx) else {
            continue;
        };
        total += 1;
        if review.label == Some(1) {
            positive += 1;
        }
        if review.language == Language::Arabic {
            arabic += 1;
        }
        if let Some(len) = review.length {
            length_sum += len;
            length_count += 1;
        }
    }

    if total == 0 {
        return SubsetStats::default();
    }

    SubsetStats {
        total,
        positive_percentage: positive as f64 / total as f64 * 100.0,
        average_length: if length_count > 0 {
            length_sum as f64 / length_count as f64
        } else {
            0.0
        },
        arabic_percentage: arabic as f64 / total as f64 * 100.0,
    }
}
