// SentiScope - core/charts.rs
//
// Chart data building: reshape a filtered subset into the small summary
// tables the chart panels render. Pure functions, no UI dependencies.

use crate::core::model::{Review, Sentiment};

// ---------------------------------------------------------------------------
// Sentiment category counts
// ---------------------------------------------------------------------------

/// Per-category review counts in fixed display order
/// [Positive, Neutral, Negative, Unknown]. Absent categories are reported
/// with a zero count so the display order never shifts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentCounts {
    pub counts: Vec<(Sentiment, usize)>,
}

impl SentimentCounts {
    /// Count for a single category.
    pub fn get(&self, sentiment: Sentiment) -> usize {
        self.counts
            .iter()
            .find(|(s, _)| *s == sentiment)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

/// Count subset rows per sentiment category.
pub fn sentiment_counts(reviews: &[Review], indices: &[usize]) -> SentimentCounts {
    let mut counts: Vec<(Sentiment, usize)> =
        Sentiment::all().iter().map(|s| (*s, 0)).collect();

    for &idx in indices {
        let Some(review) = reviews.get(idx) else {
            continue;
        };
        if let Some(slot) = counts.iter_mut().find(|(s, _)| *s == review.sentiment) {
            slot.1 += 1;
        }
    }

    SentimentCounts { counts }
}

// ---------------------------------------------------------------------------
// Length histogram
// ---------------------------------------------------------------------------

/// One equal-width bin of the review-length histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// Inclusive lower bound of the bin (character count).
    pub start: f64,

    /// Exclusive upper bound (the last bin's bound is inclusive).
    pub end: f64,

    /// Rows in the bin.
    pub total: usize,

    /// Rows in the bin per sentiment, in display order, for stacked bars.
    pub by_sentiment: Vec<(Sentiment, usize)>,
}

/// Binned review-length distribution over a subset.
///
/// Rows with undefined length (null content) do not appear in any bin.
/// An empty subset yields an empty histogram, not an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LengthHistogram {
    pub bins: Vec<HistogramBin>,
}

impl LengthHistogram {
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}

/// Partition the subset's length values into at most `max_bins` equal-width
/// bins spanning the observed min..max.
///
/// The bin count never exceeds the number of distinct integer lengths in the
/// span, so a subset with a single length gets exactly one bin.
pub fn length_histogram(
    reviews: &[Review],
    indices: &[usize],
    max_bins: usize,
) -> LengthHistogram {
    let samples: Vec<(usize, Sentiment)> = indices
        .iter()
        .filter_map(|&idx| {
            let review = reviews.get(idx)?;
            review.length.map(|len| (len, review.sentiment))
        })
        .collect();

    if samples.is_empty() {
        return LengthHistogram::default();
    }

    let min = samples.iter().map(|(len, _)| *len).min().unwrap_or(0);
    let max = samples.iter().map(|(len, _)| *len).max().unwrap_or(0);
    let span = max - min + 1;
    let n_bins = max_bins.max(1).min(span);
    let width = span as f64 / n_bins as f64;

    let mut bins: Vec<HistogramBin> = (0..n_bins)
        .map(|b| HistogramBin {
            start: min as f64 + b as f64 * width,
            end: min as f64 + (b + 1) as f64 * width,
            total: 0,
            by_sentiment: Sentiment::all().iter().map(|s| (*s, 0)).collect(),
        })
        .collect();

    for (len, sentiment) in samples {
        let mut bin = ((len - min) as f64 / width) as usize;
        if bin >= n_bins {
            bin = n_bins - 1;
        }
        bins[bin].total += 1;
        if let Some(slot) = bins[bin]
            .by_sentiment
            .iter_mut()
            .find(|(s, _)| *s == sentiment)
        {
            slot.1 += 1;
        }
    }

    LengthHistogram { bins }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::enrich::enrich;

    fn review_of_length(id: u64, len: usize, label: i64) -> Review {
        enrich(id, Some("x".repeat(len)), Some(label))
    }

    #[test]
    fn test_counts_preserve_display_order_with_zeros() {
        let reviews = vec![
            review_of_length(0, 5, 1),
            review_of_length(1, 6, 1),
            review_of_length(2, 7, 1),
            review_of_length(3, 8, -1),
            review_of_length(4, 9, -1),
        ];
        let indices: Vec<usize> = (0..reviews.len()).collect();
        let counts = sentiment_counts(&reviews, &indices);

        let order: Vec<Sentiment> = counts.counts.iter().map(|(s, _)| *s).collect();
        assert_eq!(order, Sentiment::all());
        assert_eq!(counts.get(Sentiment::Positive), 3);
        assert_eq!(counts.get(Sentiment::Neutral), 0);
        assert_eq!(counts.get(Sentiment::Negative), 2);
        assert_eq!(counts.get(Sentiment::Unknown), 0);
    }

    #[test]
    fn test_empty_subset_histogram_is_empty() {
        let reviews = vec![review_of_length(0, 5, 1)];
        let hist = length_histogram(&reviews, &[], 30);
        assert!(hist.is_empty());
    }

    #[test]
    fn test_all_null_lengths_histogram_is_empty() {
        let reviews = vec![enrich(0, None, Some(1)), enrich(1, None, Some(0))];
        let hist = length_histogram(&reviews, &[0, 1], 30);
        assert!(hist.is_empty());
    }

    #[test]
    fn test_bin_count_capped() {
        let reviews: Vec<Review> = (0..100)
            .map(|i| review_of_length(i, i as usize + 1, 0))
            .collect();
        let indices: Vec<usize> = (0..reviews.len()).collect();
        let hist = length_histogram(&reviews, &indices, 30);
        assert_eq!(hist.bins.len(), 30);
    }

    #[test]
    fn test_bin_count_never_exceeds_distinct_span() {
        let reviews = vec![
            review_of_length(0, 3, 1),
            review_of_length(1, 4, 1),
            review_of_length(2, 5, 1),
        ];
        let hist = length_histogram(&reviews, &[0, 1, 2], 30);
        // Span of 3 distinct integer lengths gives at most 3 bins.
        assert_eq!(hist.bins.len(), 3);
    }

    #[test]
    fn test_single_length_gets_one_bin() {
        let reviews = vec![review_of_length(0, 10, 1), review_of_length(1, 10, -1)];
        let hist = length_histogram(&reviews, &[0, 1], 30);
        assert_eq!(hist.bins.len(), 1);
        assert_eq!(hist.bins[0].total, 2);
    }

    #[test]
    fn test_bin_totals_sum_to_defined_lengths() {
        let mut reviews: Vec<Review> = (0..50)
            .map(|i| review_of_length(i, (i as usize * 7) % 200 + 1, (i as i64 % 3) - 1))
            .collect();
        reviews.push(enrich(50, None, Some(1)));
        let indices: Vec<usize> = (0..reviews.len()).collect();

        let hist = length_histogram(&reviews, &indices, 30);
        let total: usize = hist.bins.iter().map(|b| b.total).sum();
        assert_eq!(total, 50);

        // Per-bin sentiment counts sum to the bin total.
        for bin in &hist.bins {
            let stacked: usize = bin.by_sentiment.iter().map(|(_, n)| n).sum();
            assert_eq!(stacked, bin.total);
        }
    }

    #[test]
    fn test_every_length_falls_inside_its_bin() {
        let reviews = vec![
            review_of_length(0, 1, 1),
            review_of_length(1, 500, 1),
            review_of_length(2, 250, 0),
        ];
        let hist = length_histogram(&reviews, &[0, 1, 2], 30);

        for len in [1usize, 500, 250] {
            let covered = hist
                .bins
                .iter()
                .any(|b| (len as f64) >= b.start && (len as f64) < b.end + 1e-9);
            assert!(covered, "length {len} not covered by any bin");
        }
    }
}
