// SentiScope - app/state.rs
//
// Application state management. Holds the loaded dataset, filter state,
// filtered indices, selection, and pagination.
// Owned by the eframe::App implementation.

use crate::core::filter::{self, FilterState};
use crate::core::model::{Review, ReviewDataset};
use crate::platform::config::Config;

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Loaded, enriched dataset (None until a file is opened).
    /// Read-only after construction; filters only ever produce index vectors.
    pub dataset: Option<ReviewDataset>,

    /// Current filter selection.
    pub filter_state: FilterState,

    /// Indices of reviews matching the current filter (into `dataset.reviews`).
    pub filtered_indices: Vec<usize>,

    /// Index of the currently selected row in `filtered_indices`.
    pub selected_index: Option<usize>,

    /// Current table page (0-based) over the filtered subset.
    pub page: usize,

    /// Reviews per table page (from config).
    pub page_size: usize,

    /// Cap on length-histogram bins (from config).
    pub max_bins: usize,

    /// Status message for the status bar.
    pub status_message: String,

    /// Whether to show the dataset summary dialog.
    pub show_summary: bool,
}

impl AppState {
    /// Create initial state from the validated configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            dataset: None,
            filter_state: FilterState::default(),
            filtered_indices: Vec::new(),
            selected_index: None,
            page: 0,
            page_size: config.page_size,
            max_bins: config.max_bins,
            status_message: "Ready. Open a review dataset to begin.".to_string(),
            show_summary: false,
        }
    }

    /// Ingest a newly loaded dataset and reset the view to the neutral
    /// selection (everything visible).
    pub fn set_dataset(&mut self, dataset: ReviewDataset) {
        self.filter_state = FilterState::default();
        self.filtered_indices = (0..dataset.len()).collect();
        self.selected_index = None;
        self.page = 0;
        self.status_message = format!(
            "Loaded {} reviews from '{}'.",
            dataset.len(),
            dataset.summary.source.display()
        );
        self.dataset = Some(dataset);
    }

    /// Recompute filtered indices from the current dataset and filter state.
    pub fn apply_filters(&mut self) {
        self.filtered_indices = match &self.dataset {
            Some(dataset) => filter::apply_filters(&dataset.reviews, &self.filter_state),
            None => Vec::new(),
        };

        // Clear selection if it is out of range
        if let Some(idx) = self.selected_index {
            if idx >= self.filtered_indices.len() {
                self.selected_index = None;
            }
        }

        // Keep the page within the new page count
        let last_page = self.page_count().saturating_sub(1);
        if self.page > last_page {
            self.page = last_page;
        }
    }

    /// Number of table pages over the filtered subset (at least 1).
    pub fn page_count(&self) -> usize {
        self.filtered_indices.len().div_ceil(self.page_size).max(1)
    }

    /// Get the currently selected review, if any.
    pub fn selected_review(&self) -> Option<&Review> {
        let dataset = self.dataset.as_ref()?;
        self.selected_index
            .and_then(|idx| self.filtered_indices.get(idx))
            .and_then(|&review_idx| dataset.reviews.get(review_idx))
    }

    /// Clear the loaded dataset and reset to initial state.
    pub fn clear(&mut self) {
        self.dataset = None;
        self.filter_state = FilterState::default();
        self.filtered_indices.clear();
        self.selected_index = None;
        self.page = 0;
        self.show_summary = false;
        self.status_message = "Ready.".to_string();
    }
}
