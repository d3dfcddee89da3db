// SentiScope - ui/panels/table.rs
//
// Paginated review explorer over the filtered subset.
// Row clicks select a review for the detail pane. Selection and page
// changes are collected during rendering and applied after the dataset
// borrow is released.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants::TABLE_PREVIEW_CHARS;

/// Render the review table with pager controls.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.strong("Review Explorer");

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    let filtered = state.filtered_indices.len();
    if filtered == 0 {
        ui.label("No reviews match the current filters.");
        return;
    }

    let page_count = state.page_count();
    let page = state.page.min(page_count - 1);
    let start = page * state.page_size;
    let end = (start + state.page_size).min(filtered);

    // Pager controls
    let mut new_page = page;
    ui.horizontal(|ui| {
        if ui
            .add_enabled(page > 0, egui::Button::new("\u{25c0} Prev"))
            .clicked()
        {
            new_page = page - 1;
        }
        ui.label(format!(
            "Page {}/{} (rows {}-{} of {})",
            page + 1,
            page_count,
            start + 1,
            end,
            filtered
        ));
        if ui
            .add_enabled(page + 1 < page_count, egui::Button::new("Next \u{25b6}"))
            .clicked()
        {
            new_page = page + 1;
        }
    });

    ui.add_space(4.0);

    let mut clicked_row: Option<usize> = None;

    egui::Grid::new("review_table")
        .num_columns(4)
        .striped(true)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            ui.strong("Sentiment");
            ui.strong("Language");
            ui.strong("Length");
            ui.strong("Review");
            ui.end_row();

            for display_idx in start..end {
                let Some(&review_idx) = state.filtered_indices.get(display_idx) else {
                    continue;
                };
                let Some(review) = dataset.reviews.get(review_idx) else {
                    continue;
                };

                let is_selected = state.selected_index == Some(display_idx);

                ui.colored_label(
                    theme::sentiment_colour(&review.sentiment),
                    review.sentiment.label(),
                );
                ui.colored_label(
                    theme::language_colour(&review.language),
                    review.language.label(),
                );
                ui.label(
                    review
                        .length
                        .map(|len| len.to_string())
                        .unwrap_or_else(|| "--".to_string()),
                );

                let preview = preview_text(review.content.as_deref());
                if ui.selectable_label(is_selected, preview).clicked() {
                    clicked_row = Some(display_idx);
                }
                ui.end_row();
            }
        });

    // Apply pending mutations after the grid releases the dataset borrow.
    if let Some(row) = clicked_row {
        state.selected_index = Some(row);
    }
    state.page = new_page;
}

/// First line of the review, truncated for the table cell. Null text gets
/// an explicit placeholder so the row stays selectable.
fn preview_text(content: Option<&str>) -> egui::RichText {
    match content {
        None => egui::RichText::new("(no review text)").weak().italics(),
        Some(text) => {
            let first_line = text.lines().next().unwrap_or(text);
            let chars: Vec<char> = first_line.chars().collect();
            if chars.len() > TABLE_PREVIEW_CHARS {
                let truncated: String = chars[..TABLE_PREVIEW_CHARS].iter().collect();
                egui::RichText::new(format!("{truncated}\u{2026}"))
            } else {
                egui::RichText::new(first_line)
            }
        }
    }
}
