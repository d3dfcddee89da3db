// SentiScope - ui/panels/detail.rs
//
// Detail pane showing the full text and attributes of the selected review.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the detail pane (bottom panel).
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    if let Some(review) = state.selected_review() {
        egui::Grid::new("detail_grid")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                ui.label("Sentiment:");
                ui.colored_label(
                    theme::sentiment_colour(&review.sentiment),
                    review.sentiment.label(),
                );
                ui.end_row();

                ui.label("Language:");
                ui.colored_label(
                    theme::language_colour(&review.language),
                    review.language.label(),
                );
                ui.end_row();

                ui.label("Length:");
                ui.label(
                    review
                        .length
                        .map(|len| format!("{len} chars"))
                        .unwrap_or_else(|| "--".to_string()),
                );
                ui.end_row();

                if let Some(label) = review.label {
                    ui.label("Label code:");
                    ui.label(label.to_string());
                    ui.end_row();
                }
            });

        ui.separator();
        ui.label("Review:");
        egui::ScrollArea::vertical().max_height(100.0).show(ui, |ui| {
            match &review.content {
                Some(text) => {
                    ui.label(text);
                }
                None => {
                    ui.label(egui::RichText::new("(no review text)").weak().italics());
                }
            }
        });
    } else {
        ui.centered_and_justified(|ui| {
            ui.label("Select a review to view details.");
        });
    }
}
