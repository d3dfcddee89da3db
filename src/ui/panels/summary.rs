// SentiScope - ui/panels/summary.rs
//
// Dataset summary modal window.
// Shows the load statistics gathered while enriching the table.

use crate::app::state::AppState;
use crate::core::model::Language;
use crate::ui::theme;

/// Render the dataset summary dialog (if state.show_summary is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_summary {
        return;
    }

    let mut open = true;
    egui::Window::new("Dataset Summary")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .min_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if let Some(ref dataset) = state.dataset {
                let summary = &dataset.summary;

                ui.strong("Overview");
                egui::Grid::new("summary_overview")
                    .num_columns(2)
                    .spacing([16.0, 4.0])
                    .show(ui, |ui| {
                        ui.label("Source file:");
                        let name = summary
                            .source
                            .file_name()
                            .and_then(|n| n.to_str())
                            .unwrap_or("?");
                        ui.label(egui::RichText::new(name).monospace());
                        ui.end_row();

                        ui.label("Reviews loaded:");
                        ui.label(summary.total_rows.to_string());
                        ui.end_row();

                        ui.label("Null review text:");
                        ui.label(summary.null_content_rows.to_string());
                        ui.end_row();

                        ui.label("Unknown sentiment codes:");
                        let colour = if summary.unknown_label_rows > 0 {
                            theme::WARNING_COLOUR
                        } else {
                            ui.style().visuals.text_color()
                        };
                        ui.colored_label(colour, summary.unknown_label_rows.to_string());
                        ui.end_row();

                        ui.label("Load time:");
                        ui.label(format!("{:.2}s", summary.duration.as_secs_f64()));
                        ui.end_row();
                    });

                ui.add_space(8.0);
                ui.separator();
                ui.strong("By language");
                egui::Grid::new("summary_languages")
                    .num_columns(2)
                    .spacing([16.0, 4.0])
                    .show(ui, |ui| {
                        for language in Language::all() {
                            let count = summary
                                .rows_by_language
                                .get(language)
                                .copied()
                                .unwrap_or(0);
                            if count == 0 {
                                continue;
                            }
                            ui.colored_label(theme::language_colour(language), language.label());
                            ui.label(count.to_string());
                            ui.end_row();
                        }
                    });

                if summary.truncated_rows > 0 {
                    ui.add_space(8.0);
                    ui.colored_label(
                        egui::Color32::from_rgb(248, 113, 113),
                        format!(
                            "{} rows beyond the dataset cap were dropped at load time.",
                            summary.truncated_rows
                        ),
                    );
                }
            } else {
                ui.label("No dataset has been loaded yet.");
            }

            ui.add_space(8.0);
            ui.separator();
            if ui.button("Close").clicked() {
                state.show_summary = false;
            }
        });

    if !open {
        state.show_summary = false;
    }
}
