// SentiScope - gui.rs
//
// Top-level eframe::App implementation.
// Wires together all UI panels and handles the open/export actions.
// Loading is synchronous: the dataset is a bounded in-memory table, so a
// load completes within a frame and no background thread is needed.

use crate::app::state::AppState;
use crate::core::export;
use crate::core::loader;
use crate::core::model::Review;
use crate::ui;
use std::path::Path;

/// The SentiScope application.
pub struct SentiScopeApp {
    pub state: AppState,
}

impl SentiScopeApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for SentiScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open\u{2026}").clicked() {
                        open_dataset_dialog(&mut self.state);
                        ui.close_menu();
                    }
                    ui.separator();
                    // Export sub-menu -- enabled only when there are filtered reviews
                    let has_rows = !self.state.filtered_indices.is_empty();
                    ui.add_enabled_ui(has_rows, |ui| {
                        ui.menu_button("Export", |ui| {
                            if ui.button("Export CSV...").clicked() {
                                export_filtered(&mut self.state, ExportFormat::Csv);
                                ui.close_menu();
                            }
                            if ui.button("Export JSON...").clicked() {
                                export_filtered(&mut self.state, ExportFormat::Json);
                                ui.close_menu();
                            }
                        });
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    let has_dataset = self.state.dataset.is_some();
                    ui.add_enabled_ui(has_dataset, |ui| {
                        if ui.button("Dataset Summary").clicked() {
                            self.state.show_summary = true;
                            ui.close_menu();
                        }
                    });
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(dataset) = &self.state.dataset {
                        ui.label(format!(
                            "{}/{} reviews",
                            self.state.filtered_indices.len(),
                            dataset.len()
                        ));
                    }
                });
            });
        });

        // Detail pane (bottom)
        egui::TopBottomPanel::bottom("detail_pane")
            .resizable(true)
            .default_height(ui::theme::DETAIL_PANE_HEIGHT)
            .show(ctx, |ui| {
                ui::panels::detail::render(ui, &self.state);
            });

        // Left sidebar: filter controls
        egui::SidePanel::left("sidebar")
            .default_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        ui::panels::filters::render(ui, &mut self.state);
                    });
            });

        // Central panel: KPI cards, charts, review table
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.dataset.is_none() {
                ui.centered_and_justified(|ui| {
                    ui.heading("Open a review dataset to begin  (File \u{2192} Open\u{2026})");
                });
                return;
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui::panels::metrics::render(ui, &self.state);
                    ui.add_space(8.0);
                    ui.separator();
                    ui::panels::charts::render(ui, &self.state);
                    ui.add_space(8.0);
                    ui.separator();
                    ui::panels::table::render(ui, &mut self.state);
                });
        });

        // Summary dialog (modal-ish)
        ui::panels::summary::render(ctx, &mut self.state);
    }
}

// ---------------------------------------------------------------------------
// Open
// ---------------------------------------------------------------------------

fn open_dataset_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open review dataset")
        .add_filter("Review datasets", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        load_dataset(state, &path);
    }
}

/// Load a dataset into the application state. On failure the state keeps its
/// previous dataset (if any) and the error is surfaced in the status bar;
/// no partial table is ever installed.
pub fn load_dataset(state: &mut AppState, path: &Path) {
    match loader::load_reviews(path) {
        Ok(dataset) => {
            tracing::info!(
                path = %path.display(),
                rows = dataset.len(),
                "Dataset ready"
            );
            state.set_dataset(dataset);
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load dataset");
            state.status_message = format!("Error: {e}");
        }
    }
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

enum ExportFormat {
    Csv,
    Json,
}

fn export_filtered(state: &mut AppState, format: ExportFormat) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    let (filter_name, extension, default_name) = match format {
        ExportFormat::Csv => ("CSV", "csv", "reviews_export.csv"),
        ExportFormat::Json => ("JSON", "json", "reviews_export.json"),
    };

    let Some(dest) = rfd::FileDialog::new()
        .add_filter(filter_name, &[extension])
        .set_file_name(default_name)
        .save_file()
    else {
        return;
    };

    let filtered: Vec<Review> = state
        .filtered_indices
        .iter()
        .filter_map(|&idx| dataset.reviews.get(idx))
        .cloned()
        .collect();

    let result = match std::fs::File::create(&dest) {
        Ok(file) => match format {
            ExportFormat::Csv => export::export_csv(&filtered, file, &dest),
            ExportFormat::Json => export::export_json(&filtered, file, &dest),
        },
        Err(e) => {
            state.status_message = format!("Cannot create file: {e}");
            return;
        }
    };

    match result {
        Ok(count) => {
            tracing::info!(path = %dest.display(), rows = count, "Export complete");
            state.status_message = format!("Exported {count} reviews to {filter_name}.");
        }
        Err(e) => {
            tracing::error!(error = %e, "Export failed");
            state.status_message = format!("{filter_name} export failed: {e}");
        }
    }
}
