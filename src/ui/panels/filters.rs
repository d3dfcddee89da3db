// SentiScope - ui/panels/filters.rs
//
// Filter controls sidebar: language radio group, sentiment checkboxes,
// and keyword search. Every change triggers a full refilter pass.

use crate::app::state::AppState;
use crate::core::filter::FilterState;
use crate::core::model::{LanguageChoice, Sentiment};
use crate::ui::theme;

/// Render the filter controls.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Control Panel");
    ui.separator();

    // Quick filters
    if ui.button("Negative Only").clicked() {
        state.filter_state = FilterState::negative_only();
        state.apply_filters();
    }
    if ui.button("Clear Filters").clicked() {
        state.filter_state = FilterState::default();
        state.apply_filters();
    }

    ui.separator();

    let mut changed = false;

    // Language radio group
    ui.label("Language:");
    for choice in LanguageChoice::all() {
        if ui
            .radio_value(&mut state.filter_state.language, *choice, choice.label())
            .changed()
        {
            changed = true;
        }
    }

    ui.separator();

    // Sentiment checkboxes. Unchecking everything hides every review;
    // that is deliberate set-membership behaviour, not a bug.
    ui.label("Sentiment:");
    for sentiment in Sentiment::all() {
        let mut checked = state.filter_state.sentiments.contains(sentiment);
        let label =
            egui::RichText::new(sentiment.label()).color(theme::sentiment_colour(sentiment));
        if ui.checkbox(&mut checked, label).changed() {
            state.filter_state.toggle_sentiment(*sentiment);
            changed = true;
        }
    }

    ui.separator();

    // Text search
    ui.label("Search keywords:");
    if ui
        .text_edit_singleline(&mut state.filter_state.search)
        .changed()
    {
        changed = true;
    }

    if changed {
        state.apply_filters();
    }
}
