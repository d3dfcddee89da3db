// SentiScope - ui/theme.rs
//
// Colour scheme, sentiment/language colour mapping, and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::{Language, Sentiment};
use egui::Color32;

/// Colour for a sentiment category. The green/grey/red trio matches the
/// dashboard's chart palette so KPI cards, charts, and table rows agree.
pub fn sentiment_colour(sentiment: &Sentiment) -> Color32 {
    match sentiment {
        Sentiment::Positive => Color32::from_rgb(46, 204, 113), // Emerald
        Sentiment::Neutral => Color32::from_rgb(149, 165, 166), // Concrete grey
        Sentiment::Negative => Color32::from_rgb(231, 76, 60),  // Alizarin red
        Sentiment::Unknown => Color32::from_rgb(107, 114, 128), // Gray 500
    }
}

/// Accent colour for a detected language.
pub fn language_colour(language: &Language) -> Color32 {
    match language {
        Language::Arabic => Color32::from_rgb(96, 165, 250),   // Blue 400
        Language::English => Color32::from_rgb(209, 213, 219), // Gray 300
        Language::Unknown => Color32::from_rgb(107, 114, 128), // Gray 500
    }
}

/// Warning accent (amber) for non-zero anomaly counts in the summary.
pub const WARNING_COLOUR: Color32 = Color32::from_rgb(253, 186, 116);

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 250.0;
pub const DETAIL_PANE_HEIGHT: f32 = 180.0;
pub const CHART_HEIGHT: f32 = 280.0;
