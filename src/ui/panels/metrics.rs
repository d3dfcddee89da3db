// SentiScope - ui/panels/metrics.rs
//
// KPI card row over the currently filtered subset: total reviews,
// positive share, average review length, Arabic share.

use crate::app::state::AppState;
use crate::core::stats;

/// Render the four KPI cards.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    let stats = stats::aggregate(&dataset.reviews, &state.filtered_indices);

    ui.columns(4, |cols| {
        metric_card(&mut cols[0], "Total Reviews", format_thousands(stats.total));
        metric_card(
            &mut cols[1],
            "Positive Sentiment",
            format!("{:.1}%", stats.positive_percentage),
        );
        metric_card(
            &mut cols[2],
            "Avg Review Length",
            format!("{} chars", stats.average_length as usize),
        );
        metric_card(
            &mut cols[3],
            "Arabic Content",
            format!("{:.1}%", stats.arabic_percentage),
        );
    });
}

fn metric_card(ui: &mut egui::Ui, title: &str, value: String) {
    ui.group(|ui| {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(title).weak().small());
            ui.label(egui::RichText::new(value).strong().size(22.0));
        });
    });
}

/// Format a count with thousands separators ("12,345").
fn format_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }
}
