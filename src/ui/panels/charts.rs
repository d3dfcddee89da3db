// SentiScope - ui/panels/charts.rs
//
// The two dashboard charts, side by side:
//   left  - sentiment distribution bar chart
//   right - review length histogram, stacked by sentiment
//
// Chart data comes from core::charts; this module only maps it onto
// egui_plot primitives.

use crate::app::state::AppState;
use crate::core::charts::{self, LengthHistogram, SentimentCounts};
use crate::core::model::Sentiment;
use crate::ui::theme;
use egui_plot::{Bar, BarChart, Legend, Plot};

/// Render both charts over the currently filtered subset.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    let counts = charts::sentiment_counts(&dataset.reviews, &state.filtered_indices);
    let histogram =
        charts::length_histogram(&dataset.reviews, &state.filtered_indices, state.max_bins);

    ui.columns(2, |cols| {
        sentiment_chart(&mut cols[0], &counts);
        length_chart(&mut cols[1], &histogram);
    });
}

// ---------------------------------------------------------------------------
// Sentiment distribution
// ---------------------------------------------------------------------------

fn sentiment_chart(ui: &mut egui::Ui, counts: &SentimentCounts) {
    ui.strong("Sentiment Distribution");

    let bars: Vec<Bar> = counts
        .counts
        .iter()
        .enumerate()
        .map(|(i, (sentiment, count))| {
            Bar::new(i as f64, *count as f64)
                .width(0.6)
                .name(sentiment.label())
                .fill(theme::sentiment_colour(sentiment))
        })
        .collect();
    let chart = BarChart::new(bars);

    // Category labels on integer ticks; everything else stays blank.
    let labels: Vec<String> = counts
        .counts
        .iter()
        .map(|(sentiment, _)| sentiment.label().to_string())
        .collect();

    Plot::new("sentiment_chart")
        .height(theme::CHART_HEIGHT)
        .y_axis_label("Reviews")
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            labels
                .get(idx as usize)
                .cloned()
                .unwrap_or_default()
        })
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_y(0.0)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

// ---------------------------------------------------------------------------
// Review length histogram
// ---------------------------------------------------------------------------

fn length_chart(ui: &mut egui::Ui, histogram: &LengthHistogram) {
    ui.strong("Review Length Distribution");

    if histogram.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("No length data for the current selection.");
        });
        return;
    }

    // One bar series per sentiment present in the subset, stacked bottom-up
    // in display order.
    let active: Vec<Sentiment> = Sentiment::all()
        .iter()
        .copied()
        .filter(|sentiment| {
            histogram.bins.iter().any(|bin| {
                bin.by_sentiment
                    .iter()
                    .any(|(s, count)| s == sentiment && *count > 0)
            })
        })
        .collect();

    let mut stacked: Vec<BarChart> = Vec::new();
    for sentiment in &active {
        let bars: Vec<Bar> = histogram
            .bins
            .iter()
            .map(|bin| {
                let count = bin
                    .by_sentiment
                    .iter()
                    .find(|(s, _)| s == sentiment)
                    .map(|(_, n)| *n)
                    .unwrap_or(0);
                Bar::new((bin.start + bin.end) / 2.0, count as f64).width(bin.end - bin.start)
            })
            .collect();

        let mut chart = BarChart::new(bars)
            .name(sentiment.label())
            .color(theme::sentiment_colour(sentiment));
        {
            let below: Vec<&BarChart> = stacked.iter().collect();
            chart = chart.stack_on(&below);
        }
        stacked.push(chart);
    }

    Plot::new("length_histogram")
        .height(theme::CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Character Count")
        .y_axis_label("Reviews")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_y(0.0)
        .show(ui, |plot_ui| {
            for chart in stacked {
                plot_ui.bar_chart(chart);
            }
        });
}
