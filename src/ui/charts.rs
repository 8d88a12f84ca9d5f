use std::ops::RangeInclusive;

use eframe::egui::{self, RichText, Stroke, Ui};
use egui_plot::{Bar, BarChart, GridMark, Plot};

use crate::color::ChartKind;
use crate::data::histogram::Histogram;
use crate::data::metrics::{format_metric, GroupedMetric, ScalarMetrics};

const CHART_HEIGHT: f32 = 260.0;

// ---------------------------------------------------------------------------
// Metric cards
// ---------------------------------------------------------------------------

/// Three side-by-side cards with the headline averages.
pub fn metric_cards(ui: &mut Ui, metrics: &ScalarMetrics) {
    ui.heading("Key Performance Metrics");
    ui.columns(3, |cols: &mut [Ui]| {
        metric_card(&mut cols[0], "Avg Completion Days", metrics.avg_completion_days);
        metric_card(&mut cols[1], "Avg Quality Score", metrics.avg_quality_score);
        metric_card(&mut cols[2], "Avg Feedback Score", metrics.avg_feedback_score);
    });
}

fn metric_card(ui: &mut Ui, label: &str, value: Option<f64>) {
    ui.group(|ui: &mut Ui| {
        ui.set_min_width(ui.available_width());
        ui.label(label);
        let text = RichText::new(format_metric(value)).size(28.0);
        ui.label(if value.is_some() { text.strong() } else { text.weak() });
    });
}

fn no_data(ui: &mut Ui) {
    ui.add_sized(
        [ui.available_width(), CHART_HEIGHT / 2.0],
        egui::Label::new(RichText::new("No data for the current filters").weak()),
    );
}

// ---------------------------------------------------------------------------
// Completion time histogram
// ---------------------------------------------------------------------------

pub fn completion_histogram(ui: &mut Ui, histogram: Option<&Histogram>) {
    ui.heading("Task Completion Time Distribution");
    let Some(histogram) = histogram else {
        no_data(ui);
        return;
    };

    let kind = ChartKind::CompletionHistogram;
    let width = histogram.bin_width();
    let bars: Vec<Bar> = histogram
        .bars()
        .map(|(centre, count)| {
            Bar::new(centre, count as f64)
                .width(width)
                .fill(kind.fill())
                .stroke(Stroke::new(1.0, kind.stroke()))
        })
        .collect();

    let name = format!("{} interns", histogram.total());
    Plot::new("completion_histogram")
        .height(CHART_HEIGHT)
        .x_axis_label("Task_Completion_Days")
        .y_axis_label("Count")
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name(name));
        });
}

// ---------------------------------------------------------------------------
// Per-department horizontal bar charts
// ---------------------------------------------------------------------------

/// Horizontal bars, one per department, with department names on the
/// category axis.
pub fn department_bars(
    ui: &mut Ui,
    id: &str,
    title: &str,
    value_label: &str,
    kind: ChartKind,
    grouped: &GroupedMetric,
) {
    ui.heading(title);
    if grouped.is_empty() {
        no_data(ui);
        return;
    }

    let names: Vec<String> = grouped.keys().cloned().collect();
    let bars: Vec<Bar> = grouped
        .iter()
        .enumerate()
        .map(|(i, (dept, mean))| {
            Bar::new(i as f64, *mean)
                .name(dept)
                .width(0.6)
                .fill(kind.fill())
                .stroke(Stroke::new(1.0, kind.stroke()))
        })
        .collect();

    Plot::new(id)
        .height(CHART_HEIGHT)
        .x_axis_label(value_label)
        .y_axis_label("Department")
        .y_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            category_label(&names, mark.value)
        })
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal().name(value_label));
        });
}

/// Department name for an integer tick, nothing for fractional ticks.
fn category_label(names: &[String], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    names.get(rounded as usize).cloned().unwrap_or_default()
}
