//! Display-ready values for the evaluation panel.
//!
//! Turns derived metrics into percentage strings and bar widths, and lays out
//! the confusion-matrix grid. Styling is left to the front-end.

use crate::api::{CellKind, ConfusionCell, ConfusionCounts, DerivedMetrics, MetricRow};

/// Format a ratio as a percentage with two decimals, e.g. `0.8` -> `"80.00%"`.
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Progress-bar width in percent, clamped to `[0, 100]`.
pub fn bar_width(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 100.0).clamp(0.0, 100.0)
}

fn row(label: &str, value: f64, description: &str) -> MetricRow {
    MetricRow {
        label: label.to_string(),
        value,
        percentage: format_percentage(value),
        bar_width: bar_width(value),
        description: description.to_string(),
    }
}

/// The four metric rows in panel order: precision, recall, F1, accuracy.
pub fn metric_rows(metrics: &DerivedMetrics) -> Vec<MetricRow> {
    vec![
        row(
            "Precision",
            metrics.precision,
            "Of all predicted frauds, how many were actually fraudulent",
        ),
        row(
            "Recall",
            metrics.recall,
            "Of all actual frauds, how many were correctly detected",
        ),
        row("F1 Score", metrics.f1, "Harmonic mean of precision and recall"),
        row(
            "Accuracy",
            metrics.accuracy,
            "Percentage of all predictions that were correct",
        ),
    ]
}

fn cell(kind: CellKind, count: u64) -> ConfusionCell {
    let (title, caption) = match kind {
        CellKind::TruePositive => ("True Positives", "Correctly detected"),
        CellKind::FalsePositive => ("False Positives", "False alarms"),
        CellKind::FalseNegative => ("False Negatives", "Missed frauds"),
        CellKind::TrueNegative => ("True Negatives", "Correctly ignored"),
    };

    ConfusionCell {
        kind,
        count,
        title: title.to_string(),
        caption: caption.to_string(),
        correct: kind.is_correct(),
    }
}

/// Confusion-matrix cells in grid order (row-major): TP, FP, FN, TN.
pub fn confusion_cells(counts: &ConfusionCounts) -> Vec<ConfusionCell> {
    vec![
        cell(CellKind::TruePositive, counts.true_positives),
        cell(CellKind::FalsePositive, counts.false_positives),
        cell(CellKind::FalseNegative, counts.false_negatives),
        cell(CellKind::TrueNegative, counts.true_negatives),
    ]
}
