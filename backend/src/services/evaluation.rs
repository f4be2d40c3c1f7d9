//! Evaluation metrics calculator.
//!
//! Derives precision, recall, F1 and accuracy from a confusion-matrix tuple
//! and classifies the result into the qualitative bands shown on the
//! dashboard. Every function here is total: zero denominators yield `0.0`.

use crate::api::{
    ConfusionCounts, DerivedMetrics, EvaluationPeriod, EvaluationReport, MetricsResponse,
    PerformanceSummary, PrecisionBand, RecallBand,
};
use crate::services::presentation::{confusion_cells, metric_rows};

/// Upper band threshold (exclusive) shared by recall and precision.
pub const HIGH_THRESHOLD: f64 = 0.85;
/// Lower band threshold (exclusive) shared by recall and precision.
pub const MID_THRESHOLD: f64 = 0.7;

/// Fraction of positive predictions that were correct.
///
/// Returns `0.0` when nothing was predicted positive (`tp + fp == 0`).
pub fn compute_precision(true_positives: u64, false_positives: u64) -> f64 {
    ratio(true_positives, true_positives.saturating_add(false_positives))
}

/// Fraction of actual positives that were detected.
///
/// Returns `0.0` when there were no actual positives (`tp + fn == 0`).
pub fn compute_recall(true_positives: u64, false_negatives: u64) -> f64 {
    ratio(true_positives, true_positives.saturating_add(false_negatives))
}

/// Harmonic mean of precision and recall, `0.0` if either is exactly zero.
pub fn compute_f1(precision: f64, recall: f64) -> f64 {
    if precision == 0.0 || recall == 0.0 {
        return 0.0;
    }
    // Divide before multiplying so tiny inputs do not underflow through `p * r`.
    // Ordering the operands keeps the result exactly symmetric.
    let (low, high) = if precision <= recall {
        (precision, recall)
    } else {
        (recall, precision)
    };
    2.0 * (low / (low + high)) * high
}

/// Fraction of all predictions that were correct, `0.0` for an empty population.
pub fn compute_accuracy(true_positives: u64, true_negatives: u64, total: u64) -> f64 {
    ratio(true_positives.saturating_add(true_negatives), total)
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

pub fn classify_recall(recall: f64) -> RecallBand {
    if recall > HIGH_THRESHOLD {
        RecallBand::Excellent
    } else if recall > MID_THRESHOLD {
        RecallBand::Good
    } else {
        RecallBand::NeedsImprovement
    }
}

pub fn classify_precision(precision: f64) -> PrecisionBand {
    if precision > HIGH_THRESHOLD {
        PrecisionBand::VeryFewFalseAlarms
    } else if precision > MID_THRESHOLD {
        PrecisionBand::Reasonable
    } else {
        PrecisionBand::TooManyFalseAlarms
    }
}

/// Apply the four metric formulas to one confusion-matrix tuple.
pub fn derive_metrics(counts: &ConfusionCounts) -> DerivedMetrics {
    let precision = compute_precision(counts.true_positives, counts.false_positives);
    let recall = compute_recall(counts.true_positives, counts.false_negatives);

    DerivedMetrics {
        precision,
        recall,
        f1: compute_f1(precision, recall),
        accuracy: compute_accuracy(counts.true_positives, counts.true_negatives, counts.total()),
    }
}

/// Classify derived metrics and attach the dashboard's summary sentences.
pub fn summarize(metrics: &DerivedMetrics) -> PerformanceSummary {
    let recall_band = classify_recall(metrics.recall);
    let precision_band = classify_precision(metrics.precision);

    PerformanceSummary {
        recall_band,
        precision_band,
        recall_summary: recall_band.summary().to_string(),
        precision_summary: precision_band.summary().to_string(),
    }
}

/// Metrics and summary for an arbitrary tuple, without period context.
pub fn evaluate_counts(counts: &ConfusionCounts) -> MetricsResponse {
    let metrics = derive_metrics(counts);

    MetricsResponse {
        counts: *counts,
        total: counts.total(),
        summary: summarize(&metrics),
        metrics,
    }
}

/// Assemble the full evaluation panel for a catalog period.
pub fn build_report(period: &EvaluationPeriod) -> EvaluationReport {
    let counts = period.counts;
    let metrics = derive_metrics(&counts);

    EvaluationReport {
        period: period.into(),
        counts,
        total: counts.total(),
        summary: summarize(&metrics),
        metric_rows: metric_rows(&metrics),
        cells: confusion_cells(&counts),
        metrics,
    }
}
