use serde::{Deserialize, Serialize};

use crate::models::ConfusionCounts;

use super::periods::PeriodInfo;

pub const GET_EVALUATION_REPORT: &str = "get_evaluation_report";
pub const COMPUTE_METRICS: &str = "compute_metrics";
pub const TALLY_OUTCOMES: &str = "tally_outcomes";

// =========================================================
// Evaluation types
// =========================================================

/// Metrics derived from one confusion-matrix tuple. Every field is in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub accuracy: f64,
}

/// Qualitative band for recall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecallBand {
    Excellent,
    Good,
    NeedsImprovement,
}

impl RecallBand {
    pub fn label(&self) -> &'static str {
        match self {
            RecallBand::Excellent => "excellent",
            RecallBand::Good => "good",
            RecallBand::NeedsImprovement => "needs improvement",
        }
    }

    /// Sentence shown in the dashboard's performance summary.
    pub fn summary(&self) -> &'static str {
        match self {
            RecallBand::Excellent => "Excellent fraud detection rate with minimal missed frauds.",
            RecallBand::Good => "Good fraud detection rate, but some frauds are being missed.",
            RecallBand::NeedsImprovement => "Improvement needed in detecting actual fraud cases.",
        }
    }
}

impl std::fmt::Display for RecallBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Qualitative band for precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrecisionBand {
    VeryFewFalseAlarms,
    Reasonable,
    TooManyFalseAlarms,
}

impl PrecisionBand {
    pub fn label(&self) -> &'static str {
        match self {
            PrecisionBand::VeryFewFalseAlarms => "very few false alarms",
            PrecisionBand::Reasonable => "reasonable",
            PrecisionBand::TooManyFalseAlarms => "too many false alarms",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            PrecisionBand::VeryFewFalseAlarms => "Very few false alarms, high precision system.",
            PrecisionBand::Reasonable => {
                "Reasonable precision, but some legitimate transactions are flagged."
            }
            PrecisionBand::TooManyFalseAlarms => {
                "Too many false alarms, tuning needed to reduce false positives."
            }
        }
    }
}

impl std::fmt::Display for PrecisionBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Both qualitative bands with their summary sentences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub recall_band: RecallBand,
    pub precision_band: PrecisionBand,
    pub recall_summary: String,
    pub precision_summary: String,
}

/// One progress-bar row of the metrics panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    pub label: String,
    pub value: f64,
    /// Percentage text with two decimals, e.g. "80.00%".
    pub percentage: String,
    /// Bar width in percent, clamped to [0, 100].
    pub bar_width: f64,
    pub description: String,
}

/// Which quadrant of the confusion matrix a cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    TruePositive,
    FalsePositive,
    FalseNegative,
    TrueNegative,
}

impl CellKind {
    /// Correct predictions are rendered green, errors yellow.
    pub fn is_correct(&self) -> bool {
        matches!(self, CellKind::TruePositive | CellKind::TrueNegative)
    }
}

/// One cell of the confusion-matrix grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionCell {
    pub kind: CellKind,
    pub count: u64,
    pub title: String,
    pub caption: String,
    pub correct: bool,
}

/// Metrics computed for an ad hoc confusion-matrix tuple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsResponse {
    pub counts: ConfusionCounts,
    pub total: u64,
    pub metrics: DerivedMetrics,
    pub summary: PerformanceSummary,
}

/// Complete evaluation panel data for one catalog period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub period: PeriodInfo,
    pub counts: ConfusionCounts,
    pub total: u64,
    pub metrics: DerivedMetrics,
    pub summary: PerformanceSummary,
    pub metric_rows: Vec<MetricRow>,
    pub cells: Vec<ConfusionCell>,
}
