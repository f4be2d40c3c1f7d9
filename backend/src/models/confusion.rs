//! Confusion-matrix counts for binary fraud predictions.

use serde::{Deserialize, Serialize};

/// Four-way tally of fraud predictions against reported ground truth.
///
/// Counts are unsigned, so the "all fields non-negative" invariant holds by
/// construction. Values are immutable once built; a new tally produces a new
/// value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfusionCounts {
    /// Predicted fraud, reported fraud ("correctly detected").
    pub true_positives: u64,
    /// Predicted fraud, not reported ("false alarms").
    pub false_positives: u64,
    /// Not predicted, not reported ("correctly ignored").
    pub true_negatives: u64,
    /// Not predicted, reported fraud ("missed frauds").
    pub false_negatives: u64,
}

impl ConfusionCounts {
    pub fn new(
        true_positives: u64,
        false_positives: u64,
        true_negatives: u64,
        false_negatives: u64,
    ) -> Self {
        Self {
            true_positives,
            false_positives,
            true_negatives,
            false_negatives,
        }
    }

    /// Total evaluated population (saturating on overflow).
    pub fn total(&self) -> u64 {
        self.true_positives
            .saturating_add(self.false_positives)
            .saturating_add(self.true_negatives)
            .saturating_add(self.false_negatives)
    }

    /// Number of transactions flagged as fraud by the detector.
    pub fn predicted_positives(&self) -> u64 {
        self.true_positives.saturating_add(self.false_positives)
    }

    /// Number of transactions reported as fraud (ground truth positives).
    pub fn actual_positives(&self) -> u64 {
        self.true_positives.saturating_add(self.false_negatives)
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Record a single labelled outcome.
    pub fn record(&mut self, outcome: DetectionOutcome) {
        let slot = match (outcome.predicted_fraud, outcome.reported_fraud) {
            (true, true) => &mut self.true_positives,
            (true, false) => &mut self.false_positives,
            (false, false) => &mut self.true_negatives,
            (false, true) => &mut self.false_negatives,
        };
        *slot = slot.saturating_add(1);
    }
}

/// A single transaction's prediction paired with its reported status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionOutcome {
    /// Whether the detector flagged the transaction.
    pub predicted_fraud: bool,
    /// Whether the transaction was later reported as fraud.
    pub reported_fraud: bool,
}

impl DetectionOutcome {
    pub fn new(predicted_fraud: bool, reported_fraud: bool) -> Self {
        Self {
            predicted_fraud,
            reported_fraud,
        }
    }
}
