//! Confusion-matrix tally from labelled detection outcomes.

use crate::api::{ConfusionCounts, DetectionOutcome};

/// Count predictions against reported fraud.
///
/// Reported fraud is treated as ground truth.
pub fn tally_outcomes(outcomes: &[DetectionOutcome]) -> ConfusionCounts {
    outcomes
        .iter()
        .fold(ConfusionCounts::default(), |mut counts, outcome| {
            counts.record(*outcome);
            counts
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_empty() {
        assert_eq!(tally_outcomes(&[]), ConfusionCounts::default());
    }

    #[test]
    fn test_tally_mixed() {
        let outcomes = vec![
            DetectionOutcome::new(true, true),
            DetectionOutcome::new(true, true),
            DetectionOutcome::new(true, false),
            DetectionOutcome::new(false, false),
            DetectionOutcome::new(false, false),
            DetectionOutcome::new(false, false),
            DetectionOutcome::new(false, true),
        ];
        let counts = tally_outcomes(&outcomes);

        assert_eq!(counts, ConfusionCounts::new(2, 1, 3, 1));
        assert_eq!(counts.total(), outcomes.len() as u64);
    }
}
