//! Named reporting periods of the evaluation catalog.

use serde::{Deserialize, Serialize};

use super::confusion::ConfusionCounts;

crate::catalog_id! {
    /// Catalog-assigned identifier of an [`EvaluationPeriod`].
    pub struct PeriodId(i64);
}

/// A named reporting period with its confusion-matrix counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationPeriod {
    pub id: PeriodId,
    /// Display label shown on the period selector (e.g. "Last 7 days").
    pub label: String,
    pub counts: ConfusionCounts,
}

impl EvaluationPeriod {
    pub fn new(id: PeriodId, label: impl Into<String>, counts: ConfusionCounts) -> Self {
        Self {
            id,
            label: label.into(),
            counts,
        }
    }
}

/// Period definition before the catalog assigns it an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodDefinition {
    pub label: String,
    #[serde(flatten)]
    pub counts: ConfusionCounts,
}

impl PeriodDefinition {
    pub fn new(label: impl Into<String>, counts: ConfusionCounts) -> Self {
        Self {
            label: label.into(),
            counts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_id_roundtrip() {
        let id = PeriodId::new(3);
        assert_eq!(id.value(), 3);
        assert_eq!(i64::from(id), 3);
        assert_eq!(PeriodId::from(3), id);
        assert_eq!(id.to_string(), "3");
    }

    #[test]
    fn test_period_id_parses_from_path_text() {
        assert_eq!("3".parse::<PeriodId>().unwrap(), PeriodId::new(3));
        assert_eq!(" 12 ".parse::<PeriodId>().unwrap(), PeriodId::new(12));
        assert!("x".parse::<PeriodId>().is_err());
        assert!("".parse::<PeriodId>().is_err());
    }

    #[test]
    fn test_period_id_deserializes_from_integer() {
        let id: PeriodId = serde_json::from_str("5").unwrap();
        assert_eq!(id, PeriodId::new(5));
        assert!(serde_json::from_str::<PeriodId>("\"5\"").is_err());
    }

    #[test]
    fn test_period_id_serializes_as_integer() {
        let json = serde_json::to_string(&PeriodId::new(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn test_definition_flattens_counts() {
        let def: PeriodDefinition = serde_json::from_str(
            r#"{"label":"Q1","true_positives":1,"false_positives":2,"true_negatives":3,"false_negatives":4}"#,
        )
        .unwrap();
        assert_eq!(def.label, "Q1");
        assert_eq!(def.counts, ConfusionCounts::new(1, 2, 3, 4));
    }
}
