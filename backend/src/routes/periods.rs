use serde::{Deserialize, Serialize};

use crate::models::{EvaluationPeriod, PeriodId};

pub const LIST_PERIODS: &str = "list_periods";
pub const GET_PERIOD: &str = "get_period";

/// Lightweight period entry for the period selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodInfo {
    pub period_id: PeriodId,
    pub label: String,
}

impl From<&EvaluationPeriod> for PeriodInfo {
    fn from(period: &EvaluationPeriod) -> Self {
        Self {
            period_id: period.id,
            label: period.label.clone(),
        }
    }
}
