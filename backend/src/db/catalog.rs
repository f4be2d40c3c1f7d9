//! Built-in evaluation catalog.
//!
//! These are the sample periods the dashboard ships with. Deployments that
//! have a real metrics source replace them through a catalog file (see
//! [`crate::db::RepositoryConfig`]).

use crate::api::{ConfusionCounts, PeriodDefinition};

pub const LAST_7_DAYS: &str = "Last 7 days";
pub const LAST_30_DAYS: &str = "Last 30 days";
pub const LAST_90_DAYS: &str = "Last 90 days";

/// Default periods in selector order. The first entry is selected initially.
pub fn default_definitions() -> Vec<PeriodDefinition> {
    vec![
        PeriodDefinition::new(LAST_7_DAYS, ConfusionCounts::new(120, 30, 850, 25)),
        PeriodDefinition::new(LAST_30_DAYS, ConfusionCounts::new(520, 110, 3200, 85)),
        PeriodDefinition::new(LAST_90_DAYS, ConfusionCounts::new(1450, 320, 9800, 210)),
    ]
}
