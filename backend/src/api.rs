//! Public API surface for the evaluation backend.
//!
//! This file consolidates the DTO types shared by the service layer and the
//! HTTP API. All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::{
    ConfusionCounts, DetectionOutcome, EvaluationPeriod, PeriodDefinition, PeriodId,
};
pub use crate::routes::evaluation::CellKind;
pub use crate::routes::evaluation::ConfusionCell;
pub use crate::routes::evaluation::DerivedMetrics;
pub use crate::routes::evaluation::EvaluationReport;
pub use crate::routes::evaluation::MetricRow;
pub use crate::routes::evaluation::MetricsResponse;
pub use crate::routes::evaluation::PerformanceSummary;
pub use crate::routes::evaluation::PrecisionBand;
pub use crate::routes::evaluation::RecallBand;
pub use crate::routes::periods::PeriodInfo;
