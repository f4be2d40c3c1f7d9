//! Data Transfer Objects for the HTTP API.
//!
//! Report and metrics payloads are re-exported from the API module since
//! they already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    ConfusionCounts, DetectionOutcome, EvaluationReport, MetricsResponse, PeriodId, PeriodInfo,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Catalog status
    pub catalog: String,
}

/// Period selector response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodListResponse {
    pub periods: Vec<PeriodInfo>,
    pub total: usize,
    /// Period selected when the panel first loads
    pub default_period_id: Option<PeriodId>,
}

/// Single period with its raw counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodDetailResponse {
    pub period_id: PeriodId,
    pub label: String,
    pub counts: ConfusionCounts,
    pub total: u64,
}

/// Query parameters for the label-based evaluation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EvaluationQuery {
    /// Period label, e.g. "Last 30 days". Defaults to the first period.
    #[serde(default)]
    pub period: Option<String>,
}

/// Request body for tallying labelled outcomes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TallyRequest {
    pub outcomes: Vec<DetectionOutcome>,
}
