//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{
    ConfusionCounts, EvaluationQuery, EvaluationReport, HealthResponse, MetricsResponse,
    PeriodDetailResponse, PeriodId, PeriodListResponse, TallyRequest,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::services as db_services;
use crate::services::{evaluate_counts, tally_outcomes};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let catalog_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "available".to_string(),
        Ok(false) => "unavailable".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        catalog: catalog_status,
    }))
}

// =============================================================================
// Period catalog
// =============================================================================

/// GET /v1/periods
pub async fn list_periods(State(state): State<AppState>) -> HandlerResult<PeriodListResponse> {
    let periods = db_services::list_periods(state.repository.as_ref()).await?;
    let default_period_id = db_services::default_period_id(state.repository.as_ref()).await?;
    let total = periods.len();

    Ok(Json(PeriodListResponse {
        periods,
        total,
        default_period_id,
    }))
}

/// GET /v1/periods/{period_id}
pub async fn get_period(
    State(state): State<AppState>,
    Path(period_id): Path<PeriodId>,
) -> HandlerResult<PeriodDetailResponse> {
    let period = db_services::get_period(state.repository.as_ref(), period_id).await?;

    Ok(Json(PeriodDetailResponse {
        period_id: period.id,
        total: period.counts.total(),
        label: period.label,
        counts: period.counts,
    }))
}

// =============================================================================
// Evaluation
// =============================================================================

/// GET /v1/periods/{period_id}/evaluation
pub async fn get_period_evaluation(
    State(state): State<AppState>,
    Path(period_id): Path<PeriodId>,
) -> HandlerResult<EvaluationReport> {
    let report = db_services::get_evaluation_report(state.repository.as_ref(), period_id).await?;
    Ok(Json(report))
}

/// GET /v1/evaluation?period=<label>
///
/// Without a `period` parameter the default (first) period is evaluated.
pub async fn get_evaluation(
    State(state): State<AppState>,
    Query(query): Query<EvaluationQuery>,
) -> HandlerResult<EvaluationReport> {
    let label = query.period.as_deref().map(str::trim);
    if matches!(label, Some("")) {
        return Err(AppError::BadRequest(
            "period label must not be empty".to_string(),
        ));
    }

    let report = db_services::get_evaluation_report_by_label(state.repository.as_ref(), label).await?;
    Ok(Json(report))
}

/// POST /v1/evaluation/metrics
///
/// Compute metrics for an ad hoc confusion-matrix tuple.
pub async fn compute_metrics(Json(counts): Json<ConfusionCounts>) -> HandlerResult<MetricsResponse> {
    Ok(Json(evaluate_counts(&counts)))
}

/// POST /v1/evaluation/tally
///
/// Tally labelled outcomes into a confusion matrix and compute its metrics.
pub async fn tally(Json(request): Json<TallyRequest>) -> HandlerResult<MetricsResponse> {
    let counts = tally_outcomes(&request.outcomes);
    Ok(Json(evaluate_counts(&counts)))
}
