//! High-level catalog service layer.
//!
//! Repository-agnostic operations used by the HTTP handlers: catalog
//! listing, period lookup and evaluation report assembly.
//!
//! # Usage
//!
//! ```no_run
//! use fraud_eval::db::{services, repositories::LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!     let report = services::get_evaluation_report_by_label(&repo, Some("Last 30 days")).await?;
//!     println!("{}: F1 {}", report.period.label, report.metric_rows[2].percentage);
//!     Ok(())
//! }
//! ```

use log::debug;

use super::repository::{PeriodRepository, RepositoryResult};
use crate::api::{EvaluationPeriod, EvaluationReport, PeriodId, PeriodInfo};
use crate::services::build_report;

/// Check that the catalog is readable.
pub async fn health_check<R: PeriodRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Selector entries in catalog order.
pub async fn list_periods<R: PeriodRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<PeriodInfo>> {
    let periods = repo.list_periods().await?;
    Ok(periods.iter().map(PeriodInfo::from).collect())
}

/// ID of the period the panel selects first, if the catalog is non-empty.
pub async fn default_period_id<R: PeriodRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Option<PeriodId>> {
    match repo.default_period().await {
        Ok(period) => Ok(Some(period.id)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

pub async fn get_period<R: PeriodRepository + ?Sized>(
    repo: &R,
    period_id: PeriodId,
) -> RepositoryResult<EvaluationPeriod> {
    repo.get_period(period_id).await
}

/// Evaluation panel for a period selected by ID.
pub async fn get_evaluation_report<R: PeriodRepository + ?Sized>(
    repo: &R,
    period_id: PeriodId,
) -> RepositoryResult<EvaluationReport> {
    let period = repo.get_period(period_id).await?;
    debug!("Building evaluation report for period {}", period.id);
    Ok(build_report(&period))
}

/// Evaluation panel for a period selected by label, or the default period
/// when no label is given.
pub async fn get_evaluation_report_by_label<R: PeriodRepository + ?Sized>(
    repo: &R,
    label: Option<&str>,
) -> RepositoryResult<EvaluationReport> {
    let period = match label {
        Some(label) => repo.find_period_by_label(label).await?,
        None => repo.default_period().await?,
    };
    debug!("Building evaluation report for '{}'", period.label);
    Ok(build_report(&period))
}
