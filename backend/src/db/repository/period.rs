//! Read-only repository trait for the evaluation period catalog.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{EvaluationPeriod, PeriodId};

/// Repository for named reporting periods and their confusion counts.
///
/// The catalog is fixed once built: periods are selected, never created or
/// destroyed at runtime.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to be shared across handlers.
#[async_trait]
pub trait PeriodRepository: Send + Sync {
    /// Check that the catalog is readable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// All periods in catalog order.
    async fn list_periods(&self) -> RepositoryResult<Vec<EvaluationPeriod>>;

    /// Retrieve a period by ID.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If no period has this ID
    async fn get_period(&self, period_id: PeriodId) -> RepositoryResult<EvaluationPeriod>;

    /// Retrieve a period by its display label (exact match after trimming).
    async fn find_period_by_label(&self, label: &str) -> RepositoryResult<EvaluationPeriod>;

    /// The period selected when the panel first loads (first catalog entry).
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If the catalog is empty
    async fn default_period(&self) -> RepositoryResult<EvaluationPeriod>;
}
