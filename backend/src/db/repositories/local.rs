//! In-memory local repository implementation.
//!
//! Holds the evaluation catalog in memory. Used for the built-in sample
//! catalog, for catalogs loaded from a TOML file, and in tests.

use async_trait::async_trait;
use log::debug;
use std::collections::HashSet;
use std::sync::{Arc, RwLock, RwLockReadGuard};

use crate::api::{EvaluationPeriod, PeriodDefinition, PeriodId};
use crate::db::catalog::default_definitions;
use crate::db::repository::*;

/// In-memory period catalog.
///
/// Period IDs are assigned `1..=n` in catalog order.
///
/// # Example
/// ```
/// use fraud_eval::db::repositories::LocalRepository;
/// use fraud_eval::db::repository::PeriodRepository;
///
/// # #[tokio::main]
/// # async fn main() {
/// let repo = LocalRepository::new();
/// let periods = repo.list_periods().await.unwrap();
/// assert_eq!(periods.len(), 3);
/// # }
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    periods: Vec<EvaluationPeriod>,
    // Connection health
    is_healthy: bool,
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalRepository {
    /// Create a repository holding the built-in sample catalog.
    pub fn new() -> Self {
        let periods = assign_ids(default_definitions());
        Self::from_periods(periods)
    }

    /// Create a repository with no periods.
    pub fn empty() -> Self {
        Self::from_periods(Vec::new())
    }

    /// Build a catalog from period definitions.
    ///
    /// Labels are trimmed; empty or duplicate labels are rejected.
    pub fn from_definitions(definitions: Vec<PeriodDefinition>) -> RepositoryResult<Self> {
        let mut seen = HashSet::new();
        let mut cleaned = Vec::with_capacity(definitions.len());

        for (index, mut definition) in definitions.into_iter().enumerate() {
            let label = definition.label.trim().to_string();
            if label.is_empty() {
                return Err(RepositoryError::validation_with_context(
                    format!("period #{} has an empty label", index + 1),
                    ErrorContext::new("load_catalog").with_entity("period"),
                ));
            }
            if !seen.insert(label.clone()) {
                return Err(RepositoryError::validation_with_context(
                    format!("duplicate period label '{}'", label),
                    ErrorContext::new("load_catalog")
                        .with_entity("period")
                        .with_entity_id(&label),
                ));
            }
            definition.label = label;
            cleaned.push(definition);
        }

        debug!("Loaded evaluation catalog with {} periods", cleaned.len());
        Ok(Self::from_periods(assign_ids(cleaned)))
    }

    fn from_periods(periods: Vec<EvaluationPeriod>) -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData {
                periods,
                is_healthy: true,
            })),
        }
    }

    /// Simulate an unhealthy catalog (for health-check tests).
    pub fn set_healthy(&self, healthy: bool) -> RepositoryResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| RepositoryError::internal(format!("catalog lock poisoned: {}", e)))?;
        data.is_healthy = healthy;
        Ok(())
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, LocalData>> {
        self.data
            .read()
            .map_err(|e| RepositoryError::internal(format!("catalog lock poisoned: {}", e)))
    }
}

fn assign_ids(definitions: Vec<PeriodDefinition>) -> Vec<EvaluationPeriod> {
    definitions
        .into_iter()
        .zip(1i64..)
        .map(|(def, id)| EvaluationPeriod::new(PeriodId::new(id), def.label, def.counts))
        .collect()
}

#[async_trait]
impl PeriodRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.read()?.is_healthy)
    }

    async fn list_periods(&self) -> RepositoryResult<Vec<EvaluationPeriod>> {
        Ok(self.read()?.periods.clone())
    }

    async fn get_period(&self, period_id: PeriodId) -> RepositoryResult<EvaluationPeriod> {
        self.read()?
            .periods
            .iter()
            .find(|p| p.id == period_id)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("Period {} not found", period_id),
                    ErrorContext::new("get_period")
                        .with_entity("period")
                        .with_entity_id(period_id),
                )
            })
    }

    async fn find_period_by_label(&self, label: &str) -> RepositoryResult<EvaluationPeriod> {
        let label = label.trim();
        self.read()?
            .periods
            .iter()
            .find(|p| p.label == label)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("Period '{}' not found", label),
                    ErrorContext::new("find_period_by_label")
                        .with_entity("period")
                        .with_entity_id(label),
                )
            })
    }

    async fn default_period(&self) -> RepositoryResult<EvaluationPeriod> {
        self.read()?.periods.first().cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                "Evaluation catalog is empty",
                ErrorContext::new("default_period").with_entity("period"),
            )
        })
    }
}
