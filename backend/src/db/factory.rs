//! Repository factory for dependency injection.
//!
//! Creates catalog repositories from runtime configuration.

use log::{debug, info};
use std::str::FromStr;
use std::sync::Arc;

use super::repo_config::RepositoryConfig;
use super::repositories::LocalRepository;
use super::repository::{PeriodRepository, RepositoryResult};

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// In-memory catalog
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" | "memory" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

/// Factory for catalog repositories.
///
/// # Example
/// ```
/// use fraud_eval::db::RepositoryFactory;
///
/// let repo = RepositoryFactory::create_local();
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Repository holding the built-in sample catalog.
    pub fn create_local() -> Arc<dyn PeriodRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Repository described by a configuration file.
    ///
    /// An empty `periods` list falls back to the built-in catalog.
    pub fn from_config(config: &RepositoryConfig) -> RepositoryResult<Arc<dyn PeriodRepository>> {
        match config.repository_type()? {
            RepositoryType::Local => {
                if config.periods.is_empty() {
                    debug!("Catalog file defines no periods; using built-in catalog");
                    return Ok(Self::create_local());
                }
                let repo = LocalRepository::from_definitions(config.periods.clone())?;
                Ok(Arc::new(repo))
            }
        }
    }

    /// Repository for this process, from `EVALUATION_CONFIG` or the default
    /// file locations, else the built-in catalog.
    pub fn from_env() -> RepositoryResult<Arc<dyn PeriodRepository>> {
        match RepositoryConfig::from_env()? {
            Some(config) => {
                info!("Using evaluation catalog from configuration file");
                Self::from_config(&config)
            }
            None => {
                info!("No catalog file found; using built-in evaluation catalog");
                Ok(Self::create_local())
            }
        }
    }
}
