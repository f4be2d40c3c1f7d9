//! Repository configuration file support.
//!
//! Reads the evaluation catalog from a TOML file:
//!
//! ```toml
//! [repository]
//! type = "local"
//!
//! [[periods]]
//! label = "Last 7 days"
//! true_positives = 120
//! false_positives = 30
//! true_negatives = 850
//! false_negatives = 25
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::factory::RepositoryType;
use super::repository::{ErrorContext, RepositoryError, RepositoryResult};
use crate::api::PeriodDefinition;

/// Environment variable naming an explicit catalog file.
pub const CONFIG_PATH_ENV: &str = "EVALUATION_CONFIG";

const DEFAULT_LOCATIONS: [&str; 3] = [
    "evaluation.toml",
    "backend/evaluation.toml",
    "../evaluation.toml",
];

/// Repository configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepositoryConfig {
    #[serde(default)]
    pub repository: RepositorySettings,
    /// Catalog periods; empty means the built-in catalog.
    #[serde(default)]
    pub periods: Vec<PeriodDefinition>,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type", default = "default_repo_type")]
    pub repo_type: String,
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            repo_type: default_repo_type(),
        }
    }
}

fn default_repo_type() -> String {
    "local".to_string()
}

impl FromStr for RepositoryConfig {
    type Err = RepositoryError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        toml::from_str(content).map_err(|e| {
            RepositoryError::configuration_with_context(
                format!("Failed to parse config file: {}", e),
                ErrorContext::new("parse_config").with_entity("config"),
            )
        })
    }
}

impl RepositoryConfig {
    /// Load repository configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> RepositoryResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RepositoryError::configuration_with_context(
                format!("Failed to read config file: {}", e),
                ErrorContext::new("read_config")
                    .with_entity("config")
                    .with_entity_id(path.display()),
            )
        })?;

        debug!("Reading evaluation catalog from {}", path.display());
        content.parse()
    }

    /// Load repository configuration from the default location.
    ///
    /// Searches for `evaluation.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> RepositoryResult<Self> {
        for path in DEFAULT_LOCATIONS.iter().map(PathBuf::from) {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(RepositoryError::configuration(
            "No evaluation.toml found in standard locations",
        ))
    }

    /// Resolve the configuration for this process.
    ///
    /// `EVALUATION_CONFIG` wins when set (and must point at a readable file);
    /// otherwise the default locations are searched. `Ok(None)` means no file
    /// exists and the built-in catalog applies.
    pub fn from_env() -> RepositoryResult<Option<Self>> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Self::from_file(path).map(Some);
        }

        if !DEFAULT_LOCATIONS.iter().any(|p| Path::new(p).exists()) {
            return Ok(None);
        }
        Self::from_default_location().map(Some)
    }

    /// Get the repository type from configuration.
    pub fn repository_type(&self) -> RepositoryResult<RepositoryType> {
        RepositoryType::from_str(&self.repository.repo_type).map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })
    }
}
