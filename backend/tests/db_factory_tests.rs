//! Tests for db::factory and db::repo_config - catalog creation from configuration.

mod support;

use std::io::Write;
use std::str::FromStr;

use fraud_eval::db::factory::{RepositoryFactory, RepositoryType};
use fraud_eval::db::repo_config::{RepositoryConfig, CONFIG_PATH_ENV};
use fraud_eval::db::RepositoryError;

fn write_catalog(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_repository_type_from_str_local() {
    assert_eq!(RepositoryType::from_str("local").unwrap(), RepositoryType::Local);
    assert_eq!(RepositoryType::from_str("Memory").unwrap(), RepositoryType::Local);
}

#[test]
fn test_repository_type_from_str_invalid() {
    let result = RepositoryType::from_str("azure");
    assert!(result.unwrap_err().contains("Unknown repository type"));
}

#[tokio::test]
async fn test_create_local_has_builtin_catalog() {
    let repo = RepositoryFactory::create_local();
    let labels: Vec<String> = repo
        .list_periods()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.label)
        .collect();
    assert_eq!(labels, vec!["Last 7 days", "Last 30 days", "Last 90 days"]);
}

#[tokio::test]
async fn test_from_config_file() {
    let file = write_catalog(support::CUSTOM_CATALOG);
    let config = RepositoryConfig::from_file(file.path()).unwrap();
    let repo = RepositoryFactory::from_config(&config).unwrap();

    let default = repo.default_period().await.unwrap();
    assert_eq!(default.label, "Yesterday");
    assert_eq!(default.counts.total(), 100);
}

#[test]
fn test_from_config_duplicate_labels() {
    let config: RepositoryConfig = r#"
[[periods]]
label = "Same"
true_positives = 1
false_positives = 0
true_negatives = 0
false_negatives = 0

[[periods]]
label = "Same"
true_positives = 2
false_positives = 0
true_negatives = 0
false_negatives = 0
"#
    .parse()
    .unwrap();

    let err = RepositoryFactory::from_config(&config).err().unwrap();
    assert!(matches!(err, RepositoryError::ValidationError { .. }));
}

#[test]
fn test_from_env_with_explicit_path() {
    let file = write_catalog(support::CUSTOM_CATALOG);
    let path = file.path().to_string_lossy().to_string();

    support::with_scoped_env(&[(CONFIG_PATH_ENV, Some(path.as_str()))], || {
        let repo = RepositoryFactory::from_env().unwrap();
        let periods = tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(repo.list_periods())
            .unwrap();
        assert_eq!(periods.len(), 2);
        assert_eq!(periods[1].label, "Last quarter");
    });
}

#[test]
fn test_from_env_with_missing_file() {
    support::with_scoped_env(
        &[(CONFIG_PATH_ENV, Some("/definitely/not/here/evaluation.toml"))],
        || {
            let err = RepositoryFactory::from_env().err().unwrap();
            assert!(matches!(err, RepositoryError::ConfigurationError { .. }));
        },
    );
}

#[test]
fn test_from_env_without_config_uses_builtin() {
    support::with_scoped_env(&[(CONFIG_PATH_ENV, None)], || {
        // Test runs from the package root, which ships no evaluation.toml
        let config = RepositoryConfig::from_env().unwrap();
        assert!(config.is_none());

        let repo = RepositoryFactory::from_env().unwrap();
        let periods = tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(repo.list_periods())
            .unwrap();
        assert_eq!(periods.len(), 3);
    });
}

#[tokio::test]
async fn test_example_catalog_matches_builtin() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("evaluation.example.toml");
    let config = RepositoryConfig::from_file(path).unwrap();
    let from_file = RepositoryFactory::from_config(&config)
        .unwrap()
        .list_periods()
        .await
        .unwrap();
    let builtin = RepositoryFactory::create_local().list_periods().await.unwrap();
    assert_eq!(from_file, builtin);
}
