//! Tests for db::factory - repository creation from data sources and config files.

mod support;

use std::io::Write;
use std::path::PathBuf;

use shiftboard::db::factory::{DataSource, RepositoryFactory};
use shiftboard::db::repository::{RepositoryError, ShiftRepository};
use shiftboard::db::sample::sample_plan;
use support::{may, with_scoped_env};

fn snapshot_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_data_source_from_env_default() {
    let source = with_scoped_env(&[("PLAN_FILE", None)], DataSource::from_env);
    assert_eq!(source, DataSource::Sample);
}

#[test]
fn test_data_source_from_env_blank_is_sample() {
    let source = with_scoped_env(&[("PLAN_FILE", Some("  "))], DataSource::from_env);
    assert_eq!(source, DataSource::Sample);
}

#[test]
fn test_data_source_from_env_file() {
    let source = with_scoped_env(&[("PLAN_FILE", Some("plan.json"))], DataSource::from_env);
    assert_eq!(source, DataSource::File(PathBuf::from("plan.json")));
}

#[tokio::test]
async fn test_snapshot_serves_same_plan() {
    let file = snapshot_file(&serde_json::to_string(&sample_plan()).unwrap());
    let repo = RepositoryFactory::create_from_snapshot(file.path()).unwrap();

    let shifts = repo.get_shifts_by_date_range(may(1), may(31)).await.unwrap();
    assert_eq!(shifts.len(), 28);
    assert_eq!(repo.directory().await.unwrap(), sample_plan().directory);
}

#[test]
fn test_malformed_snapshot_is_validation_error() {
    let file = snapshot_file("{\"shifts\": [{\"id\": \"x\"}]}");
    let err = RepositoryFactory::create_from_snapshot(file.path())
        .err()
        .unwrap();
    assert!(matches!(err, RepositoryError::ValidationError { .. }));
    assert_eq!(err.context().operation.as_deref(), Some("load_plan"));
}

#[test]
fn test_snapshot_with_duplicate_keys_is_rejected() {
    let mut plan = sample_plan();
    let duplicate = plan.shifts[3].clone();
    plan.shifts.push(duplicate);
    let file = snapshot_file(&serde_json::to_string(&plan).unwrap());

    let err = RepositoryFactory::create_from_snapshot(file.path())
        .err()
        .unwrap();
    assert!(matches!(err, RepositoryError::ValidationError { .. }));
    assert!(err.to_string().contains("2025-05-02/Spätschicht"));
}

#[test]
fn test_snapshot_with_negative_hours_is_rejected() {
    let mut plan = sample_plan();
    plan.shifts[0].sectors[0].workers[0].hours = -12.5;
    let file = snapshot_file(&serde_json::to_string(&plan).unwrap());

    let err = RepositoryFactory::create_from_snapshot(file.path())
        .err()
        .unwrap();
    assert!(matches!(err, RepositoryError::ValidationError { .. }));
    assert_eq!(err.context().operation.as_deref(), Some("load_plan"));
    assert!(err.to_string().contains("-12.5"));
}

#[test]
fn test_snapshot_with_shared_shift_id_is_rejected() {
    let mut plan = sample_plan();
    plan.shifts[5].id = plan.shifts[2].id;
    let file = snapshot_file(&serde_json::to_string(&plan).unwrap());

    let err = RepositoryFactory::create_from_snapshot(file.path())
        .err()
        .unwrap();
    assert!(matches!(err, RepositoryError::ValidationError { .. }));
}

#[tokio::test]
async fn test_from_config_file() {
    let snapshot = snapshot_file(&serde_json::to_string(&sample_plan()).unwrap());
    let config = snapshot_file(&format!(
        "[repository]\nsource = \"file\"\npath = \"{}\"\n",
        snapshot.path().display()
    ));

    let repo = RepositoryFactory::from_config_file(config.path()).unwrap();
    assert_eq!(repo.list_leads().await.unwrap().len(), 2);
}

#[test]
fn test_from_missing_config_file() {
    let result = RepositoryFactory::from_config_file("/nonexistent/shiftboard.toml");
    assert!(matches!(
        result.err().unwrap(),
        RepositoryError::ConfigurationError { .. }
    ));
}
