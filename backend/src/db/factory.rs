//! Repository factory for dependency injection.
//!
//! Creates the repository instance handed to the HTTP layer based on the
//! configured data source.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::info;

use super::repo_config::RepositoryConfig;
use super::repositories::LocalRepository;
use super::repository::{RepositoryResult, ShiftRepository};

/// Where the read-only plan is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// The built-in May 2025 sample plan
    Sample,
    /// A JSON `ShiftPlan` snapshot read once at startup
    File(PathBuf),
}

impl DataSource {
    /// Read `PLAN_FILE` from the environment; falls back to the sample plan.
    pub fn from_env() -> Self {
        match std::env::var("PLAN_FILE") {
            Ok(path) if !path.trim().is_empty() => Self::File(PathBuf::from(path)),
            _ => Self::Sample,
        }
    }
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```
/// use shiftboard::db::{DataSource, RepositoryFactory};
///
/// let repo = RepositoryFactory::create(&DataSource::Sample).unwrap();
/// # let _ = repo;
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository for the given data source.
    ///
    /// # Returns
    /// * `Ok(Arc<dyn ShiftRepository>)` - Repository instance
    /// * `Err(RepositoryError)` - If the snapshot cannot be read or is invalid
    pub fn create(source: &DataSource) -> RepositoryResult<Arc<dyn ShiftRepository>> {
        match source {
            DataSource::Sample => Ok(Self::create_local()),
            DataSource::File(path) => Self::create_from_snapshot(path),
        }
    }

    /// Create an in-memory repository serving the sample plan.
    pub fn create_local() -> Arc<dyn ShiftRepository> {
        info!("Using built-in sample plan");
        Arc::new(LocalRepository::with_sample_data())
    }

    /// Create an in-memory repository from a JSON snapshot.
    pub fn create_from_snapshot<P: AsRef<Path>>(
        path: P,
    ) -> RepositoryResult<Arc<dyn ShiftRepository>> {
        info!("Loading plan snapshot from {}", path.as_ref().display());
        let repo = LocalRepository::from_json_file(path)?;
        Ok(Arc::new(repo))
    }

    /// Create repository from a TOML configuration file.
    pub fn from_config_file<P: AsRef<Path>>(
        config_path: P,
    ) -> RepositoryResult<Arc<dyn ShiftRepository>> {
        let config = RepositoryConfig::from_file(config_path)?;
        Self::from_repository_config(&config)
    }

    /// Create repository from already parsed configuration.
    pub fn from_repository_config(
        config: &RepositoryConfig,
    ) -> RepositoryResult<Arc<dyn ShiftRepository>> {
        Self::create(&config.data_source()?)
    }
}
