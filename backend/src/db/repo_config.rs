//! Repository configuration file support.
//!
//! The `[repository]` table of the server's TOML configuration selects where
//! the read-only plan comes from.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::factory::DataSource;
use super::repository::{ErrorContext, RepositoryError};

/// Repository configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepositoryConfig {
    #[serde(default)]
    pub repository: RepositorySettings,
}

/// Data source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    /// `"sample"` or `"file"`
    #[serde(default = "default_source")]
    pub source: String,
    /// Path to a JSON plan snapshot, required for `source = "file"`.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_source() -> String {
    "sample".to_string()
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            source: default_source(),
            path: None,
        }
    }
}

impl RepositoryConfig {
    /// Load repository configuration from a TOML file.
    ///
    /// # Returns
    /// * `Ok(RepositoryConfig)` if successful
    /// * `Err(RepositoryError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::configuration(format!("Failed to read config file: {}", e))
        })?;

        toml::from_str(&content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Resolve the configured data source.
    pub fn data_source(&self) -> Result<DataSource, RepositoryError> {
        self.repository.data_source()
    }
}

impl RepositorySettings {
    pub fn data_source(&self) -> Result<DataSource, RepositoryError> {
        let kind = SourceKind::from_str(&self.source).map_err(|e| {
            RepositoryError::configuration_with_context(
                e,
                ErrorContext::new("resolve_data_source").with_entity("repository"),
            )
        })?;

        match kind {
            SourceKind::Sample => Ok(DataSource::Sample),
            SourceKind::File => match &self.path {
                Some(path) => Ok(DataSource::File(path.clone())),
                None => Err(RepositoryError::configuration(
                    "File data source requires 'repository.path' setting",
                )),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceKind {
    Sample,
    File,
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sample" | "local" => Ok(Self::Sample),
            "file" | "json" => Ok(Self::File),
            _ => Err(format!("Unknown data source: {}", s)),
        }
    }
}
