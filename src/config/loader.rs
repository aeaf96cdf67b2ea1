//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the record
//! manager configuration from a YAML file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{RecordError, RecordResult};
use crate::models::{DisplayLayout, Record};
use crate::store::RecordStore;

use super::types::AppConfig;

/// Loads and provides access to the configuration.
///
/// # File Format
///
/// ```text
/// display:
///   currency: SAR
///   name_width: 15
///   id_width: 10
/// seed:
///   enabled: true
///   records:
///     - type: student
///       name: Ahmed Ali
///       id: 2021001
///       course: CS101
///       grade: 95.5
/// ```
///
/// # Example
///
/// ```no_run
/// use campus_records::config::ConfigLoader;
/// use campus_records::store::RecordStore;
///
/// let loader = ConfigLoader::load("./config/campus.yaml")?;
/// let mut store = RecordStore::new();
/// loader.seed_store(&mut store)?;
/// # Ok::<(), campus_records::error::RecordError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
    source: Option<PathBuf>,
}

impl ConfigLoader {
    /// Loads configuration from the given YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file does not exist or cannot be read
    /// - The file contains invalid YAML or unknown record types
    pub fn load<P: AsRef<Path>>(path: P) -> RecordResult<Self> {
        let path = path.as_ref();
        let config = Self::load_yaml::<AppConfig>(path)?;

        info!(
            path = %path.display(),
            seed_records = config.seed.records.len(),
            seed_enabled = config.seed.enabled,
            "Configuration loaded"
        );

        Ok(Self {
            config,
            source: Some(path.to_path_buf()),
        })
    }

    /// Loads from `path` when given, otherwise returns the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> RecordResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("No configuration file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> RecordResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RecordError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| RecordError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The file this configuration came from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Returns the display layout.
    pub fn display(&self) -> &DisplayLayout {
        &self.config.display
    }

    /// Converts the configured seed records, or returns none when seeding is disabled.
    pub fn seed_records(&self) -> RecordResult<Vec<Record>> {
        if !self.config.seed.enabled {
            return Ok(Vec::new());
        }
        self.config
            .seed
            .records
            .iter()
            .cloned()
            .map(|seed| seed.into_record())
            .collect()
    }

    /// Appends the seed records to `store` and returns how many were added.
    ///
    /// Nothing is appended if any seed record is invalid.
    pub fn seed_store(&self, store: &mut RecordStore) -> RecordResult<usize> {
        let records = self.seed_records()?;
        let count = records.len();
        store.extend(records);
        Ok(count)
    }
}
