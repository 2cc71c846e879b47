//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading practice
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{MatchingConfig, PracticeConfig, PracticeMetadata, SupervisionConfig};

/// Loads and provides access to practice configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query matching and supervision settings.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/practice/
/// ├── practice.yaml     # Practice metadata
/// ├── matching.yaml     # Matching keywords and key length
/// └── supervision.yaml  # Supervision billing
/// ```
///
/// # Example
///
/// ```no_run
/// use practice_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/practice").unwrap();
/// println!("Practice: {}", loader.practice().name);
/// println!("Matching key length: {}", loader.match_word_limit());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PracticeConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/practice")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use practice_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/practice")?;
    /// # Ok::<(), practice_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load practice.yaml
        let practice_path = path.join("practice.yaml");
        let metadata = Self::load_yaml::<PracticeMetadata>(&practice_path)?;

        // Load matching.yaml
        let matching_path = path.join("matching.yaml");
        let matching = Self::load_yaml::<MatchingConfig>(&matching_path)?;

        // Load supervision.yaml
        let supervision_path = path.join("supervision.yaml");
        let supervision = Self::load_yaml::<SupervisionConfig>(&supervision_path)?;

        let config = PracticeConfig::new(metadata, matching, supervision);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying practice configuration.
    pub fn config(&self) -> &PracticeConfig {
        &self.config
    }

    /// Returns the practice metadata.
    pub fn practice(&self) -> &PracticeMetadata {
        self.config.practice()
    }

    /// Returns the supervision settings.
    pub fn supervision(&self) -> &SupervisionConfig {
        self.config.supervision()
    }

    /// Returns every keyword that pre-empts client matching.
    ///
    /// Supervision keywords are appended after the configured matching
    /// keywords so their events are bucketed by keyword instead of
    /// falling through to client-name rules. Duplicates are dropped.
    pub fn special_keywords(&self) -> Vec<String> {
        let mut keywords = self.config.matching().special_keywords.clone();
        for keyword in &self.config.supervision().keywords {
            if !keywords.contains(keyword) {
                keywords.push(keyword.clone());
            }
        }
        keywords
    }

    /// Returns the number of leading title words used as the
    /// confirmation key.
    pub fn match_word_limit(&self) -> usize {
        self.config.matching().match_word_limit
    }
}
