//! Configuration types for the practice.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::matching::DEFAULT_MATCH_WORD_LIMIT;

/// Metadata about the practice.
#[derive(Debug, Clone, Deserialize)]
pub struct PracticeMetadata {
    /// The human-readable name of the practice.
    pub name: String,
    /// ISO 4217 currency code used for all prices.
    pub currency: String,
    /// The version or effective date of this configuration.
    pub version: String,
}

/// Matching configuration from matching.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchingConfig {
    /// Keywords that pre-empt client matching (administrative blocks,
    /// non-client categories).
    #[serde(default)]
    pub special_keywords: Vec<String>,
    /// Number of leading title words used as the confirmation key.
    #[serde(default = "default_match_word_limit")]
    pub match_word_limit: usize,
}

fn default_match_word_limit() -> usize {
    DEFAULT_MATCH_WORD_LIMIT
}

/// Supervision configuration from supervision.yaml.
///
/// Supervision sessions are matched by keyword rather than client name
/// and priced from these settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SupervisionConfig {
    /// Whether supervision sessions are billed at all.
    pub enabled: bool,
    /// Keywords whose events are grouped into supervision buckets.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Price charged per supervision session.
    pub price: Decimal,
    /// Per-session portion paid to the employee.
    pub employee_price: Decimal,
    /// Per-session portion retained by the company.
    pub company_price: Decimal,
}

/// The complete practice configuration loaded from YAML files.
///
/// This struct aggregates all configuration loaded from the various
/// YAML files in a practice configuration directory.
#[derive(Debug, Clone)]
pub struct PracticeConfig {
    /// Practice metadata.
    metadata: PracticeMetadata,
    /// Matching settings.
    matching: MatchingConfig,
    /// Supervision settings.
    supervision: SupervisionConfig,
}

impl PracticeConfig {
    /// Creates a new PracticeConfig from its component parts.
    pub fn new(
        metadata: PracticeMetadata,
        matching: MatchingConfig,
        supervision: SupervisionConfig,
    ) -> Self {
        Self {
            metadata,
            matching,
            supervision,
        }
    }

    /// Returns the practice metadata.
    pub fn practice(&self) -> &PracticeMetadata {
        &self.metadata
    }

    /// Returns the matching settings.
    pub fn matching(&self) -> &MatchingConfig {
        &self.matching
    }

    /// Returns the supervision settings.
    pub fn supervision(&self) -> &SupervisionConfig {
        &self.supervision
    }
}
