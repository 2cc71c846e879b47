//! Configuration loading and management for the Practice Engine.
//!
//! This module provides functionality to load practice configuration from
//! YAML files, including practice metadata, matching keywords, and
//! supervision billing settings.
//!
//! # Example
//!
//! ```no_run
//! use practice_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/practice").unwrap();
//! println!("Loaded practice: {}", config.practice().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{MatchingConfig, PracticeConfig, PracticeMetadata, SupervisionConfig};
