//! Error types for the Practice Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during matching, payroll
//! calculation, and confirmation handling.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// The main error type for the Practice Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use practice_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A report period was empty or had its bounds reversed.
    #[error("Invalid report period: start {start} must be before end {end}")]
    InvalidPeriod {
        /// The period start that was supplied.
        start: DateTime<Utc>,
        /// The period end that was supplied.
        end: DateTime<Utc>,
    },

    /// A match resolution was rejected before reaching the store.
    #[error("Invalid match resolution: {message}")]
    InvalidResolution {
        /// A description of what made the resolution invalid.
        message: String,
    },

    /// The confirmation store could not be read.
    #[error("Failed to read confirmation store: {message}")]
    StoreReadFailed {
        /// A description of the read failure.
        message: String,
    },

    /// The confirmation store could not be written. The decision was NOT
    /// recorded and the caller must not treat it as saved.
    #[error("Failed to write confirmation store: {message}")]
    StoreWriteFailed {
        /// A description of the write failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_period_displays_both_bounds() {
        let error = EngineError::InvalidPeriod {
            start: Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid report period: start 2025-02-01 00:00:00 UTC must be before end 2025-01-01 00:00:00 UTC"
        );
    }

    #[test]
    fn test_invalid_resolution_displays_message() {
        let error = EngineError::InvalidResolution {
            message: "client name cannot be blank".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid match resolution: client name cannot be blank"
        );
    }

    #[test]
    fn test_store_read_failed_displays_message() {
        let error = EngineError::StoreReadFailed {
            message: "connection reset".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to read confirmation store: connection reset"
        );
    }

    #[test]
    fn test_store_write_failed_displays_message() {
        let error = EngineError::StoreWriteFailed {
            message: "sheet quota exceeded".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to write confirmation store: sheet quota exceeded"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
