//! Response types for the Practice Engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API, plus the acknowledgement body returned when a match
//! decision is recorded.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates an invalid resolution error response.
    pub fn invalid_resolution(message: impl Into<String>) -> Self {
        Self::with_details(
            "INVALID_RESOLUTION",
            format!("Invalid match resolution: {}", message.into()),
            "The match decision was not saved",
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a missing field error response.
    pub fn missing_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::with_details(
            "MISSING_FIELD",
            format!("missing field: {}", field),
            format!("Required field '{}' was not provided in the request", field),
        )
    }
}

/// Acknowledgement returned after a match decision is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionAck {
    /// Whether the decision was recorded in the confirmation store.
    pub saved: bool,
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidPeriod { start, end } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_PERIOD",
                    format!(
                        "Invalid report period: start {} must be before end {}",
                        start, end
                    ),
                    "The report period must end after it starts",
                ),
            },
            EngineError::InvalidResolution { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::invalid_resolution(message),
            },
            EngineError::StoreReadFailed { message } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details(
                    "STORE_READ_FAILED",
                    "Failed to read confirmation store",
                    message,
                ),
            },
            EngineError::StoreWriteFailed { message } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details(
                    "STORE_WRITE_FAILED",
                    "The match decision was not saved",
                    message,
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_resolution_error() {
        let error = ApiError::invalid_resolution("client name cannot be blank");
        assert_eq!(error.code, "INVALID_RESOLUTION");
        assert!(error.message.contains("client name cannot be blank"));
    }

    #[test]
    fn test_missing_field_error() {
        let error = ApiError::missing_field("employee_id");
        assert_eq!(error.code, "MISSING_FIELD");
        assert!(error.message.contains("employee_id"));
        assert!(error.details.is_some());
    }

    #[test]
    fn test_engine_error_to_api_error() {
        let engine_error = EngineError::InvalidResolution {
            message: "client name cannot be blank".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_RESOLUTION");
    }

    #[test]
    fn test_store_write_failure_maps_to_bad_gateway() {
        let engine_error = EngineError::StoreWriteFailed {
            message: "sheet quota exceeded".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_GATEWAY);
        assert_eq!(api_error.error.code, "STORE_WRITE_FAILED");
        assert_eq!(
            api_error.error.details.as_deref(),
            Some("sheet quota exceeded")
        );
    }

    #[test]
    fn test_invalid_period_maps_to_bad_request() {
        use chrono::TimeZone;
        let engine_error = EngineError::InvalidPeriod {
            start: chrono::Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap(),
            end: chrono::Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_PERIOD");
    }

    #[test]
    fn test_resolution_ack_serialization() {
        let ack = ResolutionAck { saved: true };
        let json = serde_json::to_string(&ack).unwrap();
        assert_eq!(json, "{\"saved\":true}");
    }
}
