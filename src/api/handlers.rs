//! HTTP request handlers for the Practice Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{CalendarEvent, Client, Employee, ReportPeriod};

use super::request::{CalculationRequest, ConfirmMatchRequest, RejectMatchRequest};
use super::response::{ApiError, ApiErrorResponse, ResolutionAck};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/matches/confirm", post(confirm_match_handler))
        .route("/matches/reject", post(reject_match_handler))
        .with_state(state)
}

/// Maps a JSON extraction failure to an API error body.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for POST /calculate endpoint.
///
/// Reconciles the submitted calendar events against the client roster and
/// returns the payroll report together with any unresolved matches.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Convert request types to domain types
    let employee: Employee = request.employee.into();
    let clients: Vec<Client> = request.clients.into_iter().map(Into::into).collect();
    let events: Vec<CalendarEvent> = request.events.into_iter().map(Into::into).collect();
    let period: ReportPeriod = request.period.into();

    let start_time = Instant::now();
    match state
        .orchestrator()
        .calculate_payroll(&employee, &clients, &events, &period)
    {
        Ok(outcome) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                events_count = events.len(),
                total_revenue = %outcome.report.summary.total_revenue,
                uncertain_count = outcome.uncertain_matches.len(),
                duration_us = duration.as_micros(),
                "Reconciliation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(outcome),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Reconciliation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for POST /matches/confirm endpoint.
///
/// Records that future events with the given title belong to the named
/// client.
async fn confirm_match_handler(
    State(state): State<AppState>,
    payload: Result<Json<ConfirmMatchRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing match confirmation");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    match state.orchestrator().confirm_match(
        &request.event_title,
        &request.employee_id,
        &request.client_name,
    ) {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                client_name = %request.client_name,
                "Match confirmed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ResolutionAck { saved: true }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Match confirmation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for POST /matches/reject endpoint.
///
/// Records that events with the given title are not billable sessions.
async fn reject_match_handler(
    State(state): State<AppState>,
    payload: Result<Json<RejectMatchRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing match rejection");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    match state
        .orchestrator()
        .reject_match(&request.event_title, &request.employee_id)
    {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                "Match rejected"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ResolutionAck { saved: true }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Match rejection failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
