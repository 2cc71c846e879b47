//! HTTP API module for the Practice Engine.
//!
//! This module provides the REST API endpoints for reconciling calendar
//! events against client rosters and recording match decisions.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, ConfirmMatchRequest, RejectMatchRequest};
pub use response::{ApiError, ResolutionAck};
pub use state::AppState;
