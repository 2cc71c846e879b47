//! Reconciliation of calendar events into payroll reports.
//!
//! This module owns the read-check-match-calculate loop: stored human
//! decisions are applied first, the matcher handles the rest, and
//! unresolved events are handed back for confirmation.

mod orchestrator;

pub use orchestrator::{MatchResolutionOrchestrator, ReconciliationOutcome, UncertainMatch};
