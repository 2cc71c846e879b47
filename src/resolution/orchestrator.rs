//! Match resolution orchestration.
//!
//! The orchestrator runs a full reconciliation: stored decisions are
//! applied first, the matcher attributes the rest, and whatever remains
//! uncertain is returned to the caller for human confirmation. Confirmed
//! decisions are written back through the [`ConfirmationStore`] and picked
//! up by the next calculation.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::SupervisionConfig;
use crate::error::{EngineError, EngineResult};
use crate::matching::{normalize_for_matching, ClientMatch, MatchCandidate, MatchConfidence};
use crate::models::{CalendarEvent, Client, Employee, MatchDecision, PayrollReport, ReportPeriod};
use crate::payroll;
use crate::store::ConfirmationStore;

/// An event whose client attribution needs a human decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UncertainMatch {
    /// The event that could not be attributed automatically.
    pub event: CalendarEvent,

    /// The matching key a confirmation for this event will be stored under.
    pub normalized_title: String,

    /// The employee the event belongs to.
    pub employee_id: String,

    /// Candidate matches, in roster order. Empty when no rule matched.
    pub candidates: Vec<ClientMatch>,
}

/// The result of one reconciliation run: the priced report plus every
/// event that still needs a human decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationOutcome {
    /// The payroll report over all attributed events.
    pub report: PayrollReport,

    /// Events awaiting confirmation, in input order.
    pub uncertain_matches: Vec<UncertainMatch>,
}

/// Coordinates matching, stored decisions, and payroll calculation.
///
/// The orchestrator holds the matching settings and a shared handle to
/// the confirmation store. It never mutates its inputs: recomputing with
/// the same events and the same stored decisions produces an equal
/// outcome.
pub struct MatchResolutionOrchestrator {
    store: Arc<dyn ConfirmationStore>,
    special_keywords: Vec<String>,
    match_word_limit: usize,
    supervision: Option<SupervisionConfig>,
}

impl MatchResolutionOrchestrator {
    /// Creates an orchestrator.
    ///
    /// # Arguments
    ///
    /// * `store` - Shared confirmation store
    /// * `special_keywords` - Keywords that pre-empt client matching,
    ///   including any supervision keywords
    /// * `match_word_limit` - Number of leading title words used as the
    ///   confirmation key
    /// * `supervision` - Supervision billing settings, if any
    pub fn new(
        store: Arc<dyn ConfirmationStore>,
        special_keywords: Vec<String>,
        match_word_limit: usize,
        supervision: Option<SupervisionConfig>,
    ) -> Self {
        Self {
            store,
            special_keywords,
            match_word_limit,
            supervision,
        }
    }

    /// Runs a full reconciliation for one employee and period.
    ///
    /// Every event is attributed in three steps: a stored rejection drops
    /// the event, a stored resolution assigns it to the confirmed client,
    /// and otherwise the matcher decides. Confidently matched events are
    /// billed; everything else is returned as uncertain. Billability
    /// (period bounds, cancellation) is enforced by the payroll
    /// calculator, so uncertain matches may include events that would not
    /// have billed anyway.
    ///
    /// # Arguments
    ///
    /// * `employee` - The employee to reconcile
    /// * `clients` - The employee's client roster, in display order
    /// * `events` - Calendar events fetched for the period
    /// * `period` - The reporting period, with exclusive bounds
    ///
    /// # Returns
    ///
    /// The priced report and the list of events needing confirmation
    pub fn calculate_payroll(
        &self,
        employee: &Employee,
        clients: &[Client],
        events: &[CalendarEvent],
        period: &ReportPeriod,
    ) -> EngineResult<ReconciliationOutcome> {
        let decisions = self.store.get_all(&employee.id)?;
        let client_names: Vec<String> = clients.iter().map(|c| c.name.clone()).collect();

        let mut events_by_name: HashMap<String, Vec<CalendarEvent>> = HashMap::new();
        let mut uncertain_matches = Vec::new();

        for event in events {
            let normalized_title = normalize_for_matching(&event.title, self.match_word_limit);

            match decisions.get(&normalized_title) {
                Some(MatchDecision::Rejected) => continue,
                Some(MatchDecision::Resolved(name)) => {
                    events_by_name
                        .entry(name.clone())
                        .or_default()
                        .push(event.clone());
                    continue;
                }
                None => {}
            }

            let candidate =
                MatchCandidate::evaluate(&event.title, &client_names, &self.special_keywords);
            match candidate.confidence {
                MatchConfidence::Confident { name } => {
                    events_by_name.entry(name).or_default().push(event.clone());
                }
                MatchConfidence::Ambiguous { .. } | MatchConfidence::Unmatched => {
                    uncertain_matches.push(UncertainMatch {
                        event: event.clone(),
                        normalized_title,
                        employee_id: employee.id.clone(),
                        candidates: candidate.matches,
                    });
                }
            }
        }

        let report = payroll::calculate_payroll(
            employee,
            clients,
            &events_by_name,
            period,
            self.supervision.as_ref(),
        )?;

        Ok(ReconciliationOutcome {
            report,
            uncertain_matches,
        })
    }

    /// Records that an event title belongs to the named client.
    ///
    /// The title is reduced to its matching key first, so confirming one
    /// occurrence covers every recurrence of the same title. An existing
    /// decision for the key is replaced.
    ///
    /// # Arguments
    ///
    /// * `event_title` - The event title, raw or already normalized
    /// * `employee_id` - The employee the decision is scoped to
    /// * `client_name` - The confirmed client name
    ///
    /// # Returns
    ///
    /// [`EngineError::InvalidResolution`] when the client name is blank,
    /// or a store error when the decision could not be persisted
    pub fn confirm_match(
        &self,
        event_title: &str,
        employee_id: &str,
        client_name: &str,
    ) -> EngineResult<()> {
        let client_name = client_name.trim();
        if client_name.is_empty() {
            return Err(EngineError::InvalidResolution {
                message: "client name cannot be blank".to_string(),
            });
        }

        let key = normalize_for_matching(event_title, self.match_word_limit);
        self.store.set(
            &key,
            employee_id,
            MatchDecision::Resolved(client_name.to_string()),
        )
    }

    /// Records that an event title must never be billed.
    ///
    /// # Arguments
    ///
    /// * `event_title` - The event title, raw or already normalized
    /// * `employee_id` - The employee the decision is scoped to
    pub fn reject_match(&self, event_title: &str, employee_id: &str) -> EngineResult<()> {
        let key = normalize_for_matching(event_title, self.match_word_limit);
        self.store.set(&key, employee_id, MatchDecision::Rejected)
    }
}
