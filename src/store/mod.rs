//! Confirmation storage for human match decisions.
//!
//! Decisions are keyed by normalized event title and employee, so one
//! confirmation covers every recurrence of the same title. The trait keeps
//! the reconciliation logic independent of where decisions live; the
//! bundled implementation holds them in memory behind a mutex.

mod memory;

use std::collections::HashMap;

use crate::error::EngineResult;
use crate::models::MatchDecision;

pub use memory::InMemoryConfirmationStore;

/// Storage for confirmation decisions.
///
/// Implementations must be safe to share across threads. Writes are
/// upserts: setting a decision for an existing key replaces the previous
/// decision.
pub trait ConfirmationStore: Send + Sync {
    /// Looks up the decision for one normalized title and employee.
    ///
    /// # Arguments
    ///
    /// * `normalized_title` - The matching key of the event title
    /// * `employee_id` - The employee the decision is scoped to
    ///
    /// # Returns
    ///
    /// The stored decision, or `None` when nothing was decided yet
    fn get(&self, normalized_title: &str, employee_id: &str) -> EngineResult<Option<MatchDecision>>;

    /// Stores a decision, replacing any previous decision for the key.
    ///
    /// # Arguments
    ///
    /// * `normalized_title` - The matching key of the event title
    /// * `employee_id` - The employee the decision is scoped to
    /// * `decision` - The decision to record
    fn set(
        &self,
        normalized_title: &str,
        employee_id: &str,
        decision: MatchDecision,
    ) -> EngineResult<()>;

    /// Returns every decision recorded for one employee, keyed by
    /// normalized title.
    ///
    /// # Arguments
    ///
    /// * `employee_id` - The employee whose decisions to fetch
    fn get_all(&self, employee_id: &str) -> EngineResult<HashMap<String, MatchDecision>>;
}
