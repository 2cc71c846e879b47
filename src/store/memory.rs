//! In-memory confirmation store.

use std::collections::HashMap;

use chrono::Utc;
use parking_lot::Mutex;

use crate::error::EngineResult;
use crate::models::{Confirmation, MatchDecision};
use crate::store::ConfirmationStore;

/// Confirmation store backed by a mutex-guarded map.
///
/// Decisions are held per employee, then per normalized title. All access
/// goes through one mutex, which keeps concurrent confirmations for the
/// same title strictly ordered. The store is empty on startup and loses
/// its contents on shutdown.
///
/// # Examples
///
/// ```
/// use practice_engine::models::MatchDecision;
/// use practice_engine::store::{ConfirmationStore, InMemoryConfirmationStore};
///
/// let store = InMemoryConfirmationStore::new();
/// store
///     .set("κουσουλου ζωη", "emp-001", MatchDecision::Rejected)
///     .unwrap();
///
/// let decision = store.get("κουσουλου ζωη", "emp-001").unwrap();
/// assert_eq!(decision, Some(MatchDecision::Rejected));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryConfirmationStore {
    entries: Mutex<HashMap<String, HashMap<String, Confirmation>>>,
}

impl InMemoryConfirmationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfirmationStore for InMemoryConfirmationStore {
    fn get(&self, normalized_title: &str, employee_id: &str) -> EngineResult<Option<MatchDecision>> {
        let entries = self.entries.lock();
        let decision = entries
            .get(employee_id)
            .and_then(|titles| titles.get(normalized_title))
            .map(|confirmation| confirmation.decision.clone());
        Ok(decision)
    }

    fn set(
        &self,
        normalized_title: &str,
        employee_id: &str,
        decision: MatchDecision,
    ) -> EngineResult<()> {
        let confirmation = Confirmation {
            normalized_title: normalized_title.to_string(),
            employee_id: employee_id.to_string(),
            decision,
            created_at: Utc::now(),
        };

        let mut entries = self.entries.lock();
        entries
            .entry(employee_id.to_string())
            .or_default()
            .insert(normalized_title.to_string(), confirmation);
        Ok(())
    }

    fn get_all(&self, employee_id: &str) -> EngineResult<HashMap<String, MatchDecision>> {
        let entries = self.entries.lock();
        let decisions = entries
            .get(employee_id)
            .map(|titles| {
                titles
                    .iter()
                    .map(|(title, confirmation)| (title.clone(), confirmation.decision.clone()))
                    .collect()
            })
            .unwrap_or_default();
        Ok(decisions)
    }
}
