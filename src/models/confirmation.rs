//! Confirmation models recording human decisions about uncertain matches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The decision a human made about an uncertain event title.
///
/// Decisions are keyed by normalized event title, so one decision covers
/// every recurrence of the same title for the same employee.
///
/// # Examples
///
/// ```
/// use practice_engine::models::MatchDecision;
///
/// let resolved = MatchDecision::Resolved("Ζωή Κουσουλού".to_string());
/// assert_eq!(resolved.resolved_name(), Some("Ζωή Κουσουλού"));
///
/// let rejected = MatchDecision::Rejected;
/// assert!(rejected.is_rejected());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", content = "client_name", rename_all = "snake_case")]
pub enum MatchDecision {
    /// The title belongs to the named client.
    Resolved(String),
    /// The title is not a client session and must never be billed.
    Rejected,
}

impl MatchDecision {
    /// Returns true if the decision excludes the title from billing.
    pub fn is_rejected(&self) -> bool {
        matches!(self, MatchDecision::Rejected)
    }

    /// Returns the confirmed client name, if the title was resolved.
    pub fn resolved_name(&self) -> Option<&str> {
        match self {
            MatchDecision::Resolved(name) => Some(name),
            MatchDecision::Rejected => None,
        }
    }
}

/// A stored confirmation: one decision for one normalized title and employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    /// Normalized event title the decision applies to.
    pub normalized_title: String,

    /// Employee whose events the decision covers.
    pub employee_id: String,

    /// The decision itself.
    pub decision: MatchDecision,

    /// When the decision was recorded. Overwritten on upsert.
    pub created_at: DateTime<Utc>,
}
