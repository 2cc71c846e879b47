//! Employee model.

use serde::{Deserialize, Serialize};

/// An employee of the practice whose sessions are being reconciled.
///
/// Rosters, calendar events, and confirmation decisions are all scoped to
/// one employee, so the model itself stays small.
///
/// # Examples
///
/// ```
/// use practice_engine::models::Employee;
///
/// let employee = Employee {
///     id: "emp-001".to_string(),
///     name: "Ελένη Δημητρίου".to_string(),
/// };
///
/// assert_eq!(employee.id, "emp-001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: String,

    /// Employee display name.
    pub name: String,
}
