//! Reporting period model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The time window a payroll report covers.
///
/// Both bounds are exclusive: an event starting exactly at `start` or
/// exactly at `end` falls outside the period, so adjacent monthly reports
/// never bill the same boundary instant twice.
///
/// # Examples
///
/// ```
/// use practice_engine::models::ReportPeriod;
/// use chrono::{TimeZone, Utc};
///
/// let period = ReportPeriod {
///     start: Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
///     end: Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap(),
/// };
///
/// assert!(period.contains(Utc.with_ymd_and_hms(2025, 3, 15, 10, 0, 0).unwrap()));
/// assert!(!period.contains(period.start));
/// assert!(!period.contains(period.end));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// Exclusive lower bound of the period.
    pub start: DateTime<Utc>,

    /// Exclusive upper bound of the period.
    pub end: DateTime<Utc>,
}

impl ReportPeriod {
    /// Returns true if the period spans a positive amount of time.
    pub fn is_valid(&self) -> bool {
        self.end > self.start
    }

    /// Checks whether an instant lies strictly inside the period.
    ///
    /// # Arguments
    ///
    /// * `instant` - The moment to test, typically an event start time
    ///
    /// # Returns
    ///
    /// `true` if `instant` is after `start` and before `end`
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant > self.start && instant < self.end
    }
}
