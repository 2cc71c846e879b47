//! Payroll report models produced by a calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::period::ReportPeriod;

/// Per-client line in a payroll report.
///
/// One entry summarises every billable session attributed to a single
/// client inside the report period. Clients with no billable sessions do
/// not appear in the report at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollEntry {
    /// Name of the client the sessions belong to.
    pub client_name: String,

    /// Number of billable sessions counted for this client.
    pub sessions: u32,

    /// Price charged per session.
    pub price: Decimal,

    /// Per-session portion paid to the employee.
    pub employee_price: Decimal,

    /// Per-session portion retained by the company.
    pub company_price: Decimal,

    /// Total charged for this client, rounded to cents.
    pub gross_revenue: Decimal,

    /// Total paid to the employee for this client, rounded to cents.
    pub employee_revenue: Decimal,

    /// Total retained by the company for this client, rounded to cents.
    pub company_revenue: Decimal,
}

/// Per-keyword line for supervision sessions.
///
/// Supervision events are grouped by the configured keyword that matched
/// their titles and priced from the practice supervision settings rather
/// than a client roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupervisionEntry {
    /// The configured keyword this bucket was matched on.
    pub keyword: String,

    /// Number of billable supervision sessions.
    pub sessions: u32,

    /// Total charged for these sessions, rounded to cents.
    pub gross_revenue: Decimal,

    /// Total paid to the employee, rounded to cents.
    pub employee_revenue: Decimal,

    /// Total retained by the company, rounded to cents.
    pub company_revenue: Decimal,
}

/// Totals across every line of a payroll report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Billable sessions across all clients and supervision buckets.
    pub total_sessions: u32,

    /// Gross revenue across all lines, rounded to cents.
    pub total_revenue: Decimal,

    /// Employee share across all lines, rounded to cents.
    pub employee_revenue: Decimal,

    /// Company share across all lines, rounded to cents.
    pub company_revenue: Decimal,

    /// Gross revenue from supervision lines alone, rounded to cents.
    pub supervision_revenue: Decimal,
}

/// A complete payroll report for one employee over one period.
///
/// Reports are pure values: recomputing over the same inputs and the same
/// confirmation decisions produces an equal report, which the tests rely
/// on directly via `PartialEq`.
///
/// # Examples
///
/// ```
/// use practice_engine::models::{PayrollReport, ReportPeriod, ReportSummary};
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let report = PayrollReport {
///     employee_id: "emp-001".to_string(),
///     period: ReportPeriod {
///         start: Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
///         end: Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap(),
///     },
///     entries: vec![],
///     supervision: vec![],
///     summary: ReportSummary {
///         total_sessions: 0,
///         total_revenue: Decimal::ZERO,
///         employee_revenue: Decimal::ZERO,
///         company_revenue: Decimal::ZERO,
///         supervision_revenue: Decimal::ZERO,
///     },
/// };
///
/// assert!(report.entries.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// Employee the report was calculated for.
    pub employee_id: String,

    /// Period the report covers.
    pub period: ReportPeriod,

    /// Client lines, in roster order.
    pub entries: Vec<PayrollEntry>,

    /// Supervision lines, in configured keyword order.
    #[serde(default)]
    pub supervision: Vec<SupervisionEntry>,

    /// Totals across all lines.
    pub summary: ReportSummary,
}
