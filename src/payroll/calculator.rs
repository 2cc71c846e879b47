//! Payroll report calculation.
//!
//! Turns attributed calendar events into a priced report. The calculator
//! is pure: it reads the event buckets it is given and never consults the
//! matcher or the confirmation store, so recomputing over the same inputs
//! always produces an equal report.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::config::SupervisionConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    CalendarEvent, Client, Employee, PayrollEntry, PayrollReport, ReportPeriod, ReportSummary,
    SupervisionEntry,
};
use crate::payroll::money::round_currency;

/// Calculates a payroll report for one employee over one period.
///
/// Events arrive pre-attributed: `events_by_name` maps a client name or
/// supervision keyword to the events assigned to it. A session is counted
/// when its start time lies strictly inside the period and the event is
/// not cancelled, or is cancelled with payment pending. Clients and
/// keywords with no billable sessions are omitted from the report.
///
/// All monetary values are rounded to cents after each multiplication and
/// each accumulation.
///
/// # Arguments
///
/// * `employee` - The employee the report is for
/// * `clients` - The employee's client roster, in display order
/// * `events_by_name` - Events grouped by attributed client name or keyword
/// * `period` - The reporting period, with exclusive bounds
/// * `supervision` - Supervision billing settings, if the practice has any
///
/// # Returns
///
/// The priced report, or [`EngineError::InvalidPeriod`] when the period
/// does not span a positive amount of time
///
/// # Examples
///
/// ```
/// use practice_engine::models::{CalendarEvent, Client, Employee, ReportPeriod};
/// use practice_engine::payroll::calculate_payroll;
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
/// use std::str::FromStr;
///
/// let employee = Employee {
///     id: "emp-001".to_string(),
///     name: "Ελένη Δημητρίου".to_string(),
/// };
/// let clients = vec![Client {
///     id: "cl-001".to_string(),
///     name: "Μαρία Παπαδάκη".to_string(),
///     price: Decimal::from_str("50.00").unwrap(),
///     employee_price: Decimal::from_str("22.50").unwrap(),
///     company_price: Decimal::from_str("27.50").unwrap(),
///     employee_id: "emp-001".to_string(),
///     pending_payment_allowed: false,
/// }];
/// let period = ReportPeriod {
///     start: Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
///     end: Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap(),
/// };
///
/// let mut events_by_name = HashMap::new();
/// events_by_name.insert(
///     "Μαρία Παπαδάκη".to_string(),
///     vec![CalendarEvent {
///         id: "evt-001".to_string(),
///         title: "Μαρία Παπαδάκη 10:00".to_string(),
///         start_time: Utc.with_ymd_and_hms(2025, 3, 4, 10, 0, 0).unwrap(),
///         end_time: Utc.with_ymd_and_hms(2025, 3, 4, 11, 0, 0).unwrap(),
///         color_id: None,
///         is_cancelled: false,
///         is_pending_payment: false,
///         attendees: vec![],
///     }],
/// );
///
/// let report = calculate_payroll(&employee, &clients, &events_by_name, &period, None).unwrap();
/// assert_eq!(report.entries[0].sessions, 1);
/// assert_eq!(report.summary.total_revenue, Decimal::from_str("50.00").unwrap());
/// ```
pub fn calculate_payroll(
    employee: &Employee,
    clients: &[Client],
    events_by_name: &HashMap<String, Vec<CalendarEvent>>,
    period: &ReportPeriod,
    supervision: Option<&SupervisionConfig>,
) -> EngineResult<PayrollReport> {
    if !period.is_valid() {
        return Err(EngineError::InvalidPeriod {
            start: period.start,
            end: period.end,
        });
    }

    let mut entries = Vec::new();
    for client in clients {
        let sessions = billable_sessions(events_by_name, &client.name, period);
        if sessions == 0 {
            continue;
        }
        entries.push(build_entry(client, sessions));
    }

    let mut supervision_entries = Vec::new();
    if let Some(config) = supervision {
        if config.enabled {
            for keyword in &config.keywords {
                let sessions = billable_sessions(events_by_name, keyword, period);
                if sessions == 0 {
                    continue;
                }
                supervision_entries.push(build_supervision_entry(config, keyword, sessions));
            }
        }
    }

    let summary = summarize(&entries, &supervision_entries);

    Ok(PayrollReport {
        employee_id: employee.id.clone(),
        period: *period,
        entries,
        supervision: supervision_entries,
        summary,
    })
}

/// Counts the billable sessions in one bucket.
fn billable_sessions(
    events_by_name: &HashMap<String, Vec<CalendarEvent>>,
    name: &str,
    period: &ReportPeriod,
) -> u32 {
    events_by_name
        .get(name)
        .map(|events| {
            events
                .iter()
                .filter(|event| period.contains(event.start_time) && event.counts_for_billing())
                .count() as u32
        })
        .unwrap_or(0)
}

/// Prices one client line.
fn build_entry(client: &Client, sessions: u32) -> PayrollEntry {
    let count = Decimal::from(sessions);
    PayrollEntry {
        client_name: client.name.clone(),
        sessions,
        price: client.price,
        employee_price: client.employee_price,
        company_price: client.company_price,
        gross_revenue: round_currency(count * client.price),
        employee_revenue: round_currency(count * client.employee_price),
        company_revenue: round_currency(count * client.company_price),
    }
}

/// Prices one supervision line from the practice settings.
fn build_supervision_entry(
    config: &SupervisionConfig,
    keyword: &str,
    sessions: u32,
) -> SupervisionEntry {
    let count = Decimal::from(sessions);
    SupervisionEntry {
        keyword: keyword.to_string(),
        sessions,
        gross_revenue: round_currency(count * config.price),
        employee_revenue: round_currency(count * config.employee_price),
        company_revenue: round_currency(count * config.company_price),
    }
}

/// Totals every line, rounding after each accumulation.
fn summarize(entries: &[PayrollEntry], supervision: &[SupervisionEntry]) -> ReportSummary {
    let mut total_sessions = 0u32;
    let mut total_revenue = Decimal::ZERO;
    let mut employee_revenue = Decimal::ZERO;
    let mut company_revenue = Decimal::ZERO;
    let mut supervision_revenue = Decimal::ZERO;

    for entry in entries {
        total_sessions += entry.sessions;
        total_revenue = round_currency(total_revenue + entry.gross_revenue);
        employee_revenue = round_currency(employee_revenue + entry.employee_revenue);
        company_revenue = round_currency(company_revenue + entry.company_revenue);
    }

    for entry in supervision {
        total_sessions += entry.sessions;
        total_revenue = round_currency(total_revenue + entry.gross_revenue);
        employee_revenue = round_currency(employee_revenue + entry.employee_revenue);
        company_revenue = round_currency(company_revenue + entry.company_revenue);
        supervision_revenue = round_currency(supervision_revenue + entry.gross_revenue);
    }

    ReportSummary {
        total_sessions,
        total_revenue,
        employee_revenue,
        company_revenue,
        supervision_revenue,
    }
}
