//! Request types for the Practice Engine API.
//!
//! This module defines the JSON request structures for the `/calculate`,
//! `/matches/confirm`, and `/matches/reject` endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CalendarEvent, Client, Employee, ReportPeriod};

/// Request body for the `/calculate` endpoint.
///
/// Contains all information needed to reconcile an employee's calendar
/// events against their client roster for a report period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee the report is for.
    pub employee: EmployeeRequest,
    /// The employee's client roster.
    pub clients: Vec<ClientRequest>,
    /// The calendar events to reconcile.
    pub events: Vec<CalendarEventRequest>,
    /// The report period.
    pub period: ReportPeriodRequest,
}

/// Employee information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
}

/// Client roster entry in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRequest {
    /// Unique identifier for the client.
    pub id: String,
    /// The client's full name as entered on the roster.
    pub name: String,
    /// Price charged per session.
    pub price: Decimal,
    /// Portion of the session price paid to the employee.
    pub employee_price: Decimal,
    /// Portion of the session price kept by the practice.
    pub company_price: Decimal,
    /// The employee this client is assigned to.
    pub employee_id: String,
    /// Whether sessions may remain billable while payment is pending.
    #[serde(default)]
    pub pending_payment_allowed: bool,
}

/// Calendar event in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEventRequest {
    /// Unique identifier for the event.
    pub id: String,
    /// The event title as it appears in the calendar.
    pub title: String,
    /// When the session starts.
    pub start_time: DateTime<Utc>,
    /// When the session ends.
    pub end_time: DateTime<Utc>,
    /// Calendar colour label, if any.
    #[serde(default)]
    pub color_id: Option<String>,
    /// Whether the session was cancelled.
    #[serde(default)]
    pub is_cancelled: bool,
    /// Whether the session is awaiting payment.
    #[serde(default)]
    pub is_pending_payment: bool,
    /// Attendee email addresses.
    #[serde(default)]
    pub attendees: Vec<String>,
}

/// Report period in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportPeriodRequest {
    /// The period start (exclusive).
    pub start: DateTime<Utc>,
    /// The period end (exclusive).
    pub end: DateTime<Utc>,
}

/// Request body for the `/matches/confirm` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmMatchRequest {
    /// The employee whose event is being resolved.
    pub employee_id: String,
    /// The calendar event title to resolve.
    pub event_title: String,
    /// The client the event belongs to.
    pub client_name: String,
}

/// Request body for the `/matches/reject` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectMatchRequest {
    /// The employee whose event is being rejected.
    pub employee_id: String,
    /// The calendar event title to reject.
    pub event_title: String,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            name: req.name,
        }
    }
}

impl From<ClientRequest> for Client {
    fn from(req: ClientRequest) -> Self {
        Client {
            id: req.id,
            name: req.name,
            price: req.price,
            employee_price: req.employee_price,
            company_price: req.company_price,
            employee_id: req.employee_id,
            pending_payment_allowed: req.pending_payment_allowed,
        }
    }
}

impl From<CalendarEventRequest> for CalendarEvent {
    fn from(req: CalendarEventRequest) -> Self {
        CalendarEvent {
            id: req.id,
            title: req.title,
            start_time: req.start_time,
            end_time: req.end_time,
            color_id: req.color_id,
            is_cancelled: req.is_cancelled,
            is_pending_payment: req.is_pending_payment,
            attendees: req.attendees,
        }
    }
}

impl From<ReportPeriodRequest> for ReportPeriod {
    fn from(req: ReportPeriodRequest) -> Self {
        ReportPeriod {
            start: req.start,
            end: req.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_calculation_request() {
        let json = r#"{
            "employee": {
                "id": "emp-001",
                "name": "Μαρία Παππά"
            },
            "clients": [
                {
                    "id": "cli-001",
                    "name": "Γιώργος Παπαδόπουλος",
                    "price": "50.00",
                    "employee_price": "22.50",
                    "company_price": "27.50",
                    "employee_id": "emp-001"
                }
            ],
            "events": [
                {
                    "id": "evt-001",
                    "title": "Γιώργος Παπαδόπουλος 10:00",
                    "start_time": "2025-03-10T10:00:00Z",
                    "end_time": "2025-03-10T11:00:00Z"
                }
            ],
            "period": {
                "start": "2025-03-01T00:00:00Z",
                "end": "2025-04-01T00:00:00Z"
            }
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee.id, "emp-001");
        assert_eq!(request.clients.len(), 1);
        assert_eq!(request.clients[0].price.to_string(), "50.00");
        assert_eq!(request.events.len(), 1);
        assert_eq!(request.events[0].title, "Γιώργος Παπαδόπουλος 10:00");
    }

    #[test]
    fn test_deserialize_event_defaults() {
        let json = r#"{
            "id": "evt-002",
            "title": "Κουσουλού Ζωή Ραντεβού",
            "start_time": "2025-03-12T09:00:00Z",
            "end_time": "2025-03-12T09:45:00Z"
        }"#;

        let event: CalendarEventRequest = serde_json::from_str(json).unwrap();
        assert_eq!(event.color_id, None);
        assert!(!event.is_cancelled);
        assert!(!event.is_pending_payment);
        assert!(event.attendees.is_empty());
    }

    #[test]
    fn test_deserialize_confirm_match_request() {
        let json = r#"{
            "employee_id": "emp-001",
            "event_title": "Κουσουλού Ζωή Ραντεβού",
            "client_name": "Ζωή Κουσουλού"
        }"#;

        let request: ConfirmMatchRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee_id, "emp-001");
        assert_eq!(request.client_name, "Ζωή Κουσουλού");
    }

    #[test]
    fn test_client_conversion() {
        let req = ClientRequest {
            id: "cli-001".to_string(),
            name: "Ζωή Κουσουλού".to_string(),
            price: Decimal::new(5000, 2),
            employee_price: Decimal::new(2250, 2),
            company_price: Decimal::new(2750, 2),
            employee_id: "emp-001".to_string(),
            pending_payment_allowed: true,
        };

        let client: Client = req.into();
        assert_eq!(client.name, "Ζωή Κουσουλού");
        assert!(client.pending_payment_allowed);
        assert!(client.has_valid_price_split());
    }

    #[test]
    fn test_event_conversion_keeps_flags() {
        let req = CalendarEventRequest {
            id: "evt-003".to_string(),
            title: "ακυρωμένο ραντεβού".to_string(),
            start_time: "2025-03-15T10:00:00Z".parse().unwrap(),
            end_time: "2025-03-15T11:00:00Z".parse().unwrap(),
            color_id: Some("11".to_string()),
            is_cancelled: true,
            is_pending_payment: true,
            attendees: vec!["parent@example.com".to_string()],
        };

        let event: CalendarEvent = req.into();
        assert!(event.is_cancelled);
        assert!(event.is_pending_payment);
        assert!(event.counts_for_billing());
    }

    #[test]
    fn test_period_conversion() {
        let req = ReportPeriodRequest {
            start: "2025-03-01T00:00:00Z".parse().unwrap(),
            end: "2025-04-01T00:00:00Z".parse().unwrap(),
        };

        let period: ReportPeriod = req.into();
        assert!(period.is_valid());
    }
}
