//! Client model with per-session pricing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A client on an employee's roster.
///
/// Each client carries a per-session price and its split between the
/// employee and the company. The split is configured by the practice
/// manager and is not recomputed here.
///
/// # Examples
///
/// ```
/// use practice_engine::models::Client;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let client = Client {
///     id: "cl-001".to_string(),
///     name: "Μαρία Παπαδάκη".to_string(),
///     price: Decimal::from_str("50.00").unwrap(),
///     employee_price: Decimal::from_str("22.50").unwrap(),
///     company_price: Decimal::from_str("27.50").unwrap(),
///     employee_id: "emp-001".to_string(),
///     pending_payment_allowed: false,
/// };
///
/// assert!(client.has_valid_price_split());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Unique client identifier
    pub id: String,

    /// Client display name as entered by the practice
    pub name: String,

    /// Price charged per session
    pub price: Decimal,

    /// Portion of the session price paid to the employee
    pub employee_price: Decimal,

    /// Portion of the session price retained by the company
    pub company_price: Decimal,

    /// Identifier of the employee this client is assigned to
    pub employee_id: String,

    /// Whether cancelled sessions for this client may be billed as pending
    #[serde(default)]
    pub pending_payment_allowed: bool,
}

impl Client {
    /// Checks whether the employee and company portions add up to the
    /// session price, within a one-cent tolerance.
    ///
    /// This is a data-quality signal for practice administration screens.
    /// Payroll calculation uses the configured portions as-is.
    ///
    /// # Returns
    ///
    /// `true` if `employee_price + company_price` is within one cent of `price`
    pub fn has_valid_price_split(&self) -> bool {
        let tolerance = Decimal::new(1, 2);
        let difference = self.price - (self.employee_price + self.company_price);
        difference.abs() <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_client(price: &str, employee_price: &str, company_price: &str) -> Client {
        Client {
            id: "cl-test".to_string(),
            name: "Ζωή Κουσουλού".to_string(),
            price: dec(price),
            employee_price: dec(employee_price),
            company_price: dec(company_price),
            employee_id: "emp-001".to_string(),
            pending_payment_allowed: false,
        }
    }

    /// CL-001: Exact split is valid
    #[test]
    fn test_exact_price_split_is_valid() {
        let client = create_test_client("50.00", "22.50", "27.50");
        assert!(client.has_valid_price_split());
    }

    /// CL-002: Split off by exactly one cent is still valid
    #[test]
    fn test_one_cent_gap_is_within_tolerance() {
        let client = create_test_client("50.00", "22.50", "27.49");
        assert!(client.has_valid_price_split());
    }

    /// CL-003: Split off by more than one cent is invalid
    #[test]
    fn test_two_cent_gap_is_invalid() {
        let client = create_test_client("50.00", "22.50", "27.48");
        assert!(!client.has_valid_price_split());
    }

    /// CL-004: Overshooting split is measured by absolute difference
    #[test]
    fn test_overshooting_split_is_invalid() {
        let client = create_test_client("50.00", "30.00", "25.00");
        assert!(!client.has_valid_price_split());
    }

    /// CL-005: Serialization round trip preserves pricing
    #[test]
    fn test_client_serialization_round_trip() {
        let client = create_test_client("45.00", "20.00", "25.00");

        let json = serde_json::to_string(&client).unwrap();
        let deserialized: Client = serde_json::from_str(&json).unwrap();

        assert_eq!(client, deserialized);
    }

    /// CL-006: Pending payment flag defaults to false
    #[test]
    fn test_pending_payment_allowed_defaults_to_false() {
        let json = r#"{
            "id": "cl-9",
            "name": "Ndrekaj Ornela - Ντρεκαι Ορνελα",
            "price": "40.00",
            "employee_price": "18.00",
            "company_price": "22.00",
            "employee_id": "emp-002"
        }"#;

        let client: Client = serde_json::from_str(json).unwrap();

        assert!(!client.pending_payment_allowed);
        assert_eq!(client.price, dec("40.00"));
    }
}
