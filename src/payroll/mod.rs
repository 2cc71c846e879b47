//! Payroll calculation for attributed sessions.
//!
//! This module prices attributed calendar events into per-client and
//! supervision report lines with cent-rounded totals. Attribution itself
//! happens in the resolution layer; everything here is pure arithmetic
//! over the buckets it receives.

mod calculator;
mod money;

pub use calculator::calculate_payroll;
pub use money::round_currency;
