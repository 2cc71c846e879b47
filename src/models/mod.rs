//! Core data models for the Practice Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod client;
mod confirmation;
mod employee;
mod event;
mod period;
mod report;

pub use client::Client;
pub use confirmation::{Confirmation, MatchDecision};
pub use employee::Employee;
pub use event::CalendarEvent;
pub use period::ReportPeriod;
pub use report::{PayrollEntry, PayrollReport, ReportSummary, SupervisionEntry};
