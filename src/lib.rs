//! Practice Engine for therapy session reconciliation
//!
//! This crate matches calendar events against a speech therapy practice's
//! client roster and produces per-employee payroll reports, surfacing
//! ambiguous matches for human confirmation instead of guessing.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod matching;
pub mod models;
pub mod payroll;
pub mod resolution;
pub mod store;
