//! Reporting module
//!
//! Read-side aggregation over clicks and conversions.

pub mod service;

pub use service::{summarize, AffiliateSummary, SummaryService};
