//! Reports module for SpendWise
//!
//! The aggregation engine and the spending summary built on top of it.

pub mod aggregate;
pub mod summary;

pub use aggregate::{CategoryTotals, MonthlyTotals};
pub use summary::{CategoryShare, MonthlyPoint, SpendingSummary};
