//! Service layer for SpendWise
//!
//! Session actions that take user input and produce new snapshots.

pub mod session;

pub use session::Session;
