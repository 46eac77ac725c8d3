//! SpendWise - in-memory personal expense tracking
//!
//! This library provides the core of the SpendWise expense tracker: users
//! record expenses, set per-category budgets and view aggregate spending.
//! All state lives in memory for one session; nothing is persisted.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Display and logging settings
//! - `error`: Custom error types
//! - `logging`: `tracing` subscriber setup
//! - `models`: Core data models (transactions, categories, budgets, money)
//! - `reports`: The aggregation engine and spending summary
//! - `services`: Session actions (add, delete, budget)
//!
//! # Example
//!
//! ```rust
//! use spendwise::models::{Category, Money, TransactionDraft};
//! use spendwise::services::Session;
//!
//! let session = Session::new()
//!     .add_draft(&TransactionDraft::new("100", "2024-01-05", "Groceries", "Food"))?
//!     .add_draft(&TransactionDraft::new("50", "2024-01-20", "Train", "Travel"))?
//!     .set_budget(Category::Food, Money::from_cents(15000))?;
//!
//! let summary = session.summary();
//! assert_eq!(summary.total_spent, Money::from_cents(15000));
//! assert_eq!(summary.top_category, Some(Category::Food));
//! # Ok::<(), spendwise::SpendError>(())
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{SpendError, SpendResult};
