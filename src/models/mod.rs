//! Core data models for SpendWise
//!
//! Transactions, categories, month keys, budgets and the money type they
//! are all measured in.

pub mod budget;
pub mod category;
pub mod money;
pub mod month;
pub mod transaction;

pub use budget::{BudgetLine, BudgetMap, BudgetStatus};
pub use category::Category;
pub use money::Money;
pub use month::MonthKey;
pub use transaction::{Transaction, TransactionDraft};
