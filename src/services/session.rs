//! Session state
//!
//! A `Session` is an immutable snapshot of everything the user has entered:
//! the transaction list and the category budgets. Every action returns a new
//! snapshot and leaves the old one untouched; the caller holds the single
//! binding and replaces it wholesale. Nothing is persisted.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{SpendError, SpendResult};
use crate::models::{BudgetMap, BudgetStatus, Category, Money, Transaction, TransactionDraft};
use crate::reports::aggregate;
use crate::reports::SpendingSummary;

/// The transactions and budgets of one session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    transactions: Vec<Transaction>,
    budgets: BudgetMap,
}

impl Session {
    /// An empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Category budgets
    pub fn budgets(&self) -> &BudgetMap {
        &self.budgets
    }

    /// Check if no transactions have been added
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Append a transaction
    pub fn add_transaction(&self, txn: Transaction) -> SpendResult<Self> {
        if let Err(e) = txn.validate() {
            warn!(error = %e, "rejected transaction");
            return Err(e.into());
        }

        debug!(
            amount = txn.amount.cents(),
            date = %txn.date,
            category = %txn.category,
            "adding transaction"
        );

        let mut transactions = self.transactions.clone();
        transactions.push(txn);
        Ok(Self {
            transactions,
            budgets: self.budgets.clone(),
        })
    }

    /// Parse raw form input and append the resulting transaction
    pub fn add_draft(&self, draft: &TransactionDraft) -> SpendResult<Self> {
        let txn = draft.into_transaction().inspect_err(|e| {
            warn!(error = %e, "rejected transaction input");
        })?;
        self.add_transaction(txn)
    }

    /// Remove the transaction at `index`
    pub fn delete_transaction(&self, index: usize) -> SpendResult<Self> {
        if index >= self.transactions.len() {
            return Err(SpendError::transaction_not_found(format!(
                "#{} (session has {})",
                index,
                self.transactions.len()
            )));
        }

        debug!(index, "deleting transaction");

        let transactions = self
            .transactions
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, txn)| txn.clone())
            .collect();
        Ok(Self {
            transactions,
            budgets: self.budgets.clone(),
        })
    }

    /// Set or replace the budget for a category
    pub fn set_budget(&self, category: Category, amount: Money) -> SpendResult<Self> {
        let mut budgets = self.budgets.clone();
        budgets.set(category, amount)?;

        debug!(%category, amount = amount.cents(), "budget set");

        Ok(Self {
            transactions: self.transactions.clone(),
            budgets,
        })
    }

    /// Parse a typed budget amount and set it
    pub fn set_budget_from_input(&self, category: Category, amount: &str) -> SpendResult<Self> {
        let amount = Money::parse(amount).map_err(|e| SpendError::Validation(e.to_string()))?;
        self.set_budget(category, amount)
    }

    /// Remove the budget for a category, leaving it with no limit
    pub fn clear_budget(&self, category: Category) -> Self {
        let mut budgets = self.budgets.clone();
        if budgets.remove(category).is_some() {
            debug!(%category, "budget cleared");
        }

        Self {
            transactions: self.transactions.clone(),
            budgets,
        }
    }

    /// Budget status for one category, `None` when it has no budget
    pub fn budget_status(&self, category: Category) -> Option<BudgetStatus> {
        let totals = aggregate::category_totals(&self.transactions);
        aggregate::budget_status(category, &totals, &self.budgets)
    }

    /// Every derived view of this session
    pub fn summary(&self) -> SpendingSummary {
        SpendingSummary::generate(&self.transactions, &self.budgets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn txn(cents: i64, date: &str, category: Category) -> Transaction {
        Transaction::new(
            Money::from_cents(cents),
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            "Test expense",
            category,
        )
    }

    fn populated() -> Session {
        Session::new()
            .add_transaction(txn(10000, "2024-01-05", Category::Food))
            .unwrap()
            .add_transaction(txn(5000, "2024-01-20", Category::Travel))
            .unwrap()
            .add_transaction(txn(7500, "2024-02-01", Category::Food))
            .unwrap()
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert!(session.is_empty());
        assert!(session.budgets().is_empty());

        let summary = session.summary();
        assert_eq!(summary.total_spent, Money::zero());
        assert_eq!(summary.top_category, None);
    }

    #[test]
    fn test_add_leaves_previous_snapshot_untouched() {
        let empty = Session::new();
        let one = empty
            .add_transaction(txn(100, "2024-01-01", Category::Food))
            .unwrap();

        assert!(empty.is_empty());
        assert_eq!(one.transactions().len(), 1);
    }

    #[test]
    fn test_add_rejects_invalid_transaction() {
        let err = Session::new()
            .add_transaction(txn(-100, "2024-01-01", Category::Food))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_add_draft() {
        let session = Session::new()
            .add_draft(&TransactionDraft::new("12.50", "2024-04-02", "Cinema", "Other"))
            .unwrap();
        assert_eq!(session.transactions()[0].amount, Money::from_cents(1250));

        let err = session
            .add_draft(&TransactionDraft::new("12.50", "", "Cinema", "Other"))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_add_draft_rejects_overflowing_amounts() {
        let huge = TransactionDraft::new("92233720368547758", "2024-01-05", "Lottery", "Food");
        let session = Session::new();

        assert!(session.add_draft(&huge).unwrap_err().is_validation());
        assert!(session.is_empty());
        assert_eq!(session.summary().total_spent, Money::zero());
    }

    #[test]
    fn test_delete_by_position() {
        let session = populated();
        let after = session.delete_transaction(1).unwrap();

        assert_eq!(after.transactions().len(), 2);
        assert!(after.transactions().iter().all(|t| t.category == Category::Food));
        assert_eq!(session.transactions().len(), 3);
    }

    #[test]
    fn test_delete_out_of_range() {
        let err = populated().delete_transaction(3).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_then_readd_restores_totals() {
        let session = populated();
        let before = session.summary();

        let removed = session.transactions()[0].clone();
        let after = session
            .delete_transaction(0)
            .unwrap()
            .add_transaction(removed)
            .unwrap();
        let summary = after.summary();

        assert_eq!(summary.total_spent, before.total_spent);
        assert_eq!(summary.monthly_totals, before.monthly_totals);
        for category in Category::ALL {
            assert_eq!(
                summary.category_totals.get(category),
                before.category_totals.get(category)
            );
        }
    }

    #[test]
    fn test_budgets() {
        let session = populated()
            .set_budget(Category::Food, Money::from_cents(15000))
            .unwrap();
        assert_eq!(session.budget_status(Category::Food), Some(BudgetStatus::OverBudget));
        assert_eq!(session.budget_status(Category::Travel), None);

        let session = session.set_budget_from_input(Category::Food, "200").unwrap();
        assert_eq!(session.budget_status(Category::Food), Some(BudgetStatus::UnderBudget));

        let session = session.clear_budget(Category::Food);
        assert_eq!(session.budget_status(Category::Food), None);
    }

    #[test]
    fn test_negative_budget_rejected() {
        let err = Session::new()
            .set_budget(Category::Food, Money::from_cents(-1))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: Budget amount cannot be negative");

        let err = Session::new()
            .set_budget_from_input(Category::Bills, "-5")
            .unwrap_err();
        assert!(err.is_validation());

        let err = Session::new()
            .set_budget_from_input(Category::Bills, "lots")
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_budget_survives_transaction_changes() {
        let session = Session::new()
            .set_budget(Category::Shopping, Money::from_cents(5000))
            .unwrap()
            .add_transaction(txn(100, "2024-01-01", Category::Food))
            .unwrap()
            .delete_transaction(0)
            .unwrap();

        assert_eq!(session.budgets().get(Category::Shopping), Some(Money::from_cents(5000)));
        assert_eq!(
            session.budget_status(Category::Shopping),
            Some(BudgetStatus::UnderBudget)
        );
    }
}
