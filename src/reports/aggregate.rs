//! Aggregation engine
//!
//! Pure functions deriving read-only views from a transaction list and a
//! budget map. Nothing here keeps state between calls, mutates its inputs
//! or fails: every view is recomputed from the current snapshot.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{BudgetLine, BudgetMap, BudgetStatus, Category, Money, MonthKey, Transaction};

/// Spending per category
///
/// Only categories with at least one transaction are present. Iteration
/// follows the order in which each category first appears in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotals(Vec<(Category, Money)>);

impl CategoryTotals {
    /// Total for a category, `None` when it has no transactions
    pub fn get(&self, category: Category) -> Option<Money> {
        self.0
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, total)| *total)
    }

    /// Total for a category, treating "no transactions" as zero
    pub fn spent(&self, category: Category) -> Money {
        self.get(category).unwrap_or_default()
    }

    /// Categories and their totals, in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        self.0.iter().copied()
    }

    /// Number of categories with at least one transaction
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no transactions at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum across every category
    pub fn total(&self) -> Money {
        self.0.iter().map(|(_, m)| *m).sum()
    }

    fn add(&mut self, category: Category, amount: Money) {
        match self.0.iter_mut().find(|(c, _)| *c == category) {
            Some((_, total)) => *total += amount,
            None => self.0.push((category, amount)),
        }
    }
}

/// Spending per calendar month, iterated chronologically
pub type MonthlyTotals = BTreeMap<MonthKey, Money>;

/// Sum of every transaction amount
pub fn total_spent(transactions: &[Transaction]) -> Money {
    transactions.iter().map(|t| t.amount).sum()
}

/// Sum of amounts per category, absent categories left out
pub fn category_totals(transactions: &[Transaction]) -> CategoryTotals {
    let mut totals = CategoryTotals::default();
    for txn in transactions {
        totals.add(txn.category, txn.amount);
    }
    totals
}

/// The category with the highest total
///
/// Ties keep whichever category appeared first in the transaction list.
pub fn top_category(totals: &CategoryTotals) -> Option<Category> {
    let mut leader: Option<(Category, Money)> = None;
    for (category, total) in totals.iter() {
        match leader {
            Some((_, best)) if total <= best => {}
            _ => leader = Some((category, total)),
        }
    }
    leader.map(|(category, _)| category)
}

/// Sum of amounts per calendar month
pub fn monthly_totals(transactions: &[Transaction]) -> MonthlyTotals {
    let mut totals = MonthlyTotals::new();
    for txn in transactions {
        *totals.entry(txn.month()).or_default() += txn.amount;
    }
    totals
}

/// The transaction with the latest date
///
/// Among transactions sharing the latest date, the one inserted last wins.
pub fn most_recent(transactions: &[Transaction]) -> Option<&Transaction> {
    transactions
        .iter()
        .fold(None, |latest: Option<&Transaction>, txn| match latest {
            Some(current) if txn.date < current.date => Some(current),
            _ => Some(txn),
        })
}

/// Budget status for one category, `None` when the category has no budget
pub fn budget_status(
    category: Category,
    totals: &CategoryTotals,
    budgets: &BudgetMap,
) -> Option<BudgetStatus> {
    budgets
        .get(category)
        .map(|budget| BudgetStatus::classify(totals.spent(category), budget))
}

/// One line per budgeted category, in `Category::ALL` order
pub fn budget_lines(totals: &CategoryTotals, budgets: &BudgetMap) -> Vec<BudgetLine> {
    budgets
        .iter()
        .map(|(category, budget)| BudgetLine::new(category, budget, totals.spent(category)))
        .collect()
}
