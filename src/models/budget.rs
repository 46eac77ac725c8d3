//! Category budgets
//!
//! A budget is a spending ceiling for one category. Budgets live
//! independently of transactions: a category may have a budget and no
//! spending, or spending and no budget (no limit).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::category::Category;
use super::money::Money;

/// Budget amounts per category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BudgetMap(BTreeMap<Category, Money>);

impl BudgetMap {
    /// An empty budget map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the budget for a category, replacing any previous amount
    pub fn set(&mut self, category: Category, amount: Money) -> Result<(), BudgetValidationError> {
        if amount.is_negative() {
            return Err(BudgetValidationError::NegativeBudget);
        }
        self.0.insert(category, amount);
        Ok(())
    }

    /// Remove the budget for a category, returning the old amount
    pub fn remove(&mut self, category: Category) -> Option<Money> {
        self.0.remove(&category)
    }

    /// The budget for a category, or `None` when no limit is set
    pub fn get(&self, category: Category) -> Option<Money> {
        self.0.get(&category).copied()
    }

    /// Check if no category has a budget
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of budgeted categories
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Budgeted categories in `Category::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        self.0.iter().map(|(c, m)| (*c, *m))
    }
}

/// Whether a category's spending exceeds its budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    /// Spent strictly more than the budget
    OverBudget,
    /// Spent no more than the budget
    UnderBudget,
}

impl BudgetStatus {
    /// Classify spending against a budget; equality counts as under
    pub fn classify(spent: Money, budget: Money) -> Self {
        if spent > budget {
            Self::OverBudget
        } else {
            Self::UnderBudget
        }
    }

    /// Check if spending exceeded the budget
    pub fn is_over(&self) -> bool {
        matches!(self, Self::OverBudget)
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OverBudget => write!(f, "Over budget"),
            Self::UnderBudget => write!(f, "Under budget"),
        }
    }
}

/// A budgeted category compared with what was spent in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetLine {
    pub category: Category,
    pub budget: Money,
    pub spent: Money,
    /// Budget minus spent; negative when over budget
    pub remaining: Money,
    pub status: BudgetStatus,
}

impl BudgetLine {
    /// Compare spending with a budget
    pub fn new(category: Category, budget: Money, spent: Money) -> Self {
        Self {
            category,
            budget,
            spent,
            remaining: budget - spent,
            status: BudgetStatus::classify(spent, budget),
        }
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeBudget,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeBudget => write!(f, "Budget amount cannot be negative"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
