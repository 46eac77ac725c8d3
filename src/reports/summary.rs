//! Spending Summary
//!
//! Bundles every derived view of a session into one snapshot, plus the
//! series a chart needs (monthly bars, category shares).

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use super::aggregate::{self, CategoryTotals, MonthlyTotals};
use crate::config::Settings;
use crate::models::transaction::DATE_FORMAT;
use crate::models::{BudgetLine, BudgetMap, Category, Money, MonthKey, Transaction};

/// One bar of the monthly spending chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub month: MonthKey,
    pub amount: Money,
}

/// One slice of the category breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: Category,
    pub amount: Money,
    /// Share of total spending, 0-100
    pub percentage: f64,
}

/// Every derived view for a transaction list and budget map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingSummary {
    pub total_spent: Money,
    pub transaction_count: usize,
    pub category_totals: CategoryTotals,
    pub monthly_totals: MonthlyTotals,
    pub top_category: Option<Category>,
    pub most_recent: Option<Transaction>,
    pub budget_lines: Vec<BudgetLine>,
}

impl SpendingSummary {
    /// Compute every view in one pass over the inputs
    pub fn generate(transactions: &[Transaction], budgets: &BudgetMap) -> Self {
        let category_totals = aggregate::category_totals(transactions);
        let top_category = aggregate::top_category(&category_totals);
        let budget_lines = aggregate::budget_lines(&category_totals, budgets);

        Self {
            total_spent: aggregate::total_spent(transactions),
            transaction_count: transactions.len(),
            monthly_totals: aggregate::monthly_totals(transactions),
            most_recent: aggregate::most_recent(transactions).cloned(),
            category_totals,
            top_category,
            budget_lines,
        }
    }

    /// Monthly totals as chart points, oldest month first
    pub fn monthly_series(&self) -> Vec<MonthlyPoint> {
        self.monthly_totals
            .iter()
            .map(|(month, amount)| MonthlyPoint {
                month: *month,
                amount: *amount,
            })
            .collect()
    }

    /// Category totals with their share of total spending
    pub fn category_breakdown(&self) -> Vec<CategoryShare> {
        self.category_totals
            .iter()
            .map(|(category, amount)| CategoryShare {
                category,
                amount,
                percentage: if self.total_spent.is_zero() {
                    0.0
                } else {
                    amount.as_f64() / self.total_spent.as_f64() * 100.0
                },
            })
            .collect()
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let symbol = settings.currency_symbol.as_str();
        let mut output = String::new();

        output.push_str("Spending Summary\n");
        output.push_str(&"=".repeat(48));
        output.push('\n');
        output.push_str(&format!(
            "Total Spent: {}\n",
            self.total_spent.format_with_symbol(symbol)
        ));
        output.push_str(&format!("Transactions: {}\n", self.transaction_count));

        if let Some(category) = self.top_category {
            output.push_str(&format!("Top Category: {}\n", category));
        }
        if let Some(txn) = &self.most_recent {
            let mut date = String::new();
            if write!(date, "{}", txn.date.format(&settings.date_format)).is_err() {
                date = txn.date.format(DATE_FORMAT).to_string();
            }
            output.push_str(&format!(
                "Most Recent: {} {} ({})\n",
                date,
                txn.amount.format_with_symbol(symbol),
                txn.description
            ));
        }

        if self.transaction_count == 0 {
            output.push_str("\nNo transactions yet.\n");
        } else {
            output.push_str(&format!("\n{:<20} {:>14} {:>8}\n", "Category", "Amount", "%"));
            output.push_str(&"-".repeat(48));
            output.push('\n');
            for share in self.category_breakdown() {
                output.push_str(&format!(
                    "{:<20} {:>14} {:>7.1}%\n",
                    share.category.name(),
                    share.amount.format_with_symbol(symbol),
                    share.percentage
                ));
            }

            output.push_str(&format!("\n{:<20} {:>14}\n", "Month", "Amount"));
            output.push_str(&"-".repeat(48));
            output.push('\n');
            for point in self.monthly_series() {
                output.push_str(&format!(
                    "{:<20} {:>14}\n",
                    point.month.to_string(),
                    point.amount.format_with_symbol(symbol)
                ));
            }
        }

        if !self.budget_lines.is_empty() {
            output.push_str(&format!(
                "\n{:<12} {:>12} {:>12} {:>12}  {}\n",
                "Budget", "Limit", "Spent", "Remaining", "Status"
            ));
            output.push_str(&"-".repeat(66));
            output.push('\n');
            for line in &self.budget_lines {
                output.push_str(&format!(
                    "{:<12} {:>12} {:>12} {:>12}  {}\n",
                    line.category.name(),
                    line.budget.format_with_symbol(symbol),
                    line.spent.format_with_symbol(symbol),
                    line.remaining.format_with_symbol(symbol),
                    line.status
                ));
            }
        }

        output
    }
}
