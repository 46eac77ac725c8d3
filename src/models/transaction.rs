//! Transaction model
//!
//! A transaction is one user-entered expense. It is immutable once created:
//! the session removes records by position and never edits them in place.
//! `TransactionDraft` is the raw form input that becomes a `Transaction`
//! once every field has been checked.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;
use super::month::MonthKey;
use crate::error::{SpendError, SpendResult};

/// Date format accepted at the input boundary
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest amount a single transaction may carry (one billion units)
pub const MAX_AMOUNT: Money = Money::from_cents(100_000_000_000);

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Amount spent (never negative)
    pub amount: Money,

    /// Day the expense happened, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,

    /// Free-text label
    pub description: String,

    /// Spending category; records without one are treated as `Other`
    #[serde(default)]
    pub category: Category,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        amount: Money,
        date: NaiveDate,
        description: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            amount,
            date,
            description: description.into(),
            category,
        }
    }

    /// The month this transaction is grouped under
    pub fn month(&self) -> MonthKey {
        MonthKey::of(self.date)
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }

        if self.amount > MAX_AMOUNT {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }

        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({}) [{}]",
            self.date.format(DATE_FORMAT),
            self.amount,
            self.description,
            self.category
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
    AmountTooLarge(Money),
    EmptyDescription,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Transaction amount cannot be negative: {}", amount)
            }
            Self::AmountTooLarge(amount) => write!(
                f,
                "Transaction amount {} exceeds the maximum of {}",
                amount, MAX_AMOUNT
            ),
            Self::EmptyDescription => write!(f, "Transaction description cannot be empty"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

/// Raw form input for a new transaction, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub amount: String,
    pub date: String,
    pub description: String,
    pub category: String,
}

impl TransactionDraft {
    /// Create a draft from the raw field values
    pub fn new(
        amount: impl Into<String>,
        date: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            date: date.into(),
            description: description.into(),
            category: category.into(),
        }
    }

    /// Check every field and build the transaction
    ///
    /// A blank field is rejected before anything is parsed. Dates must be
    /// well-formed `YYYY-MM-DD` calendar dates; malformed ones never reach
    /// the aggregation engine.
    pub fn into_transaction(&self) -> SpendResult<Transaction> {
        let fields = [&self.amount, &self.date, &self.description, &self.category];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(SpendError::Validation("Fill all fields".into()));
        }

        let amount =
            Money::parse(&self.amount).map_err(|e| SpendError::Validation(e.to_string()))?;

        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).map_err(|_| {
            SpendError::Validation(format!(
                "Invalid date format: {}. Use YYYY-MM-DD",
                self.date.trim()
            ))
        })?;

        let category = self
            .category
            .parse::<Category>()
            .map_err(|e| SpendError::Validation(e.to_string()))?;

        let txn = Transaction::new(amount, date, self.description.trim(), category);
        txn.validate()?;
        Ok(txn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(
            Money::from_cents(10000),
            date(2024, 1, 5),
            "Groceries",
            Category::Food,
        );
        assert_eq!(txn.amount.cents(), 10000);
        assert_eq!(txn.month().to_string(), "2024-01");
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_validate_negative_amount() {
        let txn = Transaction::new(
            Money::from_cents(-100),
            date(2024, 1, 5),
            "Refund",
            Category::Other,
        );
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::NegativeAmount(Money::from_cents(-100)))
        );
    }

    #[test]
    fn test_validate_amount_limit() {
        let at_limit = Transaction::new(MAX_AMOUNT, date(2024, 1, 5), "Car", Category::Shopping);
        assert!(at_limit.validate().is_ok());

        let over = Transaction::new(
            MAX_AMOUNT + Money::from_cents(1),
            date(2024, 1, 5),
            "Yacht",
            Category::Shopping,
        );
        assert!(matches!(
            over.validate(),
            Err(TransactionValidationError::AmountTooLarge(_))
        ));
    }

    #[test]
    fn test_validate_blank_description() {
        let txn = Transaction::new(Money::from_cents(100), date(2024, 1, 5), "   ", Category::Food);
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::EmptyDescription)
        );
    }

    #[test]
    fn test_display() {
        let txn = Transaction::new(
            Money::from_cents(7500),
            date(2024, 2, 1),
            "Dinner",
            Category::Food,
        );
        assert_eq!(txn.to_string(), "2024-02-01: $75.00 (Dinner) [Food]");
    }

    #[test]
    fn test_deserialize_without_category() {
        let json = r#"{"amount":2500,"date":"2024-03-01","description":"Bus"}"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.category, Category::Other);
        assert_eq!(txn.date, date(2024, 3, 1));
    }

    #[test]
    fn test_serialization() {
        let txn = Transaction::new(
            Money::from_cents(5000),
            date(2024, 1, 20),
            "Train",
            Category::Travel,
        );
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"date\":\"2024-01-20\""));
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, txn);
    }

    #[test]
    fn test_draft_into_transaction() {
        let draft = TransactionDraft::new("100", "2024-01-05", " Lunch ", "food");
        let txn = draft.into_transaction().unwrap();
        assert_eq!(txn.amount, Money::from_cents(10000));
        assert_eq!(txn.date, date(2024, 1, 5));
        assert_eq!(txn.description, "Lunch");
        assert_eq!(txn.category, Category::Food);
    }

    #[test]
    fn test_draft_blank_field() {
        let draft = TransactionDraft::new("100", "", "Lunch", "Food");
        let err = draft.into_transaction().unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: Fill all fields");

        let draft = TransactionDraft::new("100", "2024-01-05", "Lunch", "  ");
        assert!(draft.into_transaction().unwrap_err().is_validation());
    }

    #[test]
    fn test_draft_malformed_date() {
        for bad in ["2024-1", "2024", "05/01/2024", "2024-02-30"] {
            let draft = TransactionDraft::new("10", bad, "Lunch", "Food");
            assert!(draft.into_transaction().unwrap_err().is_validation(), "{bad}");
        }
    }

    #[test]
    fn test_draft_bad_amount_and_category() {
        let draft = TransactionDraft::new("ten", "2024-01-05", "Lunch", "Food");
        assert!(draft.into_transaction().unwrap_err().is_validation());

        let draft = TransactionDraft::new("-10", "2024-01-05", "Lunch", "Food");
        assert!(draft.into_transaction().unwrap_err().is_validation());

        let draft = TransactionDraft::new("10", "2024-01-05", "Lunch", "Rent");
        assert!(draft.into_transaction().unwrap_err().is_validation());
    }

    #[test]
    fn test_draft_rejects_huge_and_sub_cent_amounts() {
        let draft = TransactionDraft::new("92233720368547758", "2024-01-05", "Lunch", "Food");
        assert!(draft.into_transaction().unwrap_err().is_validation());

        let draft = TransactionDraft::new("0.005", "2024-01-05", "Gum", "Food");
        assert!(draft.into_transaction().unwrap_err().is_validation());

        let draft = TransactionDraft::new(".", "2024-01-05", "Gum", "Food");
        assert!(draft.into_transaction().unwrap_err().is_validation());
    }
}
