//! Spending categories
//!
//! Categories form a fixed set. Every transaction belongs to exactly one of
//! them; records created before categories existed fall back to `Other`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A spending category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    Food,
    Travel,
    Shopping,
    Bills,
    #[default]
    Other,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Travel,
        Category::Shopping,
        Category::Bills,
        Category::Other,
    ];

    /// Display name, also accepted by `FromStr`
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Travel => "Travel",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    /// Case-insensitive match on the category name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CategoryParseError::Unknown(s.to_string()))
    }
}

/// Error returned when a category name is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    Unknown(String),
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(name) => write!(
                f,
                "Unknown category '{}' (expected one of Food, Travel, Shopping, Bills, Other)",
                name
            ),
        }
    }
}

impl std::error::Error for CategoryParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" TRAVEL ".parse::<Category>().unwrap(), Category::Travel);
        assert_eq!("Bills".parse::<Category>().unwrap(), Category::Bills);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Groceries".parse::<Category>().unwrap_err();
        assert_eq!(err, CategoryParseError::Unknown("Groceries".into()));
    }

    #[test]
    fn test_display_matches_name() {
        for category in Category::ALL {
            assert_eq!(category.to_string(), category.name());
            assert_eq!(category.name().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_default_is_other() {
        assert_eq!(Category::default(), Category::Other);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Category::Shopping).unwrap();
        assert_eq!(json, "\"Shopping\"");
    }
}
