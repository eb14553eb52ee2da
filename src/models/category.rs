//! Expense categories
//!
//! The six fixed expense buckets used throughout the application. The set is
//! closed: every expense record carries exactly one amount per category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six fixed expense buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Rent,
    Utilities,
    Groceries,
    Transportation,
    Entertainment,
    Others,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 6] = [
        Category::Rent,
        Category::Utilities,
        Category::Groceries,
        Category::Transportation,
        Category::Entertainment,
        Category::Others,
    ];

    /// The category name as it appears in headers and the UI
    pub const fn name(&self) -> &'static str {
        match self {
            Category::Rent => "Rent",
            Category::Utilities => "Utilities",
            Category::Groceries => "Groceries",
            Category::Transportation => "Transportation",
            Category::Entertainment => "Entertainment",
            Category::Others => "Others",
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

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Rent" => Ok(Category::Rent),
            "Utilities" => Ok(Category::Utilities),
            "Groceries" => Ok(Category::Groceries),
            "Transportation" => Ok(Category::Transportation),
            "Entertainment" => Ok(Category::Entertainment),
            "Others" => Ok(Category::Others),
            other => Err(CategoryParseError(other.to_string())),
        }
    }
}

/// Error for unknown category names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown expense category: {}", self.0)
    }
}

impl std::error::Error for CategoryParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_has_six_categories() {
        assert_eq!(Category::ALL.len(), 6);
    }

    #[test]
    fn test_display_round_trip() {
        for category in Category::ALL {
            let parsed: Category = category.name().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Vacations".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown expense category: Vacations");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(" Rent ".parse::<Category>().unwrap(), Category::Rent);
    }
}
