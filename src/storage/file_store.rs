//! Flat-file implementation of `BudgetStore`
//!
//! Income lives in `income.txt` as a single decimal amount. Expenses live in
//! `expenses.csv` with one header row of category names and one data row of
//! amounts. Both files are overwritten wholesale on save.

use crate::config::paths::BudgetPaths;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Category, ExpenseRecord, Money};

use super::file_io::{read_optional, write_atomic};
use super::BudgetStore;

/// Flat-file store rooted at the budgetscope data directory
pub struct FileStore {
    paths: BudgetPaths,
}

impl FileStore {
    /// Create a new FileStore, ensuring the data directory exists
    pub fn new(paths: BudgetPaths) -> BudgetResult<Self> {
        paths.ensure_directories()?;
        Ok(Self { paths })
    }

    /// Format an amount as a bare decimal ("1700.00") for the data files
    fn format_amount(amount: Money) -> String {
        format!("{}.{:02}", amount.dollars(), amount.cents_part())
    }

    fn parse_amount(s: &str) -> BudgetResult<Money> {
        Money::parse(s)
            .map_err(|e| BudgetError::Storage(format!("Malformed amount in data file: {}", e)))
    }
}

impl BudgetStore for FileStore {
    fn save_income(&self, income: Money) -> BudgetResult<()> {
        write_atomic(self.paths.income_file(), &Self::format_amount(income))
    }

    fn load_income(&self) -> BudgetResult<Option<Money>> {
        match read_optional(self.paths.income_file())? {
            Some(contents) => Self::parse_amount(contents.trim()).map(Some),
            None => Ok(None),
        }
    }

    fn save_expenses(&self, record: &ExpenseRecord) -> BudgetResult<()> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer.write_record(Category::ALL.iter().map(Category::name))?;
        writer.write_record(
            Category::ALL
                .iter()
                .map(|c| Self::format_amount(record.get(*c))),
        )?;

        let bytes = writer
            .into_inner()
            .map_err(|e| BudgetError::Storage(format!("Failed to flush CSV data: {}", e)))?;
        let contents = String::from_utf8(bytes)
            .map_err(|e| BudgetError::Storage(format!("CSV data was not valid UTF-8: {}", e)))?;

        write_atomic(self.paths.expenses_file(), &contents)
    }

    fn load_expenses(&self) -> BudgetResult<Option<ExpenseRecord>> {
        let contents = match read_optional(self.paths.expenses_file())? {
            Some(contents) => contents,
            None => return Ok(None),
        };

        let mut reader = csv::Reader::from_reader(contents.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| BudgetError::Storage(format!("Malformed expense file: {}", e)))?
            .clone();

        let row = reader
            .records()
            .next()
            .ok_or_else(|| BudgetError::Storage("Expense file has no data row".into()))?
            .map_err(|e| BudgetError::Storage(format!("Malformed expense file: {}", e)))?;

        let mut record = ExpenseRecord::new();
        for (name, value) in headers.iter().zip(row.iter()) {
            let category: Category = name
                .parse()
                .map_err(|e| BudgetError::Storage(format!("Malformed expense file: {}", e)))?;
            record.set(category, Self::parse_amount(value)?);
        }

        Ok(Some(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store() -> (TempDir, FileStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = FileStore::new(paths).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_income_round_trip() {
        let (_temp_dir, store) = test_store();

        assert!(store.load_income().unwrap().is_none());

        store.save_income(Money::from_cents(300000)).unwrap();
        assert_eq!(store.load_income().unwrap(), Some(Money::from_cents(300000)));
    }

    #[test]
    fn test_income_last_write_wins() {
        let (_temp_dir, store) = test_store();

        store.save_income(Money::from_cents(300000)).unwrap();
        store.save_income(Money::from_cents(250050)).unwrap();

        assert_eq!(store.load_income().unwrap(), Some(Money::from_cents(250050)));
    }

    #[test]
    fn test_expenses_round_trip() {
        let (_temp_dir, store) = test_store();

        assert!(store.load_expenses().unwrap().is_none());

        let mut record = ExpenseRecord::new();
        record.set(Category::Rent, Money::from_cents(100000));
        record.set(Category::Utilities, Money::from_cents(20000));
        record.set(Category::Groceries, Money::from_cents(30000));
        record.set(Category::Transportation, Money::from_cents(10000));
        record.set(Category::Entertainment, Money::from_cents(5000));
        record.set(Category::Others, Money::from_cents(5000));

        store.save_expenses(&record).unwrap();

        let loaded = store.load_expenses().unwrap().unwrap();
        assert_eq!(loaded, record);
        assert_eq!(loaded.total().cents(), 170000);
    }

    #[test]
    fn test_expenses_file_has_header_row() {
        let (temp_dir, store) = test_store();

        store.save_expenses(&ExpenseRecord::new()).unwrap();

        let contents = std::fs::read_to_string(
            temp_dir.path().join("data").join("expenses.csv"),
        )
        .unwrap();
        let first_line = contents.lines().next().unwrap();
        assert_eq!(
            first_line,
            "Rent,Utilities,Groceries,Transportation,Entertainment,Others"
        );
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_malformed_income_is_an_error() {
        let (temp_dir, store) = test_store();

        let income_path = temp_dir.path().join("data").join("income.txt");
        std::fs::create_dir_all(income_path.parent().unwrap()).unwrap();
        std::fs::write(&income_path, "not a number").unwrap();

        assert!(store.load_income().is_err());
    }

    #[test]
    fn test_expense_overwrite_replaces_whole_record() {
        let (_temp_dir, store) = test_store();

        let mut first = ExpenseRecord::new();
        first.set(Category::Rent, Money::from_cents(100000));
        first.set(Category::Groceries, Money::from_cents(40000));
        store.save_expenses(&first).unwrap();

        let mut second = ExpenseRecord::new();
        second.set(Category::Entertainment, Money::from_cents(2500));
        store.save_expenses(&second).unwrap();

        let loaded = store.load_expenses().unwrap().unwrap();
        assert!(loaded.get(Category::Rent).is_zero());
        assert_eq!(loaded.get(Category::Entertainment).cents(), 2500);
    }
}
