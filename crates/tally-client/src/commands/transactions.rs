use crate::ClientResult;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{CategoriesData, TransactionRow, TransactionsData};
use crate::ledger::{ALL_CATEGORY, Snapshot, Transaction};

/// With a category, lists that category's transactions (`"All"` lists every
/// transaction). Without one, lists the known categories instead.
pub fn run(snapshot: &Snapshot, category: Option<&str>) -> ClientResult<SuccessEnvelope> {
    let Some(category) = category else {
        return categories(snapshot, "transactions");
    };

    let rows = snapshot.transactions_in(category)?;
    let data = TransactionsData {
        category: category.to_string(),
        count: rows.len(),
        rows: rows.iter().map(transaction_row).collect(),
    };
    success("transactions", data)
}

/// Shared category listing for `transactions` and `total` invoked without an
/// argument. `command` names the subcommand to rerun with a label.
pub(crate) fn categories(snapshot: &Snapshot, command: &str) -> ClientResult<SuccessEnvelope> {
    let mut categories = snapshot.categories();
    categories.push(ALL_CATEGORY.to_string());
    success(
        "categories",
        CategoriesData {
            command: command.to_string(),
            categories,
        },
    )
}

pub(crate) fn transaction_row(transaction: &Transaction) -> TransactionRow {
    TransactionRow {
        date: transaction.date.format("%Y-%m-%d").to_string(),
        company: transaction.company.clone(),
        ledger: transaction.ledger.clone(),
        amount: transaction.amount,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::run;
    use crate::ledger::{Snapshot, Transaction};

    fn snapshot() -> Snapshot {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1);
        assert!(date.is_some());
        let transactions = HashSet::from([
            Transaction {
                amount: dec!(10),
                company: "Corner Shop".to_string(),
                date: date.unwrap_or_default(),
                ledger: "Food".to_string(),
            },
            Transaction {
                amount: dec!(-3),
                company: "Ferry".to_string(),
                date: date.unwrap_or_default(),
                ledger: "Travel".to_string(),
            },
        ]);
        Snapshot::from_transactions(transactions)
    }

    #[test]
    fn missing_category_lists_categories_with_the_sentinel_last() {
        let envelope = run(&snapshot(), None);
        assert!(envelope.is_ok());
        if let Ok(success) = envelope {
            assert_eq!(success.command, "categories");
            assert_eq!(success.data["command"], "transactions");
            assert_eq!(
                success.data["categories"],
                serde_json::json!(["Food", "Travel", "All"])
            );
        }
    }

    #[test]
    fn category_listing_returns_rows_and_count() {
        let envelope = run(&snapshot(), Some("Food"));
        assert!(envelope.is_ok());
        if let Ok(success) = envelope {
            assert_eq!(success.command, "transactions");
            assert_eq!(success.data["category"], "Food");
            assert_eq!(success.data["count"], 1);
            assert_eq!(success.data["rows"][0]["company"], "Corner Shop");
            assert_eq!(success.data["rows"][0]["date"], "2020-01-01");
            assert_eq!(success.data["rows"][0]["amount"], "10");
        }
    }

    #[test]
    fn all_returns_every_transaction() {
        let envelope = run(&snapshot(), Some("All"));
        assert!(envelope.is_ok());
        if let Ok(success) = envelope {
            assert_eq!(success.data["count"], 2);
        }
    }

    #[test]
    fn unknown_category_propagates_the_error() {
        let result = run(&snapshot(), Some("Utilities"));
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "unknown_category");
        }
    }
}
