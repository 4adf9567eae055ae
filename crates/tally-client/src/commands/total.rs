use crate::ClientResult;
use crate::commands::transactions::categories;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::TotalData;
use crate::ledger::Snapshot;

/// With a category, reports its summed balance (`"All"` reports the grand
/// total). Without one, lists the known categories.
pub fn run(snapshot: &Snapshot, category: Option<&str>) -> ClientResult<SuccessEnvelope> {
    let Some(category) = category else {
        return categories(snapshot, "total");
    };

    let total = snapshot.total_balance(category)?;
    success(
        "total",
        TotalData {
            category: category.to_string(),
            total,
        },
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::run;
    use crate::ledger::{Snapshot, Transaction};

    fn snapshot() -> Snapshot {
        let date = NaiveDate::from_ymd_opt(2020, 3, 14);
        assert!(date.is_some());
        let transactions = HashSet::from([
            Transaction {
                amount: dec!(20.40),
                company: "Grocer".to_string(),
                date: date.unwrap_or_default(),
                ledger: "Food".to_string(),
            },
            Transaction {
                amount: dec!(-8.15),
                company: "Bus".to_string(),
                date: date.unwrap_or_default(),
                ledger: "Travel".to_string(),
            },
        ]);
        Snapshot::from_transactions(transactions)
    }

    #[test]
    fn category_total_is_reported() {
        let envelope = run(&snapshot(), Some("Travel"));
        assert!(envelope.is_ok());
        if let Ok(success) = envelope {
            assert_eq!(success.command, "total");
            assert_eq!(success.data["category"], "Travel");
            assert_eq!(success.data["total"], "-8.15");
        }
    }

    #[test]
    fn all_reports_the_grand_total() {
        let envelope = run(&snapshot(), Some("All"));
        assert!(envelope.is_ok());
        if let Ok(success) = envelope {
            assert_eq!(success.data["total"], "12.25");
        }
    }

    #[test]
    fn missing_category_lists_categories_for_the_total_command() {
        let envelope = run(&snapshot(), None);
        assert!(envelope.is_ok());
        if let Ok(success) = envelope {
            assert_eq!(success.command, "categories");
            assert_eq!(success.data["command"], "total");
        }
    }

    #[test]
    fn unknown_category_is_an_error() {
        let result = run(&snapshot(), Some("Rent"));
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "unknown_category");
        }
    }
}
