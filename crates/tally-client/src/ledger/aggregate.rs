use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::ledger::{Transaction, sort_transactions};

/// Derived views of the transaction set, computed once per process.
#[derive(Debug, Clone, Default)]
pub struct Aggregates {
    pub total: Decimal,
    pub category_totals: BTreeMap<String, Decimal>,
    pub category_transactions: BTreeMap<String, Vec<Transaction>>,
    pub daily_balances: BTreeMap<NaiveDate, Decimal>,
}

/// Pure function of the input set: one pass accumulates the total, the
/// per-category views, and the per-date sums; a second pass over the
/// ascending dates turns the per-date sums into cumulative balances.
pub fn aggregate(transactions: &HashSet<Transaction>) -> Aggregates {
    let mut aggregates = Aggregates::default();
    let mut daily_sums: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();

    for transaction in transactions {
        aggregates.total += transaction.amount;

        *aggregates
            .category_totals
            .entry(transaction.ledger.clone())
            .or_default() += transaction.amount;
        aggregates
            .category_transactions
            .entry(transaction.ledger.clone())
            .or_default()
            .push(transaction.clone());

        *daily_sums.entry(transaction.date).or_default() += transaction.amount;
    }

    for rows in aggregates.category_transactions.values_mut() {
        sort_transactions(rows);
    }

    let mut running = Decimal::ZERO;
    for (date, day_sum) in daily_sums {
        running += day_sum;
        aggregates.daily_balances.insert(date, running);
    }

    aggregates
}
