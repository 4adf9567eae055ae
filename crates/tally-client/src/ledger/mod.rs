pub(crate) mod aggregate;

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{ClientError, ClientResult};
use crate::fetch::TransactionSource;

pub use aggregate::{Aggregates, aggregate};

/// Synthetic category accepted by the query layer but never stored.
pub const ALL_CATEGORY: &str = "All";

/// Company-name tokens preserved verbatim during display formatting.
/// Matching is case-sensitive: a lowercase "bc" is a regular word.
const COMPANY_ABBREVIATIONS: [&str; 4] = ["AB", "BC", "DHL", "YVR"];

/// One normalized ledger record. Identity is the full field tuple, so a
/// uniqueness-preserving set collapses records repeated across feed pages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transaction {
    pub amount: Decimal,
    pub company: String,
    pub date: NaiveDate,
    pub ledger: String,
}

/// Splits on whitespace, capitalizes each word (first character uppercase,
/// remainder lowercase) unless it is a known abbreviation, and rejoins with
/// single spaces.
pub fn format_company_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            if COMPANY_ABBREVIATIONS.contains(&word) {
                word.to_string()
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut formatted = first.to_uppercase().collect::<String>();
            formatted.push_str(&chars.as_str().to_lowercase());
            formatted
        }
        None => String::new(),
    }
}

/// The full transaction set plus its derived aggregates, built once at
/// startup and read-only afterward. Queries that take a date expect the
/// caller to supply "now" explicitly rather than capturing it here.
#[derive(Debug, Clone)]
pub struct Snapshot {
    transactions: HashSet<Transaction>,
    aggregates: Aggregates,
}

impl Snapshot {
    pub fn from_transactions(transactions: HashSet<Transaction>) -> Self {
        let aggregates = aggregate(&transactions);
        Self {
            transactions,
            aggregates,
        }
    }

    pub fn load(source: &TransactionSource) -> ClientResult<Self> {
        Ok(Self::from_transactions(source.load()?))
    }

    /// Total balance for a category, or the grand total for `"All"`.
    pub fn total_balance(&self, category: &str) -> ClientResult<Decimal> {
        if category == ALL_CATEGORY {
            return Ok(self.aggregates.total);
        }
        match self.aggregates.category_totals.get(category) {
            Some(total) => Ok(*total),
            None => Err(self.unknown_category(category)),
        }
    }

    /// Transactions in a category, or every transaction for `"All"`, sorted
    /// by (date, company, ledger, amount) for stable output.
    pub fn transactions_in(&self, category: &str) -> ClientResult<Vec<Transaction>> {
        if category == ALL_CATEGORY {
            let mut rows = self.transactions.iter().cloned().collect::<Vec<_>>();
            sort_transactions(&mut rows);
            return Ok(rows);
        }
        match self.aggregates.category_transactions.get(category) {
            Some(rows) => Ok(rows.clone()),
            None => Err(self.unknown_category(category)),
        }
    }

    /// Cumulative balance per transaction date, ascending.
    pub fn daily_balances(&self) -> impl Iterator<Item = (NaiveDate, Decimal)> + '_ {
        self.aggregates
            .daily_balances
            .iter()
            .map(|(date, balance)| (*date, *balance))
    }

    /// Cumulative balance as of end of `date`: the value at the latest
    /// transaction date on or before it, or zero when every transaction is
    /// later.
    pub fn balance_as_of(&self, date: NaiveDate) -> Decimal {
        self.aggregates
            .daily_balances
            .range(..=date)
            .next_back()
            .map(|(_, balance)| *balance)
            .unwrap_or(Decimal::ZERO)
    }

    /// Distinct category labels observed in the data, sorted. The `"All"`
    /// sentinel is synthetic and never included.
    pub fn categories(&self) -> Vec<String> {
        self.aggregates.category_totals.keys().cloned().collect()
    }

    fn unknown_category(&self, category: &str) -> ClientError {
        ClientError::unknown_category(category, &self.categories())
    }
}

pub(crate) fn sort_transactions(rows: &mut [Transaction]) {
    rows.sort_by(|left, right| {
        left.date
            .cmp(&right.date)
            .then_with(|| left.company.cmp(&right.company))
            .then_with(|| left.ledger.cmp(&right.ledger))
            .then_with(|| left.amount.cmp(&right.amount))
    });
}
