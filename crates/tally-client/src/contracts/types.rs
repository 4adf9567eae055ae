use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TransactionRow {
    pub date: String,
    pub company: String,
    pub ledger: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionsData {
    pub category: String,
    pub count: usize,
    pub rows: Vec<TransactionRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TotalData {
    pub category: String,
    pub total: Decimal,
}

/// Returned when `transactions` or `total` is invoked without a category.
/// The `command` field names the subcommand to rerun with one of the labels.
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesData {
    pub command: String,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyBalanceRow {
    pub date: String,
    pub balance: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyBalancesData {
    pub rows: Vec<DailyBalanceRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BalanceData {
    pub as_of: String,
    pub balance: Decimal,
}
