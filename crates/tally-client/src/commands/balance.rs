use chrono::NaiveDate;

use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{BalanceData, DailyBalanceRow, DailyBalancesData};
use crate::error::{ClientError, ClientResult};
use crate::ledger::{ALL_CATEGORY, Snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceQuery {
    /// Every transaction date with its cumulative balance, ascending.
    All,
    /// Cumulative balance as of end of the given date.
    AsOf(NaiveDate),
}

/// Interprets the optional positional argument of `tally balance`. `today`
/// is supplied by the caller so the default reflects each invocation, not
/// some moment captured at construction.
pub fn query_from_arg(arg: Option<&str>, today: NaiveDate) -> ClientResult<BalanceQuery> {
    let Some(raw) = arg else {
        return Ok(BalanceQuery::AsOf(today));
    };
    if raw == ALL_CATEGORY {
        return Ok(BalanceQuery::All);
    }
    parse_iso_date(raw).map(BalanceQuery::AsOf)
}

pub fn run(snapshot: &Snapshot, query: BalanceQuery) -> ClientResult<SuccessEnvelope> {
    match query {
        BalanceQuery::All => {
            let rows = snapshot
                .daily_balances()
                .map(|(date, balance)| DailyBalanceRow {
                    date: date.format("%Y-%m-%d").to_string(),
                    balance,
                })
                .collect::<Vec<_>>();
            success("balance all", DailyBalancesData { rows })
        }
        BalanceQuery::AsOf(date) => success(
            "balance",
            BalanceData {
                as_of: date.format("%Y-%m-%d").to_string(),
                balance: snapshot.balance_as_of(date),
            },
        ),
    }
}

fn parse_iso_date(value: &str) -> ClientResult<NaiveDate> {
    if !looks_like_iso_date(value) {
        return Err(balance_argument_error(value));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| balance_argument_error(value))
}

fn looks_like_iso_date(value: &str) -> bool {
    if value.len() != 10 {
        return false;
    }
    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return false;
        }
    }
    true
}

fn balance_argument_error(value: &str) -> ClientError {
    ClientError::invalid_argument_for_command(
        &format!("`{value}` must be `All` or a real calendar date in YYYY-MM-DD format."),
        Some("balance"),
    )
}
