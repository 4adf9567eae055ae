use std::io;

use serde_json::Value;

pub fn render_balance(data: &Value) -> io::Result<String> {
    let as_of = data
        .get("as_of")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("balance output requires as_of"))?;
    let balance = data
        .get("balance")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("balance output requires a balance"))?;

    Ok(format!("Balance as of {as_of}: {balance}"))
}

/// One `YYYY-MM-DD <amount>` line per transaction date, ascending.
pub fn render_daily_balances(data: &Value) -> io::Result<String> {
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("daily balance output requires rows"))?;

    if rows.is_empty() {
        return Ok("No dated balances to report.".to_string());
    }

    let lines = rows
        .iter()
        .map(|row| {
            let date = row.get("date").and_then(Value::as_str).unwrap_or("unknown");
            let balance = row
                .get("balance")
                .and_then(Value::as_str)
                .unwrap_or("unknown");
            format!("{date} {balance}")
        })
        .collect::<Vec<String>>();

    Ok(lines.join("\n"))
}
