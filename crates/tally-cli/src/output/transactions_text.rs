use std::io;

use serde_json::Value;

use super::format::{self, Align, Column};

pub fn render_categories(data: &Value) -> io::Result<String> {
    let command = data
        .get("command")
        .and_then(Value::as_str)
        .unwrap_or("transactions");
    let categories = data
        .get("categories")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("categories output requires categories"))?;

    let mut lines = vec![
        format!("Provide a category, e.g. `tally {command} <category>`."),
        "Category names are case-sensitive.".to_string(),
        String::new(),
        "Categories:".to_string(),
    ];
    for category in categories {
        let label = category.as_str().unwrap_or("unknown");
        lines.push(format!("  {label}"));
    }

    Ok(lines.join("\n"))
}

pub fn render_transactions(data: &Value) -> io::Result<String> {
    let category = data
        .get("category")
        .and_then(Value::as_str)
        .unwrap_or("unknown");
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("transactions output requires rows"))?;

    if rows.is_empty() {
        return Ok(format!("No transactions recorded for {category}."));
    }

    let noun = if rows.len() == 1 {
        "transaction"
    } else {
        "transactions"
    };
    let mut lines = vec![format!("{} {noun} in {category}:", rows.len()), String::new()];

    let columns = [
        Column {
            name: "Date",
            align: Align::Left,
        },
        Column {
            name: "Company",
            align: Align::Left,
        },
        Column {
            name: "Ledger",
            align: Align::Left,
        },
        Column {
            name: "Amount",
            align: Align::Right,
        },
    ];
    let table_rows = rows
        .iter()
        .map(|row| {
            vec![
                field(row, "date"),
                field(row, "company"),
                field(row, "ledger"),
                field(row, "amount"),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    lines.extend(format::render_table(&columns, &table_rows));
    Ok(lines.join("\n"))
}

pub fn render_total(data: &Value) -> io::Result<String> {
    let category = data
        .get("category")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("total output requires a category"))?;
    let total = data
        .get("total")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("total output requires a total"))?;

    Ok(format!("Total balance for {category}: {total}"))
}

fn field(row: &Value, key: &str) -> String {
    row.get(key)
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string()
}
