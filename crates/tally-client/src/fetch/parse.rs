use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::{ClientError, ClientResult};
use crate::ledger::{Transaction, format_company_name};

/// One decoded feed page: the declared grand total plus this page's records,
/// already normalized into transactions.
#[derive(Debug, Clone)]
pub(crate) struct Page {
    pub(crate) total_count: u64,
    pub(crate) records: Vec<Transaction>,
}

pub(crate) fn parse_page(url: &str, body: &Value) -> ClientResult<Page> {
    let Some(object) = body.as_object() else {
        return Err(page_error(url, "response is not a JSON object"));
    };

    let total_count = object
        .get("totalCount")
        .and_then(Value::as_u64)
        .ok_or_else(|| page_error(url, "`totalCount` is missing or not a non-negative integer"))?;

    let raw_records = object
        .get("transactions")
        .and_then(Value::as_array)
        .ok_or_else(|| page_error(url, "`transactions` is missing or not an array"))?;

    let mut records = Vec::with_capacity(raw_records.len());
    for (index, raw) in raw_records.iter().enumerate() {
        let record = parse_record(raw)
            .map_err(|detail| page_error(url, &format!("record {}: {detail}", index + 1)))?;
        records.push(record);
    }

    Ok(Page {
        total_count,
        records,
    })
}

fn parse_record(raw: &Value) -> Result<Transaction, String> {
    let Some(object) = raw.as_object() else {
        return Err("entry is not a JSON object".to_string());
    };

    let amount = read_amount(object.get("Amount"))?;
    let company = read_string(object.get("Company"), "Company")?;
    let date = read_date(object.get("Date"))?;
    let ledger = read_string(object.get("Ledger"), "Ledger")?;

    Ok(Transaction {
        amount,
        company: format_company_name(&company),
        date,
        ledger,
    })
}

/// `Amount` arrives as a decimal string in practice, but a bare JSON number
/// is accepted too. Either way the digits are parsed exactly.
fn read_amount(value: Option<&Value>) -> Result<Decimal, String> {
    let text = match value {
        Some(Value::String(raw)) => raw.trim().to_string(),
        Some(Value::Number(raw)) => raw.to_string(),
        Some(_) => return Err("`Amount` is neither a string nor a number".to_string()),
        None => return Err("`Amount` is missing".to_string()),
    };

    text.parse::<Decimal>()
        .map_err(|_| format!("`Amount` value `{text}` is not a decimal number"))
}

fn read_date(value: Option<&Value>) -> Result<NaiveDate, String> {
    let raw = match value {
        Some(Value::String(text)) => text.as_str(),
        Some(_) => return Err("`Date` is not a string".to_string()),
        None => return Err("`Date` is missing".to_string()),
    };

    if !looks_like_iso_date(raw) {
        return Err(format!("`Date` value `{raw}` is not in YYYY-MM-DD format"));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| format!("`Date` value `{raw}` is not a real calendar date"))
}

fn read_string(value: Option<&Value>, field: &str) -> Result<String, String> {
    match value {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(format!("`{field}` is not a string")),
        None => Err(format!("`{field}` is missing")),
    }
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

fn page_error(url: &str, detail: &str) -> ClientError {
    ClientError::data_source(url, detail)
}
