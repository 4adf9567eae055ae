mod balances_text;
mod error_text;
mod format;
mod json;
mod mode;
mod transactions_text;

use std::io;

use tally_client::{ClientError, SuccessEnvelope};

use crate::stdout_io::write_stdout_line;

pub use mode::{OutputMode, mode_for_command};

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Text => render_text_success(success)?,
        OutputMode::Json => json::render_success_json(success)?,
    };
    write_stdout_line(&body)
}

pub fn print_failure(error: &ClientError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text => error_text::render_error(error),
    };
    write_stdout_line(&body)
}

fn render_text_success(success: &SuccessEnvelope) -> io::Result<String> {
    match success.command.as_str() {
        "categories" => transactions_text::render_categories(&success.data),
        "transactions" => transactions_text::render_transactions(&success.data),
        "total" => transactions_text::render_total(&success.data),
        "balance" => balances_text::render_balance(&success.data),
        "balance all" => balances_text::render_daily_balances(&success.data),
        _ => Err(io::Error::other(format!(
            "unsupported text output command `{}`",
            success.command
        ))),
    }
}
