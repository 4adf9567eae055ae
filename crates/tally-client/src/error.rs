use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `tally {cmd} --help` for usage."),
            None => "Run `tally --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn missing_command() -> Self {
        Self::invalid_argument_with_recovery(
            "Choose one of the available commands: transactions, total, balance.",
            vec![
                "Run `tally transactions` to list the known categories.".to_string(),
                "Run `tally --help` for usage.".to_string(),
            ],
        )
    }

    pub fn data_source(url: &str, detail: &str) -> Self {
        Self::new(
            "data_source_error",
            &format!("The transaction feed at `{url}` could not be read: {detail}"),
            vec![
                "Check that the feed URL is reachable from this machine.".to_string(),
                "Retry once the upstream service is healthy.".to_string(),
            ],
        )
        .with_data(json!({
            "url": url,
        }))
    }

    pub fn unknown_category(category: &str, known: &[String]) -> Self {
        Self::new(
            "unknown_category",
            &format!("Category `{category}` does not appear in the transaction data."),
            vec![
                "Run `tally transactions` to list the known categories.".to_string(),
                "Category names are case-sensitive; copy one exactly.".to_string(),
            ],
        )
        .with_data(json!({
            "category": category,
            "known_categories": known,
        }))
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
