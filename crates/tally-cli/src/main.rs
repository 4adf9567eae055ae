mod cli;
mod dispatch;
mod output;
mod stdout_io;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use stdout_io::write_stdout_line;
use tally_client::ClientError;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

fn run() -> Result<ExitCode, ExitCode> {
    let raw_args = std::env::args().collect::<Vec<String>>();
    if raw_args.len() == 1 {
        // A bare invocation is a usage error, not a help screen.
        let error = ClientError::missing_command();
        if output::print_failure(&error, infer_requested_output_mode(&raw_args)).is_err() {
            return Err(ExitCode::from(2));
        }
        return Err(ExitCode::from(1));
    }

    let parsed = cli::Cli::try_parse();
    let cli = match parsed {
        Ok(value) => value,
        Err(err) => {
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                if write_stdout_line(err.to_string().trim_end()).is_err() {
                    return Err(ExitCode::from(2));
                }
                return Ok(ExitCode::SUCCESS);
            }

            let command_hint = command_path_from_args(&raw_args);
            let clean_message = strip_clap_boilerplate(&err.to_string());
            let parse_error =
                ClientError::invalid_argument_for_command(&clean_message, command_hint.as_deref());
            let mode = infer_requested_output_mode(&raw_args);
            if output::print_failure(&parse_error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            return Err(ExitCode::from(1));
        }
    };
    let mode = output::mode_for_command(&cli.command);

    match dispatch::dispatch(&cli) {
        Ok(success) => {
            if output::print_success(&success, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(exit_code_for_error(&error))
        }
    }
}

/// Strips clap's trailing boilerplate (Usage line, "For more information"
/// hint) so the recovery steps are the single source of guidance.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

fn command_path_from_args(raw_args: &[String]) -> Option<String> {
    let first_non_flag = raw_args
        .iter()
        .skip(1)
        .find(|value| !value.starts_with('-'))?;

    match first_non_flag.as_str() {
        "transactions" => Some("transactions".to_string()),
        "total" => Some("total".to_string()),
        "balance" => Some("balance".to_string()),
        _ => None,
    }
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}

fn exit_code_for_error(error: &ClientError) -> ExitCode {
    if is_environment_error(error) {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

/// Feed and serialization failures are environment problems rather than
/// caller mistakes, and exit with a distinct code.
fn is_environment_error(error: &ClientError) -> bool {
    error.code.starts_with("internal_") || error.code == "data_source_error"
}
