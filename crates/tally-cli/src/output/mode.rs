use crate::cli::Commands;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    match command {
        Commands::Transactions { json, .. }
        | Commands::Total { json, .. }
        | Commands::Balance { json, .. } => {
            if *json {
                OutputMode::Json
            } else {
                OutputMode::Text
            }
        }
    }
}
