use chrono::Local;
use tally_client::commands::{balance, total, transactions};
use tally_client::{ClientResult, Snapshot, SuccessEnvelope, TransactionSource};

use crate::cli::{Cli, Commands};

/// Validates arguments, loads the snapshot once, and routes to the matching
/// command. Argument problems surface before any page is fetched.
pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Transactions { category, .. } => {
            let snapshot = load_snapshot(cli)?;
            transactions::run(&snapshot, category.as_deref())
        }
        Commands::Total { category, .. } => {
            let snapshot = load_snapshot(cli)?;
            total::run(&snapshot, category.as_deref())
        }
        Commands::Balance { date, .. } => {
            // Taken fresh on every invocation so the default tracks the
            // clock instead of a moment captured at startup.
            let today = Local::now().date_naive();
            let query = balance::query_from_arg(date.as_deref(), today)?;
            let snapshot = load_snapshot(cli)?;
            balance::run(&snapshot, query)
        }
    }
}

fn load_snapshot(cli: &Cli) -> ClientResult<Snapshot> {
    let source = TransactionSource::new(&cli.base_url)?;
    Snapshot::load(&source)
}
