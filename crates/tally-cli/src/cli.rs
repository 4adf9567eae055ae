use clap::{Parser, Subcommand};

/// Upstream default for the paginated transaction feed.
pub const DEFAULT_FEED_URL: &str = "http://resttest.bench.co/transactions";

#[derive(Debug, Parser)]
#[command(
    name = "tally",
    version,
    about = "transaction ledger summaries from a remote feed",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Base URL of the transaction feed (pages served at <base>/<n>.json)
    #[arg(long, env = "TALLY_API_URL", default_value = DEFAULT_FEED_URL, global = true)]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List transactions for a category, or the known categories
    Transactions {
        /// Category label (case-sensitive), or `All` for every transaction
        category: Option<String>,
        /// Emit structured JSON output for machine parsing
        #[arg(long)]
        json: bool,
    },
    /// Report the summed balance for a category, or list the categories
    Total {
        /// Category label (case-sensitive), or `All` for the grand total
        category: Option<String>,
        /// Emit structured JSON output for machine parsing
        #[arg(long)]
        json: bool,
    },
    /// Report cumulative balances
    Balance {
        /// `All` for every date, or a YYYY-MM-DD date (defaults to today)
        date: Option<String>,
        /// Emit structured JSON output for machine parsing
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}
