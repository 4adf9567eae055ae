pub mod commands;
pub mod contracts;
pub mod error;
pub mod fetch;
pub mod ledger;

pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use error::{ClientError, ClientResult};
pub use fetch::TransactionSource;
pub use ledger::{ALL_CATEGORY, Snapshot, Transaction};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
