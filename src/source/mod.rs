use thiserror::Error;

use crate::{account::Account, amount::AmountError};

pub mod in_memory_source;

#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("Invalid amount for `{denom}` on account `{account}`: {source}")]
    InvalidAmount {
        account: String,
        denom: String,
        source: AmountError,
    },
    #[error("Denom `{denom}` appears more than once on account `{account}`")]
    DuplicateDenom { account: String, denom: String },
}

/// Provides the balances of a single account.
///
/// `account` reflects the state of the last successful `refresh`.
pub trait BalanceSource {
    fn refresh(&mut self) -> Result<(), RefreshError>;

    fn account(&self) -> &Account;
}
