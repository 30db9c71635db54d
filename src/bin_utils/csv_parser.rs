use std::io::Read;

use anyhow::{Context, Result, bail};
use csv::Trim;
use serde::Deserialize;

use crate::source::{BalanceSource, in_memory_source::InMemoryBalanceSource};

/// Name of the account that is reported as the whale.
pub const WHALE_ACCOUNT: &str = "whale";

#[derive(Debug, Deserialize)]
pub struct BalanceRow {
    pub account: String,
    pub address: String,
    pub denom: Option<String>,
    pub amount: Option<String>,
}

/// Accounts found in a balance snapshot, bots in order of first appearance.
#[derive(Debug)]
pub struct Snapshot {
    pub bots: Vec<InMemoryBalanceSource>,
    pub whale: InMemoryBalanceSource,
}

/// Reads a balance snapshot in CSV format (`account,address,denom,amount`).
///
/// A row without a denom registers the account without staging a balance.
pub fn read_snapshot<R>(source: R) -> Result<Snapshot>
where
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(source);

    let mut accounts: Vec<InMemoryBalanceSource> = Vec::new();
    for row in reader.deserialize() {
        let row: BalanceRow = row.context("Failed to parse balance snapshot")?;

        let idx = match accounts
            .iter()
            .position(|acc| acc.account().name == row.account)
        {
            Some(idx) => idx,
            None => {
                accounts.push(InMemoryBalanceSource::new(&row.account, &row.address));
                accounts.len() - 1
            }
        };
        let acc = &mut accounts[idx];
        if acc.account().address != row.address {
            bail!(
                "Account `{}` has conflicting addresses `{}` and `{}`",
                row.account,
                acc.account().address,
                row.address
            );
        }
        if let Some(denom) = row.denom.filter(|denom| !denom.is_empty()) {
            acc.stage(denom, row.amount.unwrap_or_default());
        }
    }

    let Some(whale_idx) = accounts
        .iter()
        .position(|acc| acc.account().name == WHALE_ACCOUNT)
    else {
        bail!("Balance snapshot has no `{WHALE_ACCOUNT}` account");
    };
    let whale = accounts.remove(whale_idx);

    Ok(Snapshot {
        bots: accounts,
        whale,
    })
}
