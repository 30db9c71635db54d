//! Wires a balance snapshot into the report, so the binary and the
//! integration tests share the same entry point.

use std::io::{Read, Write};

use anyhow::{Context, Result};
use csv_parser::read_snapshot;
use tracing::{debug, info, warn};

use crate::{
    account::Account,
    report::render_report,
    source::{BalanceSource, in_memory_source::InMemoryBalanceSource},
};
pub mod csv_parser;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Report every bot found in the snapshot.
    pub include_all: bool,
    /// Number of bots to report when `include_all` is not set.
    pub bots: usize,
}

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub options: ReportOptions,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(self) -> Result<()> {
        let snapshot = read_snapshot(self.input)?;

        let mut bots = snapshot.bots;
        if self.options.include_all {
            info!(bots = bots.len(), "reporting all bots in snapshot");
        } else {
            if bots.len() < self.options.bots {
                warn!(
                    configured = self.options.bots,
                    found = bots.len(),
                    "snapshot has fewer bots than configured"
                );
            }
            bots.truncate(self.options.bots);
        }
        let mut whale = snapshot.whale;

        // every account must be refreshed before anything is measured
        refresh(&mut whale).context("Failed to refresh whale account balances")?;
        for bot in &mut bots {
            refresh(bot).context("Failed to refresh bot account balances")?;
        }

        let bot_accounts: Vec<Account> = bots.iter().map(|bot| bot.account().clone()).collect();
        let report = render_report(&bot_accounts, whale.account());

        self.output
            .write_all(report.as_bytes())
            .context("Failed to write balance report")?;
        self.output
            .flush()
            .context("Failed to flush balance report")?;
        Ok(())
    }
}

fn refresh(source: &mut InMemoryBalanceSource) -> Result<()> {
    source.refresh()?;
    let acc = source.account();
    debug!(
        account = %acc.name,
        address = %acc.address,
        denoms = acc.balances.len(),
        "refreshed balances"
    );
    Ok(())
}
