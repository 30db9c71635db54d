use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use balance_report::bin_utils::{ReportOptions, Service};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Prints the balances of the whale account and the bot accounts.
#[derive(Parser)]
#[command(name = "balance-report", version)]
struct Cli {
    /// Balance snapshot in CSV format (`account,address,denom,amount`)
    snapshot: PathBuf,
    /// Include every bot account found in the snapshot
    #[arg(short, long)]
    all: bool,
    /// Number of configured bots to report
    #[arg(long, env = "BALANCE_REPORT_BOTS", default_value_t = 0)]
    bots: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let file = File::open(&cli.snapshot)
        .with_context(|| format!("Failed to open `{}`", cli.snapshot.display()))?;

    let service = Service {
        input: file,
        output: &mut std::io::stdout(),
        options: ReportOptions {
            include_all: cli.all,
            bots: cli.bots,
        },
    };
    service.run()
}
